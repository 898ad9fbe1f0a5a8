use super::{Cause, QuestionError, Repository};
use crate::{
    schemas::{AnswerSchema, QuestionCreate, QuestionSchema, QuestionUpdate},
    storage::ObjectStore,
    utils::set_option,
};
use async_trait::async_trait;
use chrono::Utc;
use entity::{answer, question};
use sea_orm::{
    ActiveValue::{NotSet, Set, Unchanged},
    ConnectionTrait, DatabaseTransaction, DbErr, EntityTrait, LoaderTrait, ModelTrait,
    QueryOrder, Select,
};

pub struct QuestionRepository<'a, O: ?Sized> {
    storage: &'a O,
}

impl<'a, O: ObjectStore + ?Sized> QuestionRepository<'a, O> {
    pub fn new(storage: &'a O) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<O: ObjectStore + ?Sized> Repository for QuestionRepository<'_, O> {
    type Entity = question::Entity;
    type Model = question::Model;
    type ActiveModel = question::ActiveModel;
    type Schema = QuestionSchema;
    type Create = QuestionCreate;
    type Update = QuestionUpdate;
    type Error = QuestionError;

    const NAME: &'static str = "Question";
    const RELATIONSHIPS: &'static [&'static str] = &["answers"];

    fn find(id: i32) -> Select<question::Entity> {
        question::Entity::find_by_id(id)
    }

    fn id(model: &question::Model) -> i32 {
        model.id
    }

    fn new_record(data: QuestionCreate) -> question::ActiveModel {
        let now = Utc::now();

        question::ActiveModel {
            id: NotSet,
            test_id: Set(data.test_id),
            title: Set(data.title),
            description: Set(data.description),
            attachment: Set(data.attachment),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    fn changes(previous: &question::Model, data: QuestionUpdate) -> question::ActiveModel {
        question::ActiveModel {
            id: Unchanged(previous.id),
            test_id: NotSet,
            title: set_option(data.title),
            description: set_option(data.description),
            attachment: set_option(data.attachment.map(Some)),
            created_at: NotSet,
            updated_at: Set(Utc::now()),
        }
    }

    async fn hydrate<C: ConnectionTrait>(
        conn: &C,
        model: question::Model,
    ) -> Result<QuestionSchema, DbErr> {
        let answers = model
            .find_related(answer::Entity)
            .order_by_asc(answer::Column::Id)
            .all(conn)
            .await?;

        Ok(QuestionSchema::new(
            model,
            answers.into_iter().map(AnswerSchema::from).collect(),
        ))
    }

    async fn before_delete(
        &self,
        _txn: &DatabaseTransaction,
        record: &question::Model,
    ) -> Result<(), Cause> {
        if let Some(key) = record.attachment_key() {
            self.storage.delete(key).await?;
            debug!("deleted attachment {} of question {}", key, record.id);
        }

        Ok(())
    }

    async fn after_update(
        &self,
        _txn: &DatabaseTransaction,
        previous: &question::Model,
        current: &question::Model,
    ) -> Result<(), Cause> {
        let Some(key) = previous.attachment_key() else {
            return Ok(());
        };

        if current.attachment_key() != Some(key) {
            self.storage.delete(key).await?;
            debug!("deleted replaced attachment {} of question {}", key, current.id);
        }

        Ok(())
    }
}

/// Builds the schemas of `questions` with their answers, in two queries.
pub(crate) async fn load_questions<C: ConnectionTrait>(
    conn: &C,
    questions: Vec<question::Model>,
) -> Result<Vec<QuestionSchema>, DbErr> {
    if questions.is_empty() {
        return Ok(Vec::new());
    }

    let answers = questions
        .load_many(
            answer::Entity::find().order_by_asc(answer::Column::Id),
            conn,
        )
        .await?;

    Ok(questions
        .into_iter()
        .zip(answers)
        .map(|(question, answers)| {
            QuestionSchema::new(
                question,
                answers.into_iter().map(AnswerSchema::from).collect(),
            )
        })
        .collect())
}
