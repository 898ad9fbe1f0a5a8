//! Transactional persistence of tests and questions.
//!
//! Every mutating operation runs in its own transaction. Failures roll the transaction back
//! and are raised as the error registered for the (entity, action) pair.

mod error;
mod question;

pub use error::*;
pub use question::*;
pub use test::*;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DatabaseTransaction, DbErr,
    EntityTrait, FromQueryResult, IntoActiveModel, ModelTrait, Select, TransactionTrait,
};

#[async_trait]
pub trait Repository: Send + Sync {
    type Entity: EntityTrait<Model = Self::Model>;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Clone
        + Send
        + Sync
        + 'static;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + Send
        + 'static;
    type Schema: Send + 'static;
    type Create: Send + 'static;
    type Update: Send + 'static;
    type Error: ErrorFamily;

    /// Name used in not found messages.
    const NAME: &'static str;

    /// Relationship fields every returned schema carries. Not read by the default operations,
    /// `hydrate` has to populate each of them.
    const RELATIONSHIPS: &'static [&'static str];

    fn find(id: i32) -> Select<Self::Entity>;

    fn id(model: &Self::Model) -> i32;

    /// New record with every field of `data` set, the rest left to column defaults.
    fn new_record(data: Self::Create) -> Self::ActiveModel;

    /// Changes of a partial update, only the fields present in `data` are set.
    fn changes(previous: &Self::Model, data: Self::Update) -> Self::ActiveModel;

    /// Loads every relationship named in `RELATIONSHIPS` and builds the schema of `model`.
    async fn hydrate<C: ConnectionTrait>(conn: &C, model: Self::Model)
        -> Result<Self::Schema, DbErr>;

    async fn before_delete(
        &self,
        _txn: &DatabaseTransaction,
        _record: &Self::Model,
    ) -> Result<(), Cause> {
        Ok(())
    }

    async fn after_update(
        &self,
        _txn: &DatabaseTransaction,
        _previous: &Self::Model,
        _current: &Self::Model,
    ) -> Result<(), Cause> {
        Ok(())
    }

    async fn create<C>(&self, db: &C, data: Self::Create) -> Result<Self::Schema, Self::Error>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = begin::<_, Self::Error>(db, Action::Create).await?;

        let result = async {
            let model = Self::new_record(data).insert(&txn).await?;
            trace!("created {} {}", Self::NAME, Self::id(&model));

            Ok::<_, Cause>(Self::hydrate(&txn, model).await?)
        }
        .await;

        settle(txn, Action::Create, result).await
    }

    async fn update<C>(
        &self,
        db: &C,
        id: i32,
        data: Self::Update,
    ) -> Result<Self::Schema, Self::Error>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = begin::<_, Self::Error>(db, Action::Update).await?;

        let result = async {
            let previous = find_existing::<Self, _>(&txn, id).await?;
            let current = Self::changes(&previous, data).update(&txn).await?;

            self.after_update(&txn, &previous, &current).await?;

            Ok::<_, Cause>(Self::hydrate(&txn, current).await?)
        }
        .await;

        settle(txn, Action::Update, result).await
    }

    /// Deletes the record and returns its id. `before_delete` runs first, inside the transaction.
    async fn delete<C>(&self, db: &C, id: i32) -> Result<i32, Self::Error>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = begin::<_, Self::Error>(db, Action::Delete).await?;

        let result = async {
            let record = find_existing::<Self, _>(&txn, id).await?;

            self.before_delete(&txn, &record).await?;
            ActiveModelTrait::delete(record.into_active_model(), &txn).await?;

            Ok::<_, Cause>(id)
        }
        .await;

        settle(txn, Action::Delete, result).await
    }

    async fn get<C>(&self, db: &C, id: i32) -> Result<Self::Schema, Self::Error>
    where
        C: ConnectionTrait,
    {
        let result = async {
            let record = find_existing::<Self, _>(db, id).await?;

            Ok::<_, Cause>(Self::hydrate(db, record).await?)
        }
        .await;

        result.map_err(|cause| <Self::Error as ErrorFamily>::raise(Action::Get, cause))
    }
}

async fn find_existing<R, C>(conn: &C, id: i32) -> Result<R::Model, Cause>
where
    R: Repository + ?Sized,
    C: ConnectionTrait,
{
    R::find(id).one(conn).await?.ok_or(Cause::NotFound {
        entity: R::NAME,
        id,
    })
}

async fn begin<C, E>(db: &C, action: Action) -> Result<DatabaseTransaction, E>
where
    C: ConnectionTrait + TransactionTrait,
    E: ErrorFamily,
{
    db.begin()
        .await
        .map_err(|error| E::raise(action, error.into()))
}

/// Commits on success. On failure the transaction is rolled back before the error is raised.
async fn settle<T, E>(
    txn: DatabaseTransaction,
    action: Action,
    result: Result<T, Cause>,
) -> Result<T, E>
where
    E: ErrorFamily,
{
    match result {
        Ok(value) => {
            txn.commit()
                .await
                .map_err(|error| E::raise(action, error.into()))?;

            Ok(value)
        }
        Err(cause) => {
            if let Err(error) = txn.rollback().await {
                error!("failed to roll back {} {}: {}", action, E::ENTITY, error);
            }

            Err(E::raise(action, cause))
        }
    }
}
