use crate::{error, storage::Upload, Error};
use axum::{
    async_trait,
    extract::{multipart::MultipartError, FromRequest, Multipart, Request},
};
use validator::ValidateLength;

/// Length of the `title` column, in characters.
const MAX_TITLE_LENGTH: u64 = 255;

/// Multipart body of the question create and update requests.
///
/// An empty `title` or `description` field clears the value.
#[derive(Debug, Default)]
pub struct QuestionForm {
    pub test_id: Option<i32>,
    pub title: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub file: Option<Upload>,
}

#[async_trait]
impl<S> FromRequest<S> for QuestionForm
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state).await.map_err(|rejection| {
            debug!("rejected multipart body: {}", rejection);
            error::MULTIPART_INVALID
        })?;

        let mut form = QuestionForm::default();

        while let Some(field) = multipart.next_field().await.map_err(invalid)? {
            let name = field.name().map(ToOwned::to_owned);

            match name.as_deref() {
                Some("test_id") => {
                    let text = field.text().await.map_err(invalid)?;
                    let text = text.trim();

                    if !text.is_empty() {
                        let test_id = text.parse().map_err(|_| {
                            debug!("test_id is not a number: {}", text);
                            error::MULTIPART_INVALID
                        })?;
                        form.test_id = Some(test_id);
                    }
                }
                Some("title") => {
                    let title = non_empty(field.text().await.map_err(invalid)?);

                    if let Some(title) = &title {
                        if !title.validate_length(None, Some(MAX_TITLE_LENGTH), None) {
                            debug!("title is longer than {} characters", MAX_TITLE_LENGTH);
                            return Err(error::MULTIPART_VALIDATE_INVALID);
                        }
                    }

                    form.title = Some(title);
                }
                Some("description") => {
                    form.description = Some(non_empty(field.text().await.map_err(invalid)?));
                }
                Some("file") => {
                    let file_name = field.file_name().unwrap_or_default().to_owned();
                    let content = field.bytes().await.map_err(invalid)?;

                    // browsers send an empty part when no file was picked
                    if file_name.is_empty() && content.is_empty() {
                        continue;
                    }

                    form.file = Some(Upload::new(file_name, content));
                }
                name => debug!("ignoring multipart field {:?}", name),
            }
        }

        Ok(form)
    }
}

fn invalid(error: MultipartError) -> Error {
    debug!("invalid multipart field: {}", error);
    error::MULTIPART_INVALID
}

fn non_empty(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
