mod constants;
mod db;

pub use constants::*;
pub use db::*;

use crate::storage::StorageError;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::{BufMut, Bytes, BytesMut};
use serde_json::json;
use std::borrow::Cow;

#[derive(Debug, Clone)]
pub struct Error {
    status: StatusCode,
    code: u32,
    message: Cow<'static, str>,
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl Error {
    #[inline]
    const fn new(status: StatusCode, code: u32, message: &'static str) -> Self {
        Self {
            status,
            code,
            message: Cow::Borrowed(message),
        }
    }

    #[inline]
    pub(crate) fn with_message(
        status: StatusCode,
        code: u32,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    #[inline]
    pub const fn code(&self) -> u32 {
        self.code
    }

    #[inline]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(128).writer();

        serde_json::to_writer(
            &mut buf,
            &json!({
                "code": self.code(),
                "error": self.message(),
            }),
        )
        .expect("failed to serialize error");

        buf.into_inner().freeze()
    }
}

impl IntoResponse for Error {
    #[inline]
    fn into_response(self) -> Response {
        let buf = self.to_bytes();
        let mut res = (self.status, buf).into_response();

        res.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::APPLICATION_JSON.as_ref()),
        );

        res
    }
}

impl From<StorageError> for Error {
    fn from(error: StorageError) -> Self {
        let code = match error {
            StorageError::Empty => constants::ATTACHMENT_EMPTY.code(),
            StorageError::TooLarge { .. } => constants::ATTACHMENT_TOO_LARGE.code(),
            StorageError::Upload { .. } | StorageError::Delete { .. } => {
                constants::STORAGE_UNAVAILABLE.code()
            }
        };

        Error::with_message(storage_status(&error), code, error.to_string())
    }
}

pub(crate) fn storage_status(error: &StorageError) -> StatusCode {
    match error {
        StorageError::Empty | StorageError::TooLarge { .. } => StatusCode::BAD_REQUEST,
        StorageError::Upload { .. } | StorageError::Delete { .. } => StatusCode::BAD_GATEWAY,
    }
}

macro_rules! const_error {
    ($name:ident, $status:ident, $code:literal, $message:literal) => {
        pub const $name: $crate::error::Error =
            $crate::error::Error::new(::axum::http::StatusCode::$status, $code, $message);
    };
}

#[allow(clippy::useless_attribute)]
#[allow(clippy::needless_pub_self)]
pub(self) use const_error;
