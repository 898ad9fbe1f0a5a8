#![allow(unused_imports)]

pub(crate) use super::macros::*;
pub use super::{request::*, response::*, setup_database, storage::MemoryStore, App};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use exam_backend::error;
pub use http::StatusCode;
pub use reqwest::multipart::{Form, Part};
pub use serde_json::{json, Value};
