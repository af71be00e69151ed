//! Shared response envelopes.
//!
//! Every endpoint answers in one of three shapes:
//! - success: `{ "status": "success", "data": { … } }`, lists additionally
//!   carrying `results` and `page`
//! - operational failure (4xx): `{ "status": "fail", "message": "…" }`
//! - server fault (5xx): `{ "status": "error", "message": "…" }`
//!
//! Validation failures use their own structured 400 body, defined here as
//! [`ValidationErrorsDto`].

use serde::Serialize;
use utoipa::ToSchema;

/// Status-plus-message envelope used for failures and stub responses.
#[derive(Serialize, ToSchema)]
pub struct MessageDto {
    pub status: String,
    pub message: String,
}

impl MessageDto {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: "fail".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Success envelope around a single document.
#[derive(Serialize, ToSchema)]
pub struct DocumentDto<T> {
    pub status: String,
    pub data: T,
}

impl<T> DocumentDto<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data,
        }
    }
}

/// Success envelope around a page of documents.
#[derive(Serialize, ToSchema)]
pub struct CollectionDto<T> {
    pub status: String,
    pub results: usize,
    pub page: u64,
    pub data: T,
}

impl<T> CollectionDto<T> {
    pub fn new(results: usize, page: u64, data: T) -> Self {
        Self {
            status: "success".to_string(),
            results,
            page,
            data,
        }
    }
}

/// The structured 400 body for validation failures.
#[derive(Serialize, ToSchema)]
pub struct ValidationErrorsDto {
    pub message: String,
    pub errors: Vec<SurfaceErrorsDto>,
}

/// Errors grouped by the request surface they were found on.
#[derive(Serialize, ToSchema)]
pub struct SurfaceErrorsDto {
    #[serde(rename = "in")]
    pub surface: String,
    pub errors: Vec<FieldErrorDto>,
}

#[derive(Serialize, ToSchema)]
pub struct FieldErrorDto {
    pub path: String,
    pub message: String,
}
