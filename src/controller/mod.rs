//! HTTP controllers.
//!
//! Controllers are thin: they pull raw input off the request, run it through
//! the validation layer, call a service, and wrap the result in the response
//! envelopes. No business rules live here.

pub mod auth;
pub mod tour;
pub mod user;

use axum::{
    extract::{FromRequest, Request},
    Json,
};

use crate::error::AppError;

/// JSON body extractor that defers schema checks to the validation layer.
///
/// Bodies are taken as raw `serde_json::Value` so that shape errors surface
/// as per-field validation errors instead of axum's default rejection;
/// transport-level problems (wrong content type, malformed JSON) still come
/// back as a 400 fail envelope.
pub struct JsonBody(pub serde_json::Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<serde_json::Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}
