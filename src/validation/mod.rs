//! Request validation layer.
//!
//! Every route validates its untrusted input surfaces (path params, query
//! string, body) through the pure functions in this module before any
//! business logic runs. Schemas are declarative serde structs plus
//! validation functions returning either normalized, typed data or a list of
//! per-field errors; nothing in here touches the web framework's request
//! types, so the same functions back the HTTP boundary and the unit tests.
//!
//! Failures accumulate per surface and are rendered as a single 400 response:
//!
//! ```json
//! { "message": "Validation failed",
//!   "errors": [ { "in": "query", "errors": [ { "path": "sort.0", "message": "…" } ] } ] }
//! ```

pub mod query;
pub mod tour;
pub mod user;

#[cfg(test)]
mod test;

use crate::dto::api::{FieldErrorDto, SurfaceErrorsDto, ValidationErrorsDto};

/// Which untrusted input surface an error was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Params,
    Query,
    Body,
}

impl Surface {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Params => "params",
            Self::Query => "query",
            Self::Body => "body",
        }
    }
}

/// A single validation error, addressed by field path.
///
/// Paths use dotted segments the way the original API reported them:
/// `sort.0`, `duration.gte`, `priceDiscount`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Errors for one surface of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceErrors {
    pub surface: Surface,
    pub errors: Vec<FieldError>,
}

/// Accumulated validation failure across request surfaces.
///
/// Surfaces are validated independently; a request may carry errors for
/// params, query, and body at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationFailure {
    pub surfaces: Vec<SurfaceErrors>,
}

impl ValidationFailure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a surface's errors, skipping empty lists.
    pub fn with(mut self, surface: Surface, errors: Vec<FieldError>) -> Self {
        if !errors.is_empty() {
            self.surfaces.push(SurfaceErrors { surface, errors });
        }
        self
    }

    pub fn in_params(errors: Vec<FieldError>) -> Self {
        Self::new().with(Surface::Params, errors)
    }

    pub fn in_query(errors: Vec<FieldError>) -> Self {
        Self::new().with(Surface::Query, errors)
    }

    pub fn in_body(errors: Vec<FieldError>) -> Self {
        Self::new().with(Surface::Body, errors)
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Converts the failure into the wire envelope.
    pub fn into_dto(self) -> ValidationErrorsDto {
        ValidationErrorsDto {
            message: "Validation failed".to_string(),
            errors: self
                .surfaces
                .into_iter()
                .map(|surface| SurfaceErrorsDto {
                    surface: surface.surface.as_str().to_string(),
                    errors: surface
                        .errors
                        .into_iter()
                        .map(|e| FieldErrorDto {
                            path: e.path,
                            message: e.message,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let surfaces: Vec<&str> = self.surfaces.iter().map(|s| s.surface.as_str()).collect();
        write!(f, "validation failed on: {}", surfaces.join(", "))
    }
}
