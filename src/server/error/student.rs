use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StudentError {
    /// No student exists with the requested id.
    ///
    /// Results in a 404 Not Found response.
    #[error("Student with ID {0} not found")]
    NotFound(i32),

    /// Another student already uses the submitted username.
    ///
    /// Results in a 409 Conflict response.
    #[error("Username already exists")]
    UsernameAlreadyExists,

    /// Another student already uses the submitted email.
    ///
    /// Results in a 409 Conflict response.
    #[error("Email already exists")]
    EmailAlreadyExists,
}

/// Converts student errors into HTTP responses.
///
/// - `NotFound` → 404 Not Found
/// - `UsernameAlreadyExists` / `EmailAlreadyExists` → 409 Conflict
///
/// The error's display message is returned as the body.
impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UsernameAlreadyExists | Self::EmailAlreadyExists => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
