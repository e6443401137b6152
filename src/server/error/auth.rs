use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id stored in the session.
    ///
    /// The request requires a logged-in user but the session carries no user id.
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Usually means the account was deleted while a session was still live.
    /// Results in a 401 Unauthorized response.
    #[error("Session user {0} not found in database")]
    UserNotInDatabase(i32),

    /// The user lacks the permission required by the endpoint.
    ///
    /// Results in a 403 Forbidden response; the detailed reason is logged
    /// server-side only.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Login code did not match, expired, or was already consumed.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid or expired login code")]
    InvalidLoginCode,
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic to avoid leaking which part of the
/// check failed; full details are logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Not logged in".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Access denied".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidLoginCode => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Invalid or expired login code".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
