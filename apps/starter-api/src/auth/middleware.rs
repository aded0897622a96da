use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::auth::AuthedUser;
use crate::AppState;

/// Rejection returned when the bearer token is missing or invalid.
pub struct AuthError {
    message: &'static str,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": {
                "code": "UNAUTHORIZED",
                "message": self.message
            }
        });
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

/// Extract the authenticated caller from `Authorization: Bearer <token>`.
///
/// Use as an axum extractor in any handler that requires authentication:
///
/// ```ignore
/// async fn handler(user: AuthedUser) -> impl IntoResponse { ... }
/// ```
///
/// Rejects with 401 before the handler body runs; handlers never
/// re-implement this check.
impl FromRequestParts<AppState> for AuthedUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthError {
                message: "Missing Authorization header",
            })?;

        let token = header.strip_prefix("Bearer ").ok_or(AuthError {
            message: "Invalid Authorization header format",
        })?;

        state
            .auth
            .resolve(token)
            .await
            .map_err(|_| AuthError {
                message: "Identity resolution failed",
            })?
            .ok_or(AuthError {
                message: "Invalid or expired session token",
            })
    }
}
