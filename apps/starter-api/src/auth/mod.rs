pub mod middleware;
pub mod tokens;

use async_trait::async_trait;

use crate::error::ApiError;

/// Identity of the caller for the duration of one request.
///
/// Produced by an [`AuthResolver`]; never persisted.
#[derive(Debug, Clone)]
pub struct AuthedUser {
    pub user_id: String,
    pub email: String,
    pub display_name: Option<String>,
}

/// Capability that turns a presented credential into a caller identity.
///
/// `Ok(None)` means the credential is invalid or expired and the request
/// should be rejected with 401. `Err` is reserved for resolver-side
/// failures (e.g. an unreachable session backend).
#[async_trait]
pub trait AuthResolver: Send + Sync {
    async fn resolve(&self, token: &str) -> Result<Option<AuthedUser>, ApiError>;
}
