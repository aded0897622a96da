use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::{AuthResolver, AuthedUser};
use crate::error::ApiError;

/// Session-token TTL in seconds (7 days).
pub const SESSION_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Claims embedded in a session JWT.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject — the user's ID.
    pub sub: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Issued-at (unix timestamp).
    pub iat: i64,
    /// Expiration (unix timestamp).
    pub exp: i64,
}

/// Mint a signed session token for the given user.
pub fn mint_session_token(secret: &str, user: &AuthedUser) -> Result<String, ApiError> {
    let now = Utc::now();
    let claims = SessionClaims {
        sub: user.user_id.clone(),
        email: user.email.clone(),
        display_name: user.display_name.clone(),
        iat: now.timestamp(),
        exp: (now + Duration::seconds(SESSION_TTL_SECS)).timestamp(),
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| {
        tracing::error!(error = ?e, "failed to sign session token");
        ApiError::internal("Token signing failed")
    })
}

/// [`AuthResolver`] backed by HS256 session JWTs.
///
/// Built from the configured `jwt_secret`. When the secret is unset the
/// verification key is empty and no token resolves, so unauthenticated
/// deployments reject every request rather than failing at startup.
pub struct JwtAuthResolver {
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtAuthResolver {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

#[async_trait]
impl AuthResolver for JwtAuthResolver {
    async fn resolve(&self, token: &str) -> Result<Option<AuthedUser>, ApiError> {
        match jsonwebtoken::decode::<SessionClaims>(token, &self.decoding, &self.validation) {
            Ok(data) => Ok(Some(AuthedUser {
                user_id: data.claims.sub,
                email: data.claims.email,
                display_name: data.claims.display_name,
            })),
            Err(e) => {
                tracing::debug!(error = %e, "session token rejected");
                Ok(None)
            }
        }
    }
}
