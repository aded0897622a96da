#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use chrono::{TimeZone, Utc};

use starter_api::auth::tokens::{mint_session_token, JwtAuthResolver};
use starter_api::auth::AuthedUser;
use starter_api::config::Config;
use starter_api::db::store::UserStore;
use starter_api::error::ApiError;
use starter_api::models::user::UserRecord;
use starter_api::AppState;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// In-memory [`UserStore`] fake keyed by user ID.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: HashMap<String, UserRecord>,
}

impl InMemoryUserStore {
    pub fn with_user(mut self, user: UserRecord) -> Self {
        self.users.insert(user.id.clone(), user);
        self
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn user_by_id(&self, user_id: &str) -> Result<Option<UserRecord>, ApiError> {
        Ok(self.users.get(user_id).cloned())
    }
}

/// Build the full application [`Router`] over the given store fake and a
/// real JWT resolver using [`TEST_JWT_SECRET`].
pub fn test_app(store: InMemoryUserStore) -> Router {
    test_app_with_env(store, &[])
}

/// Like [`test_app`], but with extra environment entries fed into the
/// config (the process environment itself is never touched).
pub fn test_app_with_env(store: InMemoryUserStore, vars: &[(&str, &str)]) -> Router {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let config = Config::from_lookup(|name| match name {
        "JWT_SECRET" => Some(TEST_JWT_SECRET.to_string()),
        other => map.get(other).cloned(),
    });

    let state = AppState {
        store: Arc::new(store),
        auth: Arc::new(JwtAuthResolver::new(TEST_JWT_SECRET)),
        config: Arc::new(config),
    };

    starter_api::routes::router().with_state(state)
}

pub fn test_user(id: &str, email: &str, display_name: Option<&str>) -> AuthedUser {
    AuthedUser {
        user_id: id.to_string(),
        email: email.to_string(),
        display_name: display_name.map(str::to_string),
    }
}

pub fn test_record(user: &AuthedUser) -> UserRecord {
    UserRecord {
        id: user.user_id.clone(),
        email: user.email.clone(),
        display_name: user.display_name.clone(),
        created: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
    }
}

/// Mint a valid session token for the given user.
pub fn session_token(user: &AuthedUser) -> String {
    mint_session_token(TEST_JWT_SECRET, user).expect("mint session token")
}
