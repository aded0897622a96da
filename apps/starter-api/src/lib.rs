pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use auth::AuthResolver;
use config::Config;
use db::store::UserStore;

/// Shared application state available to all route handlers.
///
/// Auth and storage are held as capability objects so tests can swap in
/// fakes without a database or a session backend.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub auth: Arc<dyn AuthResolver>,
    pub config: Arc<Config>,
}
