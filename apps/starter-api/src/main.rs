use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use starter_api::auth::tokens::JwtAuthResolver;
use starter_api::config::Config;
use starter_api::db::pool;
use starter_api::db::store::PgUserStore;
use starter_api::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    if config.database_url.is_none() {
        tracing::warn!("DATABASE_URL is not set; queries will fail at first use");
    }
    if config.jwt_secret.is_none() {
        tracing::warn!("JWT_SECRET is not set; no session token will verify");
    }

    // Both collaborators initialize lazily: the pool dials on first
    // checkout and the resolver only uses the secret per request, so
    // missing configuration surfaces at first use rather than at startup.
    let db = pool::connect(config.database_url.as_deref().unwrap_or_default());
    let resolver = JwtAuthResolver::new(config.jwt_secret.as_deref().unwrap_or_default());

    let port = config.port;
    let state = AppState {
        store: Arc::new(PgUserStore::new(db)),
        auth: Arc::new(resolver),
        config: Arc::new(config),
    };

    let app = starter_api::routes::router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "starter-api listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
}
