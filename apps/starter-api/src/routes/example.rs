use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;

use crate::auth::AuthedUser;
use crate::error::ApiError;
use crate::models::user::UserRecord;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello))
        .route("/data", post(data))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HelloResponse {
    message: String,
    user_id: String,
}

/// `GET /api/example/hello` — greet the authenticated caller.
async fn hello(user: AuthedUser) -> Json<HelloResponse> {
    // Prefer the display name; an unset or empty one falls back to email.
    let name = match user.display_name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => user.email.as_str(),
    };

    Json(HelloResponse {
        message: format!("Hello, {name}!"),
        user_id: user.user_id,
    })
}

#[derive(Debug, Serialize)]
struct DataResponse {
    success: bool,
    received: String,
    user: Option<UserRecord>,
}

/// `POST /api/example/data` — validate the body and echo it back along
/// with the caller's user record.
async fn data(
    State(state): State<AppState>,
    user: AuthedUser,
    Json(body): Json<Value>,
) -> Result<Json<DataResponse>, ApiError> {
    let name = body
        .get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::bad_request("Name is required"))?;

    let record = state.store.user_by_id(&user.user_id).await?;

    Ok(Json(DataResponse {
        success: true,
        received: name.to_string(),
        user: record,
    }))
}
