use axum::{http::StatusCode, Json};
use serde_json::json;
use tracing::info;

use crate::models::Message;

pub async fn post_message(Json(message): Json<Message>) -> (StatusCode, Json<serde_json::Value>) {
    let echo = format!("Hello {}, you said: {}", message.user, message.message);
    info!(user = %message.user, "Echoed message");
    (
        StatusCode::OK,
        Json(json!({ "received": true, "echo": echo })),
    )
}
