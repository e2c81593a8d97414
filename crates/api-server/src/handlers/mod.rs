pub mod housing;
pub mod registry;
pub mod users;

use axum::response::{IntoResponse, Json};

pub const WELCOME_MESSAGE: &str = "Welcome, in order to make an API call direct your browser or \
Postman to an endpoint \n\n This can be done using the following format: \n\n \
http:127.0.0.1:8080/endpoint?arg=value";

pub async fn index() -> &'static str {
    WELCOME_MESSAGE
}

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
