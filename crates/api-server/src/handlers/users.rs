use crate::error::UserError;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct AuthenticateQuery {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserQuery {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email_address: String,
    #[serde(default)]
    pub password: String,
}

/// 200 with the user id as JSON; 400, 404 and 401 carry no body.
pub async fn authenticate(
    State(state): State<AppState>,
    Query(q): Query<AuthenticateQuery>,
) -> Result<Json<i32>, UserError> {
    let id = state
        .app
        .user_service
        .authenticate(&q.email, &q.password)
        .await
        .map_err(UserError::status_only)?;
    info!(user_id = id, "user authenticated");
    Ok(Json(id))
}

pub async fn create_user(
    State(state): State<AppState>,
    Query(q): Query<CreateUserQuery>,
) -> Result<Response, UserError> {
    let id = state
        .app
        .user_service
        .create_user(q.first_name, q.last_name, q.email_address, &q.password)
        .await
        .map_err(UserError::with_message)?;
    Ok((
        StatusCode::CREATED,
        format!("User was added successfully! User ID: {}", id),
    )
        .into_response())
}
