use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use mergington::data::{ActivityDirectory, MessageResponse};
use mergington::log;

use super::error::{ApiError, ApiResult};
use crate::services::ActivityService;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

fn email_from(query: Result<Query<EmailQuery>, QueryRejection>) -> ApiResult<String> {
    query
        .map(|Query(query)| query.email)
        .map_err(|_| ApiError::MissingQuery("email"))
}

/// Handler to list every activity with its roster
pub async fn list(State(state): State<Arc<crate::AppState>>) -> ApiResult<Json<ActivityDirectory>> {
    Ok(Json(state.activities.list().await?))
}

/// Handler to sign a participant up for an activity
pub async fn signup(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let email = email_from(query)?;
    let confirmation = state.activities.signup(&activity_name, &email).await?;
    log::info!("{}", confirmation.message);
    Ok(Json(confirmation))
}

/// Handler to remove a participant from an activity
pub async fn unregister(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let email = email_from(query)?;
    let confirmation = state.activities.unregister(&activity_name, &email).await?;
    log::info!("{}", confirmation.message);
    Ok(Json(confirmation))
}
