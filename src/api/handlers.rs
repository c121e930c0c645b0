//! API handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::api::{ApiError, AppState};
use crate::birthday::birthday_message;
use crate::validation::{validate_date_of_birth, validate_username};
use crate::Error;

#[derive(Debug, Deserialize)]
pub struct DateOfBirthRequest {
    // a missing field is reported by date validation, not as a JSON error
    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: String,
}

/// Greet a stored user with the number of days until their birthday
pub async fn get_birthday_message(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    tracing::debug!(%username, "get birthday message");

    let exists = state.store.exists(&username).await.map_err(|e| {
        tracing::error!(%username, error = %e, "failed to check if user exists");
        ApiError::internal()
    })?;
    if !exists {
        return Err(Error::UserNotFound(username).into());
    }

    let user = state.store.get(&username).await.map_err(|e| {
        tracing::error!(%username, error = %e, "failed to fetch user");
        ApiError::internal()
    })?;

    let message = birthday_message(&user.username, user.date_of_birth, Utc::now());
    tracing::debug!(%username, %message, "birthday message computed");

    Ok(Json(MessageResponse { message }))
}

/// Store a date of birth, creating the user on first use
///
/// Date validation runs only after the existence check, so a failing store
/// is reported before a bad date.
pub async fn create_or_update_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    validate_username(&username)?;

    let payload: DateOfBirthRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::info!(
            %username,
            error = %e,
            body = %String::from_utf8_lossy(&body),
            "can't parse request body"
        );
        Error::InvalidRequest("Can't parse json.".to_string())
    })?;

    let exists = state.store.exists(&username).await.map_err(|e| {
        tracing::error!(%username, error = %e, "failed to check if user exists");
        ApiError::internal()
    })?;

    if exists {
        let user = state.store.get(&username).await.map_err(|e| {
            tracing::error!(%username, error = %e, "failed to fetch user");
            ApiError::internal()
        })?;
        let date_of_birth = validate_date_of_birth(&payload.date_of_birth)?;

        state
            .store
            .update(&user.username, date_of_birth)
            .await
            .map_err(|e| {
                tracing::error!(%username, error = %e, "failed to update user");
                ApiError::internal()
            })?;
        tracing::info!(%username, %date_of_birth, "user updated");
    } else {
        let date_of_birth = validate_date_of_birth(&payload.date_of_birth)?;

        state
            .store
            .create(&username, date_of_birth)
            .await
            .map_err(|e| {
                tracing::error!(%username, error = %e, "failed to create user");
                ApiError::internal()
            })?;
        tracing::info!(%username, %date_of_birth, "user created");
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Report whether storage is reachable
pub async fn healthcheck(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.ping().await.map_err(|e| {
        tracing::error!(error = %e, "storage health check failed");
        ApiError::internal()
    })?;

    Ok(Json(MessageResponse {
        message: "ok".to_string(),
    }))
}

pub async fn version(State(state): State<AppState>) -> Json<VersionResponse> {
    Json(VersionResponse {
        version: state.version.to_string(),
    })
}
