//! Sync-user REST handler
//!
//! The one stateful endpoint: resolve the caller's identity, then
//! reconcile the device's session against it.

use crate::{ApiError, ApiResult, AppState, SyncUserRequest, SyncUserResponse, SyncedUserDto};

use ht_store::{SessionRepository, UserRepository};

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

/// POST /api/sync-user
///
/// Strict two-stage pipeline: the identity resolver runs first, and only
/// its output feeds the session reconciler. Both stages are idempotent, so
/// a failed call is safe to retry from scratch.
pub async fn sync_user(
    State(state): State<AppState>,
    Json(req): Json<SyncUserRequest>,
) -> ApiResult<Json<SyncUserResponse>> {
    let email = require(&req.email, "email")?;
    let device_id = require(&req.device_id, "deviceId")?;
    let session_token = require(&req.session_id, "sessionId")?;
    let name = req.name.as_deref().filter(|n| !n.is_empty());

    let users = UserRepository::new(state.store.clone());
    let user = users.resolve(email, name).await?;

    let sessions = SessionRepository::new(state.store.clone());
    let session = sessions
        .reconcile(&user.email, &user.id, device_id, session_token)
        .await?;

    Ok(Json(SyncUserResponse {
        ok: true,
        user: SyncedUserDto::from_parts(user, session, name),
    }))
}

/// Required-field check: present and non-empty
fn require<'a>(value: &'a Option<String>, field: &'static str) -> ApiResult<&'a str> {
    match value.as_deref().filter(|v| !v.is_empty()) {
        Some(v) => Ok(v),
        None => Err(ApiError::Validation {
            message: format!("{field} is required"),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
