//! Handler for the `/login` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use staffdesk_core::error::CoreError;
use staffdesk_db::models::staff::StaffInfo;
use staffdesk_db::repositories::StaffRepo;

use crate::auth::jwt::generate_session_token;
use crate::auth::password::verify_password;
use crate::auth::AuthError;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/login`.
///
/// Both fields are optional at the type level so that an incomplete body is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: StaffInfo,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/login
///
/// Authenticate with username + password. Unknown usernames and wrong
/// passwords produce the same 401.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<LoginResponse>> {
    let Json(input) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable login body");
        missing_credentials()
    })?;

    let (username, password) = match (input.username.as_deref(), input.password.as_deref()) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
        _ => return Err(missing_credentials()),
    };

    let Some(staff) = StaffRepo::find_by_username(&state.pool, username).await? else {
        tracing::info!(username, "Login rejected: unknown username");
        return Err(AuthError::InvalidCredentials.into());
    };

    let password_valid = verify_password(password, &staff.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::info!(username, "Login rejected: wrong password");
        return Err(AuthError::InvalidCredentials.into());
    }

    let user = StaffInfo::from(&staff);
    let token = generate_session_token(&user, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, username, role = %user.role, "Login succeeded");

    Ok(Json(LoginResponse { token, user }))
}

fn missing_credentials() -> AppError {
    AppError::Core(CoreError::Validation(
        "username and password required".into(),
    ))
}
