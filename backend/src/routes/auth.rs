//! Authentication routes
//!
//! Registration and login. Neither requires a token.

use crate::auth::AuthError;
use crate::error::ApiResult;
use crate::services::AuthService;
use crate::state::AppState;
use appstore_shared::types::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
///
/// POST /api/auth/register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = AuthService::register(state.store(), &req).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Login with username and password
///
/// POST /api/auth/login
///
/// Unknown usernames and wrong passwords produce the same 401 so the
/// response does not reveal which usernames exist.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let response = AuthService::login_with_token(state.store(), state.jwt(), &req)
        .await
        .map_err(|e| match e {
            AuthError::NotFound => AuthError::InvalidCredentials,
            other => other,
        })?;
    Ok(Json(response))
}
