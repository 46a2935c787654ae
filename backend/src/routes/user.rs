//! User profile routes (authenticated)
//!
//! A valid token whose user has since disappeared yields 404, not 401.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use appstore_shared::types::{UpdateProfileRequest, UserResponse};
use axum::{extract::State, routing::get, Json, Router};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile).put(update_profile))
}

/// GET /api/user/profile
async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::profile(state.store(), auth.user_id).await?;
    Ok(Json(user.into()))
}

/// PUT /api/user/profile
async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::update_profile(state.store(), auth.user_id, req).await?;
    Ok(Json(user.into()))
}
