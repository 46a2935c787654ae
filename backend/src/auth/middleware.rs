//! Bearer-token gate for protected routes
//!
//! A request starts unauthenticated and ends either authenticated (the
//! handler runs with an [`AuthUser`]) or rejected with 401 before any
//! handler code runs.

use super::{AuthError, JwtService};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{FromRef, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::debug;
use uuid::Uuid;

/// Identity proven by a valid bearer token
///
/// Handlers take this as an explicit argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub username: String,
}

/// Pull the token out of `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .ok_or(AuthError::MissingToken)?;

    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }
    Ok(token)
}

/// Run the whole gate against a set of request headers
pub fn authenticate(jwt: &JwtService, headers: &HeaderMap) -> Result<AuthUser, AuthError> {
    let token = bearer_token(headers)?;
    jwt.validate(token).map_err(|e| {
        debug!(reason = %e, "Bearer token rejected");
        e
    })
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Already admitted by `auth_middleware` on this route group
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let app_state = AppState::from_ref(state);
        Ok(authenticate(app_state.jwt(), &parts.headers)?)
    }
}

/// Middleware that rejects the request unless it carries a valid token
///
/// Applied with `axum::middleware::from_fn_with_state` to a route group.
/// The identity is stored in request extensions where the [`AuthUser`]
/// extractor picks it up.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = authenticate(state.jwt(), request.headers())?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
