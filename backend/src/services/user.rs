//! Profile reads and updates for the authenticated user

use crate::auth::{AuthError, PasswordService};
use crate::repositories::{ProfileUpdate, UserRecord, UserStore};
use appstore_shared::types::UpdateProfileRequest;
use appstore_shared::validation::validate_profile_update;
use tracing::info;
use uuid::Uuid;

/// User profile service
pub struct UserService;

impl UserService {
    /// Get a user's profile
    pub async fn profile(store: &dyn UserStore, user_id: Uuid) -> Result<UserRecord, AuthError> {
        store
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::NotFound)
    }

    /// Update a user's profile; absent fields stay as they are
    ///
    /// A new password is re-hashed before it reaches the store.
    pub async fn update_profile(
        store: &dyn UserStore,
        user_id: Uuid,
        req: UpdateProfileRequest,
    ) -> Result<UserRecord, AuthError> {
        validate_profile_update(&req).map_err(AuthError::Validation)?;

        let password_hash = match req.password {
            Some(password) => Some(PasswordService::hash_async(password).await?),
            None => None,
        };
        let password_changed = password_hash.is_some();

        let user = store
            .update_profile(
                user_id,
                ProfileUpdate {
                    display_name: req.display_name,
                    email: req.email,
                    password_hash,
                },
            )
            .await?
            .ok_or(AuthError::NotFound)?;

        info!(user_id = %user.id, password_changed, "Profile updated");
        Ok(user)
    }
}
