//! Registration and credential verification
//!
//! Password hashing and verification run on the blocking thread pool.

use crate::auth::{AuthError, AuthUser, JwtService, PasswordService};
use crate::repositories::{NewUser, UserRecord, UserStore};
use appstore_shared::types::{LoginRequest, LoginResponse, RegisterRequest};
use appstore_shared::validation::validate_register_request;
use tracing::{debug, info};

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user
    ///
    /// Fails with [`AuthError::DuplicateIdentifier`] when the username is
    /// taken. The password is only ever persisted as an argon2 hash.
    pub async fn register(
        store: &dyn UserStore,
        req: &RegisterRequest,
    ) -> Result<UserRecord, AuthError> {
        validate_register_request(req).map_err(AuthError::Validation)?;

        // Fast path; the store enforces uniqueness again on insert
        if store.find_by_username(&req.username).await?.is_some() {
            debug!(username = %req.username, "Registration rejected: username taken");
            return Err(AuthError::DuplicateIdentifier);
        }

        let password_hash = PasswordService::hash_async(req.password.clone()).await?;

        let user = store
            .create(NewUser {
                username: req.username.clone(),
                password_hash,
                display_name: req.display_name.clone(),
                email: req.email.clone(),
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Verify a username and password
    ///
    /// Distinguishes [`AuthError::NotFound`] from
    /// [`AuthError::InvalidCredentials`]; the HTTP layer collapses both.
    pub async fn login(
        store: &dyn UserStore,
        username: &str,
        password: &str,
    ) -> Result<AuthUser, AuthError> {
        let Some(user) = store.find_by_username(username).await? else {
            // Same argon2 cost as a wrong password
            PasswordService::verify_dummy_async(password.to_string()).await?;
            debug!(username = %username, "Login failed: unknown username");
            return Err(AuthError::NotFound);
        };

        let valid =
            PasswordService::verify_async(password.to_string(), user.password_hash).await?;
        if !valid {
            debug!(user_id = %user.id, "Login failed: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(AuthUser {
            user_id: user.id,
            username: user.username,
        })
    }

    /// Verify credentials and issue a token
    pub async fn login_with_token(
        store: &dyn UserStore,
        jwt: &JwtService,
        req: &LoginRequest,
    ) -> Result<LoginResponse, AuthError> {
        let identity = Self::login(store, &req.username, &req.password).await?;
        let token = jwt.issue(&identity)?;

        info!(user_id = %identity.user_id, "User logged in");
        Ok(LoginResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_in: jwt.token_expiry_secs(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryUserStore;
    use std::time::{Duration, Instant};

    fn register_request(username: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
            display_name: None,
            email: None,
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let store = InMemoryUserStore::new();
        let user = AuthService::register(&store, &register_request("alice", "pw123"))
            .await
            .unwrap();

        assert_eq!(user.username, "alice");
        assert_ne!(user.password_hash, "pw123");
        assert!(PasswordService::verify("pw123", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_register_twice_is_duplicate() {
        let store = InMemoryUserStore::new();
        let req = register_request("alice", "pw123");

        AuthService::register(&store, &req).await.unwrap();
        let second = AuthService::register(&store, &req).await;

        assert!(matches!(second, Err(AuthError::DuplicateIdentifier)));
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_input() {
        let store = InMemoryUserStore::new();
        let result = AuthService::register(&store, &register_request("has space", "pw")).await;

        assert!(matches!(result, Err(AuthError::Validation(_))));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_login_after_register() {
        let store = InMemoryUserStore::new();
        let user = AuthService::register(&store, &register_request("alice", "pw123"))
            .await
            .unwrap();

        let identity = AuthService::login(&store, "alice", "pw123").await.unwrap();

        assert_eq!(identity.user_id, user.id);
        assert_eq!(identity.username, "alice");
    }

    #[tokio::test]
    async fn test_login_unknown_user_is_not_found() {
        let store = InMemoryUserStore::new();
        let result = AuthService::login(&store, "nobody", "pw123").await;

        assert!(matches!(result, Err(AuthError::NotFound)));
    }

    async fn fastest_login(store: &InMemoryUserStore, username: &str, password: &str) -> Duration {
        let mut fastest = Duration::MAX;
        for _ in 0..3 {
            let started = Instant::now();
            let _ = AuthService::login(store, username, password).await;
            fastest = fastest.min(started.elapsed());
        }
        fastest
    }

    #[tokio::test]
    async fn test_unknown_user_costs_a_password_check() {
        let store = InMemoryUserStore::new();
        AuthService::register(&store, &register_request("alice", "pw123"))
            .await
            .unwrap();
        // Computes the placeholder hash up front
        let _ = AuthService::login(&store, "nobody", "pw123").await;

        let wrong_password = fastest_login(&store, "alice", "wrong").await;
        let unknown_user = fastest_login(&store, "nobody", "wrong").await;

        assert!(
            unknown_user * 4 >= wrong_password,
            "unknown user took {:?}, wrong password took {:?}",
            unknown_user,
            wrong_password
        );
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let store = InMemoryUserStore::new();
        AuthService::register(&store, &register_request("alice", "pw123"))
            .await
            .unwrap();

        let result = AuthService::login(&store, "alice", "wrong").await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_token_validates_to_same_user() {
        let store = InMemoryUserStore::new();
        let jwt = JwtService::new("test-secret", 3600);
        let user = AuthService::register(&store, &register_request("alice", "pw123"))
            .await
            .unwrap();

        let login = LoginRequest {
            username: "alice".to_string(),
            password: "pw123".to_string(),
        };
        let response = AuthService::login_with_token(&store, &jwt, &login)
            .await
            .unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 3600);
        let identity = jwt.validate(&response.token).unwrap();
        assert_eq!(identity.user_id, user.id);
        assert_eq!(identity.username, "alice");
    }
}
