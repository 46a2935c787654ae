//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! Everything in here is built once at startup and read-only afterwards;
//! every field is `Arc`-backed so cloning per request is O(1).

use crate::auth::JwtService;
use crate::config::AppConfig;
use crate::repositories::UserStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Credential store
    pub store: Arc<dyn UserStore>,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Token service holding the process-wide signing key
    pub jwt: JwtService,
}

impl AppState {
    /// Create a new application state
    ///
    /// Derives the signing key from `config.jwt.secret`. Call once at
    /// startup.
    pub fn new(store: Arc<dyn UserStore>, config: AppConfig) -> Self {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.token_expiry_secs);

        Self {
            store,
            config: Arc::new(config),
            jwt,
        }
    }

    #[inline]
    pub fn store(&self) -> &dyn UserStore {
        self.store.as_ref()
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }
}
