//! Credential store
//!
//! [`UserStore`] is the persistence seam the auth and user services talk
//! to. `PgUserStore` backs it with PostgreSQL; `InMemoryUserStore` keeps
//! records in process for development and tests.

pub mod memory;
pub mod user;

use appstore_shared::types::UserResponse;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

pub use memory::InMemoryUserStore;
pub use user::PgUserStore;

/// User record as persisted
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            display_name: user.display_name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Input for creating a user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

/// Input for updating a user's profile; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Username already taken: {0}")]
    Duplicate(String),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<UserRecord>>;

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<UserRecord>>;

    /// Persist a new user. Fails with [`StoreError::Duplicate`] when the
    /// username is taken.
    async fn create(&self, user: NewUser) -> StoreResult<UserRecord>;

    /// Returns `None` when no user has this id
    async fn update_profile(&self, id: Uuid, update: ProfileUpdate)
        -> StoreResult<Option<UserRecord>>;

    /// Cheap connectivity check used by the readiness probe
    async fn ping(&self) -> StoreResult<()>;
}
