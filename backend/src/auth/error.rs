//! Authentication error taxonomy
//!
//! Every variant is terminal for the request that produced it.

use crate::repositories::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Username already registered")]
    DuplicateIdentifier,

    #[error("User not found")]
    NotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token")]
    MalformedToken,

    #[error("Token expired")]
    Expired,

    #[error("Missing bearer token")]
    MissingToken,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(_) => AuthError::DuplicateIdentifier,
            StoreError::Database(e) => AuthError::Internal(e.into()),
        }
    }
}
