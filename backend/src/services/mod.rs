//! Business logic services
//!
//! Services encapsulate business logic and coordinate between the
//! credential store, password hashing and token issuance.

pub mod auth;
pub mod user;

pub use auth::AuthService;
pub use user::UserService;
