//! Authentication module
//!
//! Argon2 password hashing, HS256 token issuance and the bearer-token gate
//! for protected routes.

mod error;
mod jwt;
mod middleware;
mod password;

pub use error::AuthError;
pub use jwt::{Claims, JwtService};
pub use middleware::{auth_middleware, authenticate, bearer_token, AuthUser};
pub use password::PasswordService;
