//! App Store Shared Library
//!
//! Wire types and input validation shared between the backend and
//! storefront clients.

pub mod types;
pub mod validation;

// Re-export commonly used items
pub use types::*;
