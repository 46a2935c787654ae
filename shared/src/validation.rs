//! Input validation functions
//!
//! Each validator returns the first problem found as a human readable
//! message. The backend turns these into `400 VALIDATION_ERROR` responses.

use crate::types::{RegisterRequest, UpdateProfileRequest};
use validator::ValidateEmail;

pub const MAX_USERNAME_LEN: usize = 64;
pub const MAX_PASSWORD_LEN: usize = 128;
pub const MAX_DISPLAY_NAME_LEN: usize = 100;

/// Validate a login identifier
///
/// Allowed characters are ASCII letters, digits and `_ . - @`, so an email
/// address also works as a username.
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Username cannot be empty".to_string());
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(format!(
            "Username must be at most {} characters",
            MAX_USERNAME_LEN
        ));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-' | '@'))
    {
        return Err("Username may only contain letters, digits, '_', '.', '-' and '@'".to_string());
    }
    Ok(())
}

/// Validate password length
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password cannot be empty".to_string());
    }
    if password.chars().count() > MAX_PASSWORD_LEN {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    if !email.validate_email() {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate display name
pub fn validate_display_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Display name cannot be blank".to_string());
    }
    if name.chars().count() > MAX_DISPLAY_NAME_LEN {
        return Err(format!(
            "Display name must be at most {} characters",
            MAX_DISPLAY_NAME_LEN
        ));
    }
    Ok(())
}

/// Validate a registration request
pub fn validate_register_request(req: &RegisterRequest) -> Result<(), String> {
    validate_username(&req.username)?;
    validate_password(&req.password)?;
    if let Some(name) = &req.display_name {
        validate_display_name(name)?;
    }
    if let Some(email) = &req.email {
        validate_email(email)?;
    }
    Ok(())
}

/// Validate a profile update request
pub fn validate_profile_update(req: &UpdateProfileRequest) -> Result<(), String> {
    if req.is_empty() {
        return Err("No profile fields to update".to_string());
    }
    if let Some(name) = &req.display_name {
        validate_display_name(name)?;
    }
    if let Some(email) = &req.email {
        validate_email(email)?;
    }
    if let Some(password) = &req.password {
        validate_password(password)?;
    }
    Ok(())
}
