//! Password policy enforcement for new passwords.

use docshare_core::config::AuthConfig;
use docshare_core::error::AppError;

/// Upper bound on accepted password length, in characters.
const MAX_PASSWORD_LENGTH: usize = 128;

/// Validates passwords against the configured length policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password, returning the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        let length = password.chars().count();
        if length < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        if length > MAX_PASSWORD_LENGTH {
            return Err(AppError::validation(format!(
                "Password must be at most {MAX_PASSWORD_LENGTH} characters long"
            )));
        }
        if password.trim().is_empty() {
            return Err(AppError::validation("Password must not be blank"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PasswordValidator {
        PasswordValidator::new(&AuthConfig::default())
    }

    #[test]
    fn test_length_bounds() {
        assert!(validator().validate("short").is_err());
        assert!(validator().validate("long enough").is_ok());
        assert!(validator().validate(&"x".repeat(129)).is_err());
    }

    #[test]
    fn test_blank_rejected() {
        assert!(validator().validate("          ").is_err());
    }
}
