//! Secret loading
//!
//! The token signing secret is read from the environment and kept in a
//! `Zeroizing<String>` so it is wiped from memory when dropped.

use std::env;
use zeroize::Zeroizing;

/// Minimum secret length for HS256 signing (256 bits)
pub const MIN_SECRET_LENGTH: usize = 32;

#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    #[error("Secret validation failed: {0}")]
    ValidationFailed(String),
}

/// Load a secret from an environment variable.
///
/// Empty values are treated as unset.
pub fn load_secret(env_var_name: &str) -> Result<Zeroizing<String>, SecretError> {
    match env::var(env_var_name) {
        Ok(value) if !value.trim().is_empty() => Ok(Zeroizing::new(value)),
        _ => Err(SecretError::EnvVarNotSet(env_var_name.to_string())),
    }
}

/// Check that a secret meets minimum strength requirements
pub fn validate_secret_strength(secret: &str, min_length: usize) -> Result<(), SecretError> {
    if secret.len() < min_length {
        return Err(SecretError::ValidationFailed(format!(
            "Secret too short: {} characters (minimum: {})",
            secret.len(),
            min_length
        )));
    }

    let weak_patterns = ["secret", "password", "changeme", "example", "12345"];
    let secret_lower = secret.to_lowercase();

    for pattern in &weak_patterns {
        if secret_lower.contains(pattern) {
            return Err(SecretError::ValidationFailed(format!(
                "Secret contains weak pattern: {}",
                pattern
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_secret_strength() {
        assert!(validate_secret_strength("short", MIN_SECRET_LENGTH).is_err());

        assert!(validate_secret_strength(
            "my_jwt_secret_value_1234567890abcdef",
            MIN_SECRET_LENGTH
        )
        .is_err());

        let strong = "q".repeat(MIN_SECRET_LENGTH);
        assert!(validate_secret_strength(&strong, MIN_SECRET_LENGTH).is_ok());
    }

    #[test]
    fn test_load_secret_from_env() {
        env::set_var("TRADE_LEDGER_TEST_SECRET", "value_from_environment");
        let result = load_secret("TRADE_LEDGER_TEST_SECRET");
        assert_eq!(result.unwrap().as_str(), "value_from_environment");
        env::remove_var("TRADE_LEDGER_TEST_SECRET");
    }

    #[test]
    fn test_load_secret_missing_or_blank() {
        assert!(load_secret("TRADE_LEDGER_NONEXISTENT_SECRET").is_err());

        env::set_var("TRADE_LEDGER_BLANK_SECRET", "   ");
        assert!(matches!(
            load_secret("TRADE_LEDGER_BLANK_SECRET"),
            Err(SecretError::EnvVarNotSet(_))
        ));
        env::remove_var("TRADE_LEDGER_BLANK_SECRET");
    }
}
