use std::env;
use zeroize::Zeroizing;

use crate::secrets::{self, SecretError, MIN_SECRET_LENGTH};

/// Signing key used when `JWT_SECRET` is not provided
pub const DEV_JWT_SECRET: &str = "trade-ledger-dev-signing-key-not-for-production";

/// Runtime configuration for the API server
#[derive(Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub jwt_secret: Zeroizing<String>,
    pub token_ttl_minutes: i64,
    pub bcrypt_cost: u32,
    pub seed_ledger: bool,          // Load the two sample trades at startup
    pub trades_read_only: bool,     // POST /trades answers "Read-only mode"
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            jwt_secret: Zeroizing::new(DEV_JWT_SECRET.to_string()),
            token_ttl_minutes: 10,
            bcrypt_cost: 10,
            seed_ledger: true,
            trades_read_only: true,
            max_body_bytes: 64 * 1024,
        }
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_minutes", &self.token_ttl_minutes)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("seed_ledger", &self.seed_ledger)
            .field("trades_read_only", &self.trades_read_only)
            .field("max_body_bytes", &self.max_body_bytes)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> ServerConfig {
        let mut config = Self::from_vars(|name| env::var(name).ok());

        match secrets::load_secret("JWT_SECRET") {
            Ok(secret) => {
                if let Err(e) = secrets::validate_secret_strength(&secret, MIN_SECRET_LENGTH) {
                    tracing::warn!("JWT_SECRET is weak: {}", e);
                }
                config.jwt_secret = secret;
            }
            Err(SecretError::EnvVarNotSet(_)) => {
                tracing::warn!(
                    "JWT_SECRET not set, using the development signing key (INSECURE for production)"
                );
            }
            Err(e) => tracing::warn!("Failed to load JWT_SECRET: {}, using development key", e),
        }

        config
    }

    /// Build configuration from an arbitrary variable lookup. Unparsable or
    /// out-of-range values are logged and the default is kept.
    pub fn from_vars<F>(lookup: F) -> ServerConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(host) = lookup("HOST") {
            if !host.trim().is_empty() {
                config.host = host.trim().to_string();
            }
        }

        if let Some(port) = lookup("PORT") {
            match port.parse::<u16>() {
                Ok(value) if value > 0 => config.port = value,
                _ => tracing::warn!("Invalid PORT value: {}, using default: {}", port, config.port),
            }
        }

        if let Some(ttl) = lookup("TOKEN_TTL_MINUTES") {
            match ttl.parse::<i64>() {
                Ok(value) if (1..=1440).contains(&value) => config.token_ttl_minutes = value,
                _ => tracing::warn!(
                    "Invalid TOKEN_TTL_MINUTES value: {} (must be between 1 and 1440), using default: {}",
                    ttl,
                    config.token_ttl_minutes
                ),
            }
        }

        if let Some(cost) = lookup("BCRYPT_COST") {
            match cost.parse::<u32>() {
                Ok(value) if (4..=31).contains(&value) => config.bcrypt_cost = value,
                _ => tracing::warn!(
                    "Invalid BCRYPT_COST value: {} (must be between 4 and 31), using default: {}",
                    cost,
                    config.bcrypt_cost
                ),
            }
        }

        if let Some(seed) = lookup("SEED_LEDGER") {
            config.seed_ledger = parse_flag(&seed);
        }

        if let Some(read_only) = lookup("TRADES_READ_ONLY") {
            config.trades_read_only = parse_flag(&read_only);
        }

        if let Some(limit) = lookup("MAX_BODY_BYTES") {
            match limit.parse::<usize>() {
                Ok(value) if value >= 1024 => config.max_body_bytes = value,
                _ => tracing::warn!(
                    "Invalid MAX_BODY_BYTES value: {} (minimum 1024), using default: {}",
                    limit,
                    config.max_body_bytes
                ),
            }
        }

        config
    }

    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.token_ttl_minutes)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> bool {
    value.to_lowercase() == "true" || value == "1"
}
