use std::sync::Arc;

use crate::auth::token::TokenService;
use crate::application::services::credential_service::CredentialService;
use crate::config::ServerConfig;
use crate::domain::errors::ValidationError;
use crate::domain::repositories::trade_repository::TradeRepository;
use crate::persistence::{seed::seed_trades, InMemoryTradeRepository, InMemoryUserRepository};

/// Shared handler state. Built once at startup; clones share the same stores.
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<CredentialService>,
    pub trades: Arc<dyn TradeRepository>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(
        credentials: CredentialService,
        trades: Arc<dyn TradeRepository>,
        tokens: TokenService,
    ) -> Self {
        Self {
            credentials: Arc::new(credentials),
            trades,
            tokens: Arc::new(tokens),
        }
    }

    /// In-memory stores wired from configuration, seeding the ledger if enabled
    pub fn from_config(config: &ServerConfig) -> Result<Self, ValidationError> {
        let users = Arc::new(InMemoryUserRepository::new());
        let trades = if config.seed_ledger {
            InMemoryTradeRepository::with_trades(seed_trades()?)
        } else {
            InMemoryTradeRepository::new()
        };

        Ok(Self::new(
            CredentialService::new(users, config.bcrypt_cost),
            Arc::new(trades),
            TokenService::new(config.jwt_secret.as_bytes(), config.token_ttl()),
        ))
    }
}
