//! In-memory repositories
//!
//! Data access layer for accounts and trades.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::trade::{NewTrade, Trade, TradeFilter};
use crate::domain::entities::user::User;
use crate::domain::errors::{CredentialError, LedgerError};
use crate::domain::repositories::trade_repository::TradeRepository;
use crate::domain::repositories::user_repository::UserRepository;

/// User repository
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
    next_id: AtomicU64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, email: &str, password_hash: String) -> Result<User, CredentialError> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.email == email) {
            return Err(CredentialError::DuplicateEmail(email.to_string()));
        }

        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            email: email.to_string(),
            password_hash,
        };
        users.push(user.clone());

        debug!("Stored user {} ({})", user.id, user.email);
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }
}

/// Trade repository
pub struct InMemoryTradeRepository {
    trades: RwLock<Vec<Trade>>,
}

impl InMemoryTradeRepository {
    pub fn new() -> Self {
        Self::with_trades(Vec::new())
    }

    pub fn with_trades(trades: Vec<Trade>) -> Self {
        Self {
            trades: RwLock::new(trades),
        }
    }
}

impl Default for InMemoryTradeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TradeRepository for InMemoryTradeRepository {
    async fn append(&self, trade: NewTrade) -> Trade {
        let mut trades = self.trades.write().await;

        let id = trades.iter().map(|t| t.id).max().map_or(1, |max| max + 1);
        let record = trade.into_trade(id, Utc::now());
        trades.push(record.clone());

        debug!("Appended trade {} for {}", record.id, record.symbol);
        record
    }

    async fn list(&self, filter: &TradeFilter) -> Vec<Trade> {
        self.trades
            .read()
            .await
            .iter()
            .filter(|t| t.matches(filter))
            .cloned()
            .collect()
    }

    async fn get(&self, id: u64) -> Result<Trade, LedgerError> {
        self.trades
            .read()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(LedgerError::NotFound(id))
    }
}
