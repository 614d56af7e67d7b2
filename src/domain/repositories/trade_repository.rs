//! Trade Repository Trait
//!
//! Append-only storage for the trade ledger: no update or delete operation.

use crate::domain::entities::trade::{NewTrade, Trade, TradeFilter};
use crate::domain::errors::LedgerError;
use async_trait::async_trait;

#[async_trait]
pub trait TradeRepository: Send + Sync {
    /// Append a trade, assigning `max(id) + 1` (or 1 when empty) and the
    /// current time.
    async fn append(&self, trade: NewTrade) -> Trade;

    /// All trades matching every set field of `filter`, in insertion order.
    async fn list(&self, filter: &TradeFilter) -> Vec<Trade>;

    async fn get(&self, id: u64) -> Result<Trade, LedgerError>;
}
