use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;
use crate::domain::value_objects::{price::Price, shares::Shares};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeType {
    Buy,
    Sell,
}

impl std::fmt::Display for TradeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeType::Buy => write!(f, "buy"),
            TradeType::Sell => write!(f, "sell"),
        }
    }
}

impl std::str::FromStr for TradeType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(TradeType::Buy),
            "sell" => Ok(TradeType::Sell),
            other => Err(ValidationError::InvalidTradeType(format!(
                "expected 'buy' or 'sell', got '{}'",
                other
            ))),
        }
    }
}

/// A stored ledger entry. Write-once: nothing mutates a trade after append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: u64,
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    pub user_id: i64,
    pub symbol: String,
    pub shares: Shares,
    pub price: Price,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl Trade {
    pub fn matches(&self, filter: &TradeFilter) -> bool {
        filter.trade_type.map_or(true, |t| t == self.trade_type)
            && filter.user_id.map_or(true, |id| id == self.user_id)
    }
}

/// Trade fields supplied by a caller; the ledger assigns id and timestamp.
/// `user_id` is not checked against registered users.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrade {
    pub trade_type: TradeType,
    pub user_id: i64,
    pub symbol: String,
    pub shares: Shares,
    pub price: Price,
}

impl NewTrade {
    pub fn new(
        trade_type: TradeType,
        user_id: i64,
        symbol: impl Into<String>,
        shares: i64,
        price: f64,
    ) -> Result<Self, ValidationError> {
        Ok(NewTrade {
            trade_type,
            user_id,
            symbol: symbol.into(),
            shares: Shares::new(shares)?,
            price: Price::new(price)?,
        })
    }

    pub fn into_trade(self, id: u64, timestamp: DateTime<Utc>) -> Trade {
        Trade {
            id,
            trade_type: self.trade_type,
            user_id: self.user_id,
            symbol: self.symbol,
            shares: self.shares,
            price: self.price,
            timestamp,
        }
    }
}

/// Conjunctive filter for ledger reads; `None` fields match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TradeFilter {
    pub trade_type: Option<TradeType>,
    pub user_id: Option<i64>,
}

impl TradeFilter {
    pub fn by_type(mut self, trade_type: TradeType) -> Self {
        self.trade_type = Some(trade_type);
        self
    }

    pub fn by_user(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(trade_type: TradeType, user_id: i64) -> Trade {
        NewTrade::new(trade_type, user_id, "AAPL", 10, 100.0)
            .unwrap()
            .into_trade(1, Utc::now())
    }

    #[test]
    fn test_trade_type_parse() {
        assert_eq!("buy".parse::<TradeType>().unwrap(), TradeType::Buy);
        assert_eq!("sell".parse::<TradeType>().unwrap(), TradeType::Sell);
        assert!("BUY".parse::<TradeType>().is_err());
        assert!("hold".parse::<TradeType>().is_err());
    }

    #[test]
    fn test_new_trade_validates_ranges() {
        assert!(NewTrade::new(TradeType::Buy, 1, "AAPL", 0, 10.0).is_err());
        assert!(NewTrade::new(TradeType::Buy, 1, "AAPL", 10, 0.0).is_err());
        assert!(NewTrade::new(TradeType::Sell, 1, "AAPL", 100, 0.01).is_ok());
    }

    #[test]
    fn test_filter_matching() {
        let trade = sample(TradeType::Buy, 1);
        assert!(trade.matches(&TradeFilter::default()));
        assert!(trade.matches(&TradeFilter::default().by_type(TradeType::Buy)));
        assert!(!trade.matches(&TradeFilter::default().by_type(TradeType::Sell)));
        assert!(trade.matches(&TradeFilter::default().by_type(TradeType::Buy).by_user(1)));
        assert!(!trade.matches(&TradeFilter::default().by_type(TradeType::Buy).by_user(2)));
    }

    #[test]
    fn test_trade_wire_format() {
        let trade = sample(TradeType::Sell, 2);
        let json = serde_json::to_value(&trade).unwrap();
        assert_eq!(json["type"], "sell");
        assert_eq!(json["user_id"], 2);
        assert_eq!(json["shares"], 10);
        assert_eq!(json["price"], 100.0);
        assert_eq!(json["timestamp"], trade.timestamp.timestamp_millis());
    }
}
