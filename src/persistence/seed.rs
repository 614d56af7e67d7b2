//! Sample ledger contents loaded at startup

use chrono::Utc;

use crate::domain::entities::trade::{NewTrade, Trade, TradeType};
use crate::domain::errors::ValidationError;

/// The two reference trades: AAPL buy for user 1 and GOOGL sell for user 2
pub fn seed_trades() -> Result<Vec<Trade>, ValidationError> {
    let now = Utc::now();
    Ok(vec![
        NewTrade::new(TradeType::Buy, 1, "AAPL", 50, 150.0)?.into_trade(1, now),
        NewTrade::new(TradeType::Sell, 2, "GOOGL", 20, 2800.0)?.into_trade(2, now),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_trades() {
        let trades = seed_trades().unwrap();
        assert_eq!(trades.len(), 2);

        assert_eq!(trades[0].id, 1);
        assert_eq!(trades[0].trade_type, TradeType::Buy);
        assert_eq!(trades[0].symbol, "AAPL");
        assert_eq!(trades[0].shares.value(), 50);
        assert_eq!(trades[0].price.value(), 150.0);

        assert_eq!(trades[1].id, 2);
        assert_eq!(trades[1].trade_type, TradeType::Sell);
        assert_eq!(trades[1].user_id, 2);
        assert_eq!(trades[1].symbol, "GOOGL");
    }
}
