use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use tracing::{debug, info};
use validator::Validate;

use super::json_rejection;
use crate::application::state::AppState;
use crate::auth::Claims;
use crate::domain::entities::trade::{NewTrade, Trade, TradeFilter, TradeType};
use crate::domain::errors::{field_errors, ApiError};

/// Query parameters for GET /trades. Every value of a parameter is kept;
/// a repeated parameter never matches a stored trade.
#[derive(Debug, Default)]
pub struct TradeQuery {
    pub trade_type: Vec<String>,
    pub user_id: Vec<String>,
}

impl FromIterator<(String, String)> for TradeQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = TradeQuery::default();
        for (key, value) in pairs {
            match key.as_str() {
                "type" => query.trade_type.push(value),
                "user_id" => query.user_id.push(value),
                _ => {}
            }
        }
        query
    }
}

/// `Some(None)` when the parameter is absent or empty, `None` when repeated.
fn single_value(values: &[String]) -> Option<Option<&str>> {
    match values {
        [] => Some(None),
        [value] if value.is_empty() => Some(None),
        [value] => Some(Some(value.as_str())),
        _ => None,
    }
}

impl TradeQuery {
    /// Convert to a ledger filter. Empty parameters are ignored; `None` means
    /// a parameter can never match a stored trade (unknown type, non-numeric
    /// user id, repeated parameter).
    pub fn into_filter(self) -> Option<TradeFilter> {
        let mut filter = TradeFilter::default();

        if let Some(raw) = single_value(&self.trade_type)? {
            filter.trade_type = Some(raw.parse::<TradeType>().ok()?);
        }

        if let Some(raw) = single_value(&self.user_id)? {
            filter.user_id = Some(raw.trim().parse::<i64>().ok()?);
        }

        Some(filter)
    }
}

/// Body of POST /trades when creation is enabled
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTradeRequest {
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    pub user_id: i64,
    pub symbol: String,
    #[validate(range(min = 1, max = 100, message = "must be an integer between 1 and 100"))]
    pub shares: i64,
    #[validate(range(min = 0.01, message = "must be at least 0.01"))]
    pub price: f64,
}

/// GET /trades
pub async fn list_trades(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Trade>>, ApiError> {
    let Query(pairs) = params.map_err(|e| {
        debug!("Rejected query string: {}", e.body_text());
        ApiError::MalformedBody("Invalid query string".to_string())
    })?;

    let Some(filter) = pairs.into_iter().collect::<TradeQuery>().into_filter() else {
        debug!(user_id = claims.id, "Trade filter cannot match, returning empty list");
        return Ok(Json(Vec::new()));
    };

    let trades = state.trades.list(&filter).await;
    debug!(user_id = claims.id, count = trades.len(), "Listed trades");
    Ok(Json(trades))
}

/// GET /trades/:id
pub async fn get_trade(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Trade>, ApiError> {
    let id = id
        .parse::<u64>()
        .map_err(|_| ApiError::NotFound("Trade not found".to_string()))?;

    Ok(Json(state.trades.get(id).await?))
}

/// POST /trades, validated variant
pub async fn create_trade(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<CreateTradeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Trade>), ApiError> {
    let Json(request) = payload.map_err(json_rejection)?;
    request
        .validate()
        .map_err(|e| ApiError::Validation(field_errors(&e)))?;

    // Ranges were checked above; this only builds the value objects
    let new_trade = NewTrade::new(
        request.trade_type,
        request.user_id,
        request.symbol,
        request.shares,
        request.price,
    )?;

    let trade = state.trades.append(new_trade).await;
    info!(
        trade_id = trade.id,
        created_by = claims.id,
        "Trade recorded: {} {} {} @ {}",
        trade.trade_type,
        trade.shares.value(),
        trade.symbol,
        trade.price.value()
    );

    Ok((StatusCode::CREATED, Json(trade)))
}

/// POST /trades in read-only mode
pub async fn reject_creation() -> ApiError {
    ApiError::ReadOnly("Read-only mode. Creation is not allowed.".to_string())
}

/// PUT and PATCH /trades/:id
pub async fn reject_modification() -> ApiError {
    ApiError::ReadOnly("Read-only mode. Modification is not allowed.".to_string())
}

/// DELETE /trades/:id
pub async fn reject_deletion() -> ApiError {
    ApiError::ReadOnly("Read-only mode. Deletion is not allowed.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> TradeQuery {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert_eq!(query(&[]).into_filter(), Some(TradeFilter::default()));
        assert_eq!(
            query(&[("type", ""), ("user_id", "")]).into_filter(),
            Some(TradeFilter::default())
        );
        assert_eq!(query(&[("page", "2")]).into_filter(), Some(TradeFilter::default()));
    }

    #[test]
    fn test_query_builds_filter() {
        let filter = query(&[("type", "sell"), ("user_id", "2")]).into_filter().unwrap();
        assert_eq!(filter.trade_type, Some(TradeType::Sell));
        assert_eq!(filter.user_id, Some(2));
    }

    #[test]
    fn test_unmatchable_query() {
        assert_eq!(query(&[("type", "hold")]).into_filter(), None);
        assert_eq!(query(&[("user_id", "abc")]).into_filter(), None);
        assert_eq!(query(&[("user_id", "1abc")]).into_filter(), None);
    }

    #[test]
    fn test_repeated_parameter_never_matches() {
        assert_eq!(query(&[("type", "buy"), ("type", "sell")]).into_filter(), None);
        assert_eq!(query(&[("type", "buy"), ("type", "buy")]).into_filter(), None);
        assert_eq!(query(&[("user_id", "1"), ("user_id", "2")]).into_filter(), None);
    }

    #[test]
    fn test_create_request_validation() {
        let request: CreateTradeRequest = serde_json::from_value(serde_json::json!({
            "type": "buy",
            "user_id": 1,
            "symbol": "AAPL",
            "shares": 150,
            "price": 0.0
        }))
        .unwrap();
        let errors = field_errors(&request.validate().unwrap_err());
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["price", "shares"]);
    }

    #[test]
    fn test_create_request_rejects_unknown_type() {
        let parsed = serde_json::from_value::<CreateTradeRequest>(serde_json::json!({
            "type": "hold",
            "user_id": 1,
            "symbol": "AAPL",
            "shares": 10,
            "price": 10.0
        }));
        assert!(parsed.is_err());
    }
}
