use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

/// Smallest accepted trade price
pub const MIN_PRICE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::InvalidPrice(
                "price must be finite".to_string(),
            ));
        }
        if value < MIN_PRICE {
            return Err(ValidationError::InvalidPrice(format!(
                "price must be at least {}",
                MIN_PRICE
            )));
        }
        Ok(Price(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Price::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}
