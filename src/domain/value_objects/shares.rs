use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

pub const MIN_SHARES: i64 = 1;
pub const MAX_SHARES: i64 = 100;

/// Share count of a single trade, always within `MIN_SHARES..=MAX_SHARES`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "i64")]
pub struct Shares(u32);

impl Shares {
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if !(MIN_SHARES..=MAX_SHARES).contains(&value) {
            return Err(ValidationError::InvalidShares(format!(
                "shares must be between {} and {}, got {}",
                MIN_SHARES, MAX_SHARES, value
            )));
        }
        Ok(Shares(value as u32))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for Shares {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Shares::new(value)
    }
}

impl From<Shares> for u32 {
    fn from(shares: Shares) -> Self {
        shares.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shares_bounds_inclusive() {
        assert_eq!(Shares::new(1).unwrap().value(), 1);
        assert_eq!(Shares::new(100).unwrap().value(), 100);
    }

    #[test]
    fn test_shares_out_of_range() {
        assert!(Shares::new(0).is_err());
        assert!(Shares::new(101).is_err());
        let err = Shares::new(-5).unwrap_err();
        assert_eq!(err.field(), "shares");
    }

    #[test]
    fn test_shares_deserialize_checks_range() {
        let ok: Shares = serde_json::from_str("50").unwrap();
        assert_eq!(ok.value(), 50);
        assert!(serde_json::from_str::<Shares>("500").is_err());
    }
}
