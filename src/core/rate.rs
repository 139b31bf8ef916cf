use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of decimal places carried by a fixed-point rate.
pub const RATE_DECIMALS: u32 = 4;

/// Fixed-point scale factor for rates crossing a serialization boundary.
///
/// Rates travel as integers scaled by 10,000 (e.g. 18.5000 → 185_000),
/// matching the wire format of the on-chain pricing engine. This constant
/// is the single source of truth for the scale; callers must not hardcode
/// their own.
pub const RATE_SCALE: u64 = 10_000;

/// Errors arising from fixed-point scale conversion.
#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("value {0} cannot be represented as a scaled fixed-point integer")]
    NotRepresentable(Decimal),
}

/// Convert a decimal value to its fixed-point representation scaled by
/// [`RATE_SCALE`], rounding to the nearest scaled unit.
///
/// Fails for negative values and values too large for `u64`.
///
/// # Examples
///
/// ```
/// use fx_hedge_engine::core::rate::to_scaled;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(to_scaled(dec!(18.5)).unwrap(), 185_000);
/// assert_eq!(to_scaled(dec!(19.00005)).unwrap(), 190_001);
/// ```
pub fn to_scaled(value: Decimal) -> Result<u64, ScaleError> {
    if value < Decimal::ZERO {
        return Err(ScaleError::NotRepresentable(value));
    }
    let rounded = value.round_dp_with_strategy(RATE_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    (rounded * Decimal::from(RATE_SCALE))
        .to_u64()
        .ok_or(ScaleError::NotRepresentable(value))
}

/// Convert a fixed-point integer scaled by [`RATE_SCALE`] back to a decimal.
///
/// # Examples
///
/// ```
/// use fx_hedge_engine::core::rate::from_scaled;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(from_scaled(190_000), dec!(19.0000));
/// ```
pub fn from_scaled(scaled: u64) -> Decimal {
    Decimal::from(scaled) / Decimal::from(RATE_SCALE)
}

/// A single timestamped exchange-rate observation.
///
/// Immutable once produced. Emitted by a rate feed and consumed as the
/// baseline rate when opening hedge contracts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateObservation {
    timestamp: DateTime<Utc>,
    rate: Decimal,
}

impl RateObservation {
    /// Create a new observation.
    ///
    /// # Panics
    ///
    /// Panics if `rate` is not positive.
    pub fn new(timestamp: DateTime<Utc>, rate: Decimal) -> Self {
        assert!(
            rate > Decimal::ZERO,
            "Observed rate must be positive, got {}",
            rate
        );
        Self { timestamp, rate }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_trip() {
        let rate = dec!(18.5000);
        assert_eq!(from_scaled(to_scaled(rate).unwrap()), rate);
    }

    #[test]
    fn test_rounds_to_nearest() {
        // 18.50004 → 185000.4 → rounds down; 18.50006 → rounds up
        assert_eq!(to_scaled(dec!(18.50004)).unwrap(), 185_000);
        assert_eq!(to_scaled(dec!(18.50006)).unwrap(), 185_001);
        // midpoint rounds away from zero
        assert_eq!(to_scaled(dec!(18.50005)).unwrap(), 185_001);
    }

    #[test]
    fn test_negative_rejected() {
        assert!(to_scaled(dec!(-1)).is_err());
    }

    #[test]
    fn test_zero_is_representable() {
        assert_eq!(to_scaled(Decimal::ZERO).unwrap(), 0);
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn test_observation_rejects_zero_rate() {
        RateObservation::new(Utc::now(), Decimal::ZERO);
    }

    #[test]
    fn test_observation_accessors() {
        let now = Utc::now();
        let obs = RateObservation::new(now, dec!(18.5));
        assert_eq!(obs.timestamp(), now);
        assert_eq!(obs.rate(), dec!(18.5));
    }
}
