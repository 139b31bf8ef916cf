use crate::core::rate::RATE_SCALE;
use thiserror::Error;

/// Errors surfaced by a pricing oracle.
///
/// An oracle failure leaves the caller's state untouched; the operation
/// is never retried automatically.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("pricing oracle unavailable: {0}")]
    Unavailable(String),
    #[error("premium overflow for notional {notional_scaled} at rate {rate_scaled}")]
    Overflow { notional_scaled: u64, rate_scaled: u64 },
}

/// Wire-format boundary to the pricing engine.
///
/// The reference system round-trips premium computation through a deployed
/// smart-contract call. That call exchanges fixed-point integers scaled by
/// [`RATE_SCALE`]: the notional and rate arrive scaled, and the premium is
/// returned in the same scale, denominated in home-currency units.
///
/// Implementations must be idempotent: the same inputs always produce the
/// same premium.
pub trait PricingOracle {
    fn quote_premium(
        &self,
        notional_scaled: u64,
        rate_scaled: u64,
        duration_days: u32,
    ) -> Result<u64, OracleError>;
}

/// Pure-function pricing oracle used in place of the on-chain engine.
///
/// The premium is a simplified option-premium heuristic: a base loading in
/// basis points of the home-currency exposure (`notional × rate`), plus a
/// per-day duration loading so longer contracts cost more.
///
/// The defaults (300 bps base, 1 bp per day) extend the reference
/// engine's flat 3%-of-notional premium with the rate and duration
/// scaling the product intends.
#[derive(Debug, Clone)]
pub struct LocalPricingOracle {
    /// Base premium loading in basis points of home-currency exposure.
    pub base_premium_bps: u32,
    /// Additional loading per day of contract duration, in basis points.
    pub duration_bps_per_day: u32,
}

impl Default for LocalPricingOracle {
    fn default() -> Self {
        Self {
            base_premium_bps: 300,
            duration_bps_per_day: 1,
        }
    }
}

const BPS_SCALE: u128 = 10_000;

impl PricingOracle for LocalPricingOracle {
    fn quote_premium(
        &self,
        notional_scaled: u64,
        rate_scaled: u64,
        duration_days: u32,
    ) -> Result<u64, OracleError> {
        let loading_bps =
            self.base_premium_bps as u128 + self.duration_bps_per_day as u128 * duration_days as u128;

        // Exposure in scaled home-currency units, then the bps loading.
        // All math in u128 so intermediate products cannot wrap.
        let exposure = notional_scaled as u128 * rate_scaled as u128 / RATE_SCALE as u128;
        let premium = exposure
            .checked_mul(loading_bps)
            .map(|p| p / BPS_SCALE)
            .ok_or(OracleError::Overflow {
                notional_scaled,
                rate_scaled,
            })?;

        u64::try_from(premium).map_err(|_| OracleError::Overflow {
            notional_scaled,
            rate_scaled,
        })
    }
}
