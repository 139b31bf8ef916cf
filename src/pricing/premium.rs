use crate::core::rate::{from_scaled, to_scaled, ScaleError};
use crate::pricing::oracle::{LocalPricingOracle, OracleError, PricingOracle};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors arising from premium calculation.
#[derive(Debug, Error)]
pub enum PricingError {
    #[error("notional amount must be positive, got {0}")]
    InvalidNotional(Decimal),
    #[error("rate must be positive, got {0}")]
    InvalidRate(Decimal),
    #[error("duration must be at least one day")]
    InvalidDuration,
    #[error(transparent)]
    Scale(#[from] ScaleError),
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// Computes the upfront premium charged to open a hedge.
///
/// The calculator owns the fixed-point boundary to the pricing oracle:
/// its public interface takes and returns unscaled decimals, converting
/// to integers scaled by [`RATE_SCALE`] (rounding to the nearest scaled
/// unit) on the way in and back on the way out. The premium is returned
/// in home-currency units, the currency settlements are funded from.
///
/// The oracle itself is consumed as a black box; swapping the default
/// [`LocalPricingOracle`] for an on-chain client changes no call sites.
///
/// [`RATE_SCALE`]: crate::core::rate::RATE_SCALE
///
/// # Examples
///
/// ```
/// use fx_hedge_engine::pricing::premium::PremiumCalculator;
/// use rust_decimal_macros::dec;
///
/// let calculator = PremiumCalculator::local();
/// let premium = calculator
///     .calculate_premium(dec!(100_000), dec!(18.5), 30)
///     .unwrap();
/// assert_eq!(premium, dec!(61_050));
/// ```
#[derive(Debug, Clone)]
pub struct PremiumCalculator<O: PricingOracle = LocalPricingOracle> {
    oracle: O,
}

impl PremiumCalculator<LocalPricingOracle> {
    /// Calculator backed by the default local pure-function oracle.
    pub fn local() -> Self {
        Self::new(LocalPricingOracle::default())
    }
}

impl<O: PricingOracle> PremiumCalculator<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Compute the premium for the given exposure.
    ///
    /// Idempotent: the same inputs always produce the same premium.
    /// Fails with an `InvalidInput`-class error when any argument is
    /// not strictly positive, and with [`PricingError::Oracle`] when
    /// the backing oracle call fails; neither touches any state.
    pub fn calculate_premium(
        &self,
        notional_amount: Decimal,
        rate: Decimal,
        duration_days: u32,
    ) -> Result<Decimal, PricingError> {
        if notional_amount <= Decimal::ZERO {
            return Err(PricingError::InvalidNotional(notional_amount));
        }
        if rate <= Decimal::ZERO {
            return Err(PricingError::InvalidRate(rate));
        }
        if duration_days == 0 {
            return Err(PricingError::InvalidDuration);
        }

        let notional_scaled = to_scaled(notional_amount)?;
        let rate_scaled = to_scaled(rate)?;
        let premium_scaled = self
            .oracle
            .quote_premium(notional_scaled, rate_scaled, duration_days)?;

        Ok(from_scaled(premium_scaled))
    }
}
