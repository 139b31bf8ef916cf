use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 4217-style currency code.
///
/// Supports standard fiat currencies (ZAR, USD, EUR, etc.) as well as
/// arbitrary identifiers for digital currencies or experimental
/// settlement units.
///
/// # Examples
///
/// ```
/// use fx_hedge_engine::core::currency::CurrencyCode;
///
/// let zar = CurrencyCode::new("ZAR");
/// let usd = CurrencyCode::new("USD");
/// assert_ne!(zar, usd);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A pair of currencies representing an exchange rate direction.
///
/// The rate quotes how many units of `quote` one unit of `base` buys.
/// The reference instance hedges with USD/ZAR: base USD, quote ZAR.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub base: CurrencyCode,
    pub quote: CurrencyCode,
}

impl CurrencyPair {
    pub fn new(base: CurrencyCode, quote: CurrencyCode) -> Self {
        Self { base, quote }
    }

    /// The USD/ZAR pair used throughout the demo scenario.
    pub fn usd_zar() -> Self {
        Self::new(CurrencyCode::new("USD"), CurrencyCode::new("ZAR"))
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}
