use crate::core::currency::CurrencyCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Two-currency wallet tracking the hedger's balances.
///
/// The home-currency balance (e.g. ZAR) pays premiums and funds
/// settlements; the foreign-currency balance (e.g. USD) receives
/// settled funds. Balances are owned exclusively by the ledger and
/// mutated only through [`debit_premium`] and [`settle`].
///
/// Both operations are total: instead of failing on a shortfall they
/// clamp the debited balance at zero and log the absorbed difference
/// at `warn`.
///
/// [`debit_premium`]: WalletLedger::debit_premium
/// [`settle`]: WalletLedger::settle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletLedger {
    home_currency: CurrencyCode,
    foreign_currency: CurrencyCode,
    home_balance: Decimal,
    foreign_balance: Decimal,
}

impl WalletLedger {
    /// Create a ledger with an opening home-currency balance and an
    /// empty foreign-currency balance.
    ///
    /// # Panics
    ///
    /// Panics if `opening_home_balance` is negative.
    pub fn new(
        home_currency: CurrencyCode,
        foreign_currency: CurrencyCode,
        opening_home_balance: Decimal,
    ) -> Self {
        assert!(
            opening_home_balance >= Decimal::ZERO,
            "Opening balance must not be negative, got {}",
            opening_home_balance
        );
        Self {
            home_currency,
            foreign_currency,
            home_balance: opening_home_balance,
            foreign_balance: Decimal::ZERO,
        }
    }

    /// Deduct an upfront premium from the home-currency balance,
    /// clamping at zero. Negative amounts are treated as zero.
    pub fn debit_premium(&mut self, amount: Decimal) {
        let amount = amount.max(Decimal::ZERO);
        if amount > self.home_balance {
            log::warn!(
                "premium {} {} exceeds home balance {}, clamping to zero",
                amount,
                self.home_currency,
                self.home_balance
            );
        }
        self.home_balance = (self.home_balance - amount).max(Decimal::ZERO);
    }

    /// Move `home_amount` out of the home balance and credit the foreign
    /// balance with `home_amount / rate`.
    ///
    /// The foreign credit always uses the full `home_amount` even when the
    /// home side clamps at zero; the shortfall is absorbed, not rejected.
    /// Negative amounts are treated as zero.
    ///
    /// # Panics
    ///
    /// Panics if `rate` is not positive.
    pub fn settle(&mut self, home_amount: Decimal, rate: Decimal) {
        assert!(
            rate > Decimal::ZERO,
            "Settlement rate must be positive, got {}",
            rate
        );
        let home_amount = home_amount.max(Decimal::ZERO);
        if home_amount > self.home_balance {
            log::warn!(
                "settlement {} {} exceeds home balance {}, clamping to zero",
                home_amount,
                self.home_currency,
                self.home_balance
            );
        }
        self.home_balance = (self.home_balance - home_amount).max(Decimal::ZERO);
        self.foreign_balance += home_amount / rate;
    }

    // --- Accessors ---

    pub fn home_currency(&self) -> &CurrencyCode {
        &self.home_currency
    }

    pub fn foreign_currency(&self) -> &CurrencyCode {
        &self.foreign_currency
    }

    pub fn home_balance(&self) -> Decimal {
        self.home_balance
    }

    pub fn foreign_balance(&self) -> Decimal {
        self.foreign_balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn zar_usd_ledger(opening: Decimal) -> WalletLedger {
        WalletLedger::new(CurrencyCode::new("ZAR"), CurrencyCode::new("USD"), opening)
    }

    #[test]
    fn test_debit_premium() {
        let mut ledger = zar_usd_ledger(dec!(1_000_000));
        ledger.debit_premium(dec!(3000));
        assert_eq!(ledger.home_balance(), dec!(997_000));
        assert_eq!(ledger.foreign_balance(), Decimal::ZERO);
    }

    #[test]
    fn test_debit_clamps_at_zero() {
        let mut ledger = zar_usd_ledger(dec!(100));
        ledger.debit_premium(dec!(500));
        assert_eq!(ledger.home_balance(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_debit_is_noop() {
        let mut ledger = zar_usd_ledger(dec!(100));
        ledger.debit_premium(dec!(-50));
        assert_eq!(ledger.home_balance(), dec!(100));
    }

    #[test]
    fn test_settle_moves_funds_at_rate() {
        let mut ledger = zar_usd_ledger(dec!(2_000_000));
        ledger.settle(dec!(1_900_000), dec!(19.0));
        assert_eq!(ledger.home_balance(), dec!(100_000));
        assert_eq!(ledger.foreign_balance(), dec!(100_000));
    }

    #[test]
    fn test_settle_clamps_home_but_credits_full_foreign() {
        let mut ledger = zar_usd_ledger(dec!(500_000));
        ledger.settle(dec!(1_900_000), dec!(19.0));
        assert_eq!(ledger.home_balance(), Decimal::ZERO);
        assert_eq!(ledger.foreign_balance(), dec!(100_000));
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn test_settle_rejects_zero_rate() {
        let mut ledger = zar_usd_ledger(dec!(100));
        ledger.settle(dec!(10), Decimal::ZERO);
    }
}
