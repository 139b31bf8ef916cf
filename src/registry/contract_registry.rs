use crate::core::contract::{ContractTerms, HedgeContract, ValidationError};
use crate::core::ledger::WalletLedger;
use crate::pricing::oracle::PricingOracle;
use crate::pricing::premium::{PremiumCalculator, PricingError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors arising when opening a contract.
#[derive(Debug, Error)]
pub enum CreateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Insertion-ordered store of open hedge contracts.
///
/// The registry exclusively owns its collection; collaborators are passed
/// in explicitly per call, never reached through ambient state. Creation
/// is atomic: validation and pricing both succeed before the premium is
/// debited and the contract appended, so a failure leaves the registry
/// and the ledger untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractRegistry {
    contracts: Vec<HedgeContract>,
}

impl ContractRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new contract: validate the terms, price the premium against
    /// the baseline rate, debit it from the ledger, and append the
    /// contract with a deterministically assigned display color.
    pub fn create<O: PricingOracle>(
        &mut self,
        terms: ContractTerms,
        calculator: &PremiumCalculator<O>,
        ledger: &mut WalletLedger,
    ) -> Result<HedgeContract, CreateError> {
        terms.validate()?;
        let premium = calculator.calculate_premium(
            terms.notional_amount,
            terms.baseline_rate,
            terms.duration_days,
        )?;

        // All fallible steps are done; state changes start here.
        ledger.debit_premium(premium);
        let color = super::color::color_for_baseline(terms.baseline_rate, &self.contracts);
        let contract = HedgeContract::new(terms, premium, color);
        log::info!(
            "opened hedge contract {} (target {}, notional {}, premium {})",
            contract.id(),
            contract.target_rate(),
            contract.notional_amount(),
            contract.premium()
        );
        self.contracts.push(contract.clone());
        Ok(contract)
    }

    /// All held contracts in insertion order.
    pub fn list(&self) -> &[HedgeContract] {
        &self.contracts
    }

    pub fn get(&self, id: Uuid) -> Option<&HedgeContract> {
        self.contracts.iter().find(|c| c.id() == id)
    }

    /// Delete a contract, returning it if present. Idempotent: removing
    /// an absent id is a no-op.
    pub fn remove(&mut self, id: Uuid) -> Option<HedgeContract> {
        let index = self.contracts.iter().position(|c| c.id() == id)?;
        Some(self.contracts.remove(index))
    }

    /// All contracts opened at exactly the given baseline rate.
    pub fn find_by_baseline_rate(&self, rate: Decimal) -> Vec<&HedgeContract> {
        self.contracts
            .iter()
            .filter(|c| c.baseline_rate() == rate)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}
