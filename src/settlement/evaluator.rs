use crate::core::contract::HedgeContract;
use crate::core::ledger::WalletLedger;
use crate::registry::contract_registry::ContractRegistry;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors arising from settlement evaluation.
///
/// Either failure leaves the registry and the ledger untouched.
#[derive(Debug, Error)]
pub enum SettlementError {
    #[error("no contract with id {0} in the registry")]
    UnknownContract(Uuid),
    #[error("actual rate must be positive, got {0}")]
    InvalidActualRate(Decimal),
}

/// Outcome of a settlement evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Whether the hedge paid out.
    pub success: bool,
    /// Home-currency amount moved to the foreign balance. Zero on failure.
    pub transferred_home_amount: Decimal,
    /// The rate the outcome resolved at: the locked-in target rate on
    /// success, the observed actual rate on failure.
    pub resulting_rate: Decimal,
    /// The evicted contract, marked `Settled`. The caller owns any audit
    /// history; the registry no longer holds it.
    pub contract: HedgeContract,
}

/// Evaluates hedge contracts against an observed actual rate.
///
/// Settlement is one-shot and terminal: the contract leaves the registry
/// whether or not the hedge paid out, and is never retried.
pub struct SettlementEvaluator;

impl SettlementEvaluator {
    /// Settle one contract against the observed actual rate.
    ///
    /// The hedge pays out iff `actual_rate` is strictly above the target
    /// rate; exact equality fails. On payout, `notional × target` home
    /// units move to the foreign balance at the locked target rate rather
    /// than the worse actual rate — that is the entire economic point of
    /// the hedge. On failure no funds move.
    pub fn evaluate(
        registry: &mut ContractRegistry,
        ledger: &mut WalletLedger,
        contract_id: Uuid,
        actual_rate: Decimal,
    ) -> Result<SettlementResult, SettlementError> {
        if actual_rate <= Decimal::ZERO {
            return Err(SettlementError::InvalidActualRate(actual_rate));
        }
        let mut contract = registry
            .remove(contract_id)
            .ok_or(SettlementError::UnknownContract(contract_id))?;

        let success = actual_rate > contract.target_rate();
        let transferred_home_amount = if success {
            let amount = contract.notional_amount() * contract.target_rate();
            ledger.settle(amount, contract.target_rate());
            amount
        } else {
            Decimal::ZERO
        };

        contract.mark_settled();
        log::info!(
            "settled contract {} at actual rate {}: {}",
            contract.id(),
            actual_rate,
            if success { "payout" } else { "no payout" }
        );

        Ok(SettlementResult {
            success,
            transferred_home_amount,
            resulting_rate: if success {
                contract.target_rate()
            } else {
                actual_rate
            },
            contract,
        })
    }
}

/// Benefit of the rate improvement over the target, in foreign-currency
/// units: `notional × (actual − target) / target`, zero at or below the
/// target. Mirrors the payout metric of the reference pricing engine.
pub fn rate_improvement_payout(
    notional_amount: Decimal,
    target_rate: Decimal,
    actual_rate: Decimal,
) -> Decimal {
    if actual_rate <= target_rate || target_rate <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    notional_amount * (actual_rate - target_rate) / target_rate
}
