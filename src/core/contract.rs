use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Errors arising from invalid contract terms.
///
/// Violating input is rejected before any state changes; it is never
/// silently corrected.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("baseline rate must be positive, got {0}")]
    NonPositiveBaseline(Decimal),
    #[error("target rate must be positive, got {0}")]
    NonPositiveTarget(Decimal),
    #[error("notional amount must be positive, got {0}")]
    NonPositiveNotional(Decimal),
    #[error("duration must be at least one day")]
    ZeroDuration,
    #[error("target rate {target} must exceed baseline rate {baseline}")]
    TargetNotAboveBaseline { baseline: Decimal, target: Decimal },
}

/// The terms requested when opening a hedge contract.
///
/// The hedge is directional: it protects against appreciation of the
/// quoted currency, so the target rate must sit strictly above the
/// baseline rate recorded at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractTerms {
    /// Exchange rate at creation time, the hedge's reference point.
    pub baseline_rate: Decimal,
    /// Rate the holder wants to lock in. Must exceed the baseline.
    pub target_rate: Decimal,
    /// Nominal exposure size in foreign-currency units (e.g. USD).
    pub notional_amount: Decimal,
    /// Contract lifetime in days.
    pub duration_days: u32,
}

impl ContractTerms {
    pub fn new(
        baseline_rate: Decimal,
        target_rate: Decimal,
        notional_amount: Decimal,
        duration_days: u32,
    ) -> Self {
        Self {
            baseline_rate,
            target_rate,
            notional_amount,
            duration_days,
        }
    }

    /// Check every term: all values strictly positive, target above baseline.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.baseline_rate <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveBaseline(self.baseline_rate));
        }
        if self.target_rate <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveTarget(self.target_rate));
        }
        if self.notional_amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveNotional(self.notional_amount));
        }
        if self.duration_days == 0 {
            return Err(ValidationError::ZeroDuration);
        }
        if self.target_rate <= self.baseline_rate {
            return Err(ValidationError::TargetNotAboveBaseline {
                baseline: self.baseline_rate,
                target: self.target_rate,
            });
        }
        Ok(())
    }
}

/// Lifecycle status of a hedge contract.
///
/// A contract is `Active` from creation until settlement evaluation,
/// which marks it `Settled` exactly once regardless of payoff outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractStatus {
    Active,
    Settled,
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractStatus::Active => write!(f, "Active"),
            ContractStatus::Settled => write!(f, "Settled"),
        }
    }
}

/// An open FX hedge contract.
///
/// Contracts are immutable after creation apart from the single
/// `Active → Settled` status transition performed at settlement.
/// The premium is computed once, at creation, and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HedgeContract {
    /// Unique identifier for this contract.
    id: Uuid,
    baseline_rate: Decimal,
    target_rate: Decimal,
    notional_amount: Decimal,
    duration_days: u32,
    /// Upfront fee charged on creation, in home-currency units.
    premium: Decimal,
    status: ContractStatus,
    /// Display color assigned from the registry palette.
    color: String,
    created_at: DateTime<Utc>,
}

impl HedgeContract {
    /// Create a contract from validated terms.
    ///
    /// The normal path is [`ContractRegistry::create`], which validates
    /// the terms, prices the premium, and assigns the color.
    ///
    /// [`ContractRegistry::create`]: crate::registry::contract_registry::ContractRegistry::create
    pub fn new(terms: ContractTerms, premium: Decimal, color: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), terms, premium, color)
    }

    /// Create a contract with a specific ID (useful for testing / determinism).
    pub fn with_id(
        id: Uuid,
        terms: ContractTerms,
        premium: Decimal,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            baseline_rate: terms.baseline_rate,
            target_rate: terms.target_rate,
            notional_amount: terms.notional_amount,
            duration_days: terms.duration_days,
            premium,
            status: ContractStatus::Active,
            color: color.into(),
            created_at: Utc::now(),
        }
    }

    pub(crate) fn mark_settled(&mut self) {
        self.status = ContractStatus::Settled;
    }

    // --- Accessors ---

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn baseline_rate(&self) -> Decimal {
        self.baseline_rate
    }

    pub fn target_rate(&self) -> Decimal {
        self.target_rate
    }

    pub fn notional_amount(&self) -> Decimal {
        self.notional_amount
    }

    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    pub fn premium(&self) -> Decimal {
        self.premium
    }

    pub fn status(&self) -> ContractStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == ContractStatus::Active
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
