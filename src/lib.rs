//! # fx-hedge-engine
//!
//! Simulated FX hedging engine for currency risk management demos.
//!
//! Given a stream of exchange-rate observations, this engine prices hedge
//! contracts, tracks them in an in-memory registry, and settles them against
//! an observed actual rate: a contract pays out when the actual rate moves
//! strictly above its target, locking the transfer in at the target rate.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: currencies, fixed-point rates, hedge
//!   contracts, the wallet ledger
//! - **pricing** — Premium calculator and the pricing-oracle boundary
//! - **registry** — Insertion-ordered contract store with color assignment
//! - **settlement** — One-shot settlement evaluation
//! - **simulation** — Synthetic rate feed standing in for a live market feed

pub mod core;
pub mod pricing;
pub mod registry;
pub mod settlement;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::contract::{ContractStatus, ContractTerms, HedgeContract};
    pub use crate::core::currency::{CurrencyCode, CurrencyPair};
    pub use crate::core::ledger::WalletLedger;
    pub use crate::core::rate::RateObservation;
    pub use crate::pricing::oracle::{LocalPricingOracle, PricingOracle};
    pub use crate::pricing::premium::PremiumCalculator;
    pub use crate::registry::contract_registry::ContractRegistry;
    pub use crate::settlement::evaluator::{SettlementEvaluator, SettlementResult};
    pub use crate::simulation::rate_feed::{FeedConfig, RateSource, SyntheticRateFeed};
}
