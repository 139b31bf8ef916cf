//! Foundational domain types: currencies, fixed-point rates, hedge
//! contracts, and the wallet ledger.

pub mod contract;
pub mod currency;
pub mod ledger;
pub mod rate;
