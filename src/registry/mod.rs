//! In-memory contract store: creation, lookup, removal, and the
//! deterministic display-color assignment.

pub mod color;
pub mod contract_registry;
