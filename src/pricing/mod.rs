//! Premium pricing: the calculator consumed by the registry and the
//! oracle boundary it delegates to.

pub mod oracle;
pub mod premium;
