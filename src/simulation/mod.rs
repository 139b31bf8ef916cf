//! Synthetic market data standing in for a live rate feed.

pub mod rate_feed;
