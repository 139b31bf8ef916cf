//! One-shot settlement evaluation against an observed actual rate.

pub mod evaluator;
