//! # Strategies
//!
//! Decisions that can be made in different ways without affecting correctness.
pub mod pivot_rule;
