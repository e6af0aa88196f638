//! # Representing linear programs
//!
//! Linear programs in canonical form contain equality constraints only and have non-negative
//! variables.
pub mod canonical_form;
