//! # Shared test problems
//!
//! Convention for function names:
//!
//! * `fn canonical_form()`
//! * `fn initial_plan()`, `fn initial_basis()`
//! * `fn optimal_plan()`, `fn optimal_basis()`
pub mod problem_2;
