//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! estate-settlement test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built ids, amounts and complete inventory cases
//! - `builders`: Builder patterns for decedents, heirs, assets, debts and cases
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
