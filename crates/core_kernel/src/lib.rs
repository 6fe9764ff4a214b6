//! Core Kernel - Foundational types for the estate-settlement system
//!
//! This crate provides the building blocks shared by the inventory engine
//! and its adapters:
//! - Money and rate types with precise decimal arithmetic
//! - Strongly-typed identifiers for people, assets, debts and cases

pub mod money;
pub mod identifiers;

pub use money::{Money, Currency, MoneyError, Rate};
pub use identifiers::{CaseId, PersonId, AssetId, DebtId};
