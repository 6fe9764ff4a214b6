//! Request/response bodies that are not domain types

pub mod inventory;
pub mod tax;
