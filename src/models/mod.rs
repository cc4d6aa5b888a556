//! Core data models for taxnet
//!
//! Money amounts, expense entries and tax rates. The network demo keeps its
//! own types in [`crate::network`].

pub mod expense;
pub mod money;
pub mod tax;

pub use expense::{ExpenseEntry, ExpenseInputs, DEFAULT_SERVICES};
pub use money::{Money, MoneyParseError};
pub use tax::{parse_percent, TaxRate, TaxRates, DEFAULT_TAXES};
