//! Service layer for taxnet
//!
//! Pure business logic: expense calculation and tax rate lookup.

pub mod expense;
pub mod rate;

pub use expense::{ExpenseCalculator, ExpenseLine, ExpenseReport, ExpenseSummary};
pub use rate::{FixedRateProvider, TaxRateProvider};
