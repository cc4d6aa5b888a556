//! Expense models
//!
//! A monthly expense entry per household service, and the bundle of values
//! collected from the user for one expense calculation.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::tax::TaxRates;

/// Household services the calculator asks about, in prompt order
pub const DEFAULT_SERVICES: [&str; 4] = ["Energy", "Water", "Internet", "Household Purchases"];

/// The monthly amount spent on one service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// Service name
    pub service: String,
    /// Amount spent per month, before taxes
    pub monthly_amount: Money,
}

impl ExpenseEntry {
    pub fn new(service: impl Into<String>, monthly_amount: Money) -> Self {
        Self {
            service: service.into(),
            monthly_amount,
        }
    }
}

/// Everything collected from the user for one expense calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseInputs {
    /// Monthly budget (salary) the expenses are compared against
    pub budget: Money,
    /// Expenses in the order they were entered
    pub expenses: Vec<ExpenseEntry>,
    /// Tax percentages applied to every service
    pub taxes: TaxRates,
    /// Number of months to project; not validated
    pub period_months: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_services_order() {
        assert_eq!(DEFAULT_SERVICES[0], "Energy");
        assert_eq!(DEFAULT_SERVICES[3], "Household Purchases");
    }

    #[test]
    fn test_entry_new() {
        let entry = ExpenseEntry::new("Water", Money::from_cents(5000));
        assert_eq!(entry.service, "Water");
        assert_eq!(entry.monthly_amount.cents(), 5000);
    }
}
