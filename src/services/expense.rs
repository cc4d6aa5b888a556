//! Expense calculation service
//!
//! Applies the combined tax rate to every monthly expense and projects the
//! result over a number of months. Pure: no console or chart I/O happens here.

use tracing::debug;

use crate::models::{ExpenseEntry, ExpenseInputs, Money, TaxRates};

/// One service's line in an expense report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseLine {
    /// Service name
    pub service: String,
    /// Amount entered by the user
    pub monthly_amount: Money,
    /// Monthly amount with the combined tax applied
    pub adjusted_monthly: Money,
    /// Monthly amount times the tax multiplier times the period, rounded once
    pub period_total: Money,
}

/// Result of an expense calculation, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseReport {
    /// Sum of every tax percentage that was applied
    pub combined_tax_percent: f64,
    /// Number of months projected
    pub period_months: i64,
    /// Per-service lines
    pub lines: Vec<ExpenseLine>,
}

impl ExpenseReport {
    /// Sum of every period total
    pub fn total_period(&self) -> Money {
        self.lines.iter().map(|l| l.period_total).sum()
    }

    /// Sum of every monthly amount before taxes
    pub fn total_monthly(&self) -> Money {
        self.lines.iter().map(|l| l.monthly_amount).sum()
    }

    /// Service names in report order
    pub fn services(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.service.as_str()).collect()
    }
}

/// Closing figures printed after the charts
///
/// `flat_tax` applies the display rate to the whole period total. This is a
/// different quantity from the compounded per-service tax already included in
/// each period total; both are reported as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpenseSummary {
    /// Sum of all period totals
    pub total_spend: Money,
    /// Monthly budget minus total spend
    pub budget_remaining: Money,
    /// Display tax percentage the flat figure was computed with
    pub display_tax_percent: f64,
    /// Total spend x display tax percentage / 100
    pub flat_tax: Money,
}

impl ExpenseSummary {
    pub fn new(report: &ExpenseReport, budget: Money, display_tax_percent: f64) -> Self {
        let total_spend = report.total_period();
        Self {
            total_spend,
            budget_remaining: budget - total_spend,
            display_tax_percent,
            flat_tax: total_spend.scale(display_tax_percent / 100.0),
        }
    }
}

/// Stateless expense calculator
pub struct ExpenseCalculator;

impl ExpenseCalculator {
    /// Apply the summed tax rates to each expense and scale by the period
    pub fn calculate(expenses: &[ExpenseEntry], period_months: i64, taxes: &TaxRates) -> ExpenseReport {
        let combined_tax_percent = taxes.combined_percent();
        let multiplier = 1.0 + taxes.combined_fraction();

        let lines = expenses
            .iter()
            .map(|entry| {
                // The period total comes from the exact product, not the rounded monthly figure
                ExpenseLine {
                    service: entry.service.clone(),
                    monthly_amount: entry.monthly_amount,
                    adjusted_monthly: entry.monthly_amount.scale(multiplier),
                    period_total: entry.monthly_amount.scale(multiplier * period_months as f64),
                }
            })
            .collect::<Vec<_>>();

        debug!(
            services = lines.len(),
            combined_tax_percent,
            period_months,
            "calculated expense report"
        );

        ExpenseReport {
            combined_tax_percent,
            period_months,
            lines,
        }
    }

    /// Calculate straight from a collected input bundle
    pub fn calculate_inputs(inputs: &ExpenseInputs) -> ExpenseReport {
        Self::calculate(&inputs.expenses, inputs.period_months, &inputs.taxes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaxRate;

    fn taxes(percents: &[(&str, f64)]) -> TaxRates {
        percents.iter().map(|(n, p)| TaxRate::new(*n, *p)).collect()
    }

    fn money(s: &str) -> Money {
        Money::parse(s).unwrap()
    }

    #[test]
    fn test_energy_and_water_example() {
        let expenses = vec![
            ExpenseEntry::new("Energy", money("100")),
            ExpenseEntry::new("Water", money("50")),
        ];
        let report =
            ExpenseCalculator::calculate(&expenses, 3, &taxes(&[("ICMS", 18.0), ("ISS", 5.0)]));

        assert!((report.combined_tax_percent - 23.0).abs() < 1e-9);
        assert_eq!(report.services(), vec!["Energy", "Water"]);
        assert_eq!(report.lines[0].adjusted_monthly, money("123.00"));
        assert_eq!(report.lines[1].adjusted_monthly, money("61.50"));
        assert_eq!(report.lines[0].period_total, money("369.00"));
        assert_eq!(report.lines[1].period_total, money("184.50"));
        assert_eq!(report.total_period(), money("553.50"));
        assert_eq!(report.total_monthly(), money("150.00"));
    }

    #[test]
    fn test_adjustment_formula_over_periods_and_rates() {
        let amounts = ["0", "1", "33.33", "100", "1234.56", "-20"];
        for &period in &[0_i64, 1, 12] {
            for &rate in &[0.0, 18.0, 100.0] {
                let expenses: Vec<_> = amounts
                    .iter()
                    .map(|a| ExpenseEntry::new(*a, money(a)))
                    .collect();
                let report = ExpenseCalculator::calculate(&expenses, period, &taxes(&[("T", rate)]));

                for (line, entry) in report.lines.iter().zip(&expenses) {
                    let expected = entry.monthly_amount.as_f64() * (1.0 + rate / 100.0);
                    assert!(
                        (line.adjusted_monthly.as_f64() - expected).abs() <= 0.005 + 1e-9,
                        "amount {} rate {}",
                        entry.service,
                        rate
                    );
                    let exact = entry.monthly_amount.cents() as f64 * ((1.0 + rate / 100.0) * period as f64);
                    assert_eq!(line.period_total.cents(), exact.round() as i64);
                }
            }
        }
    }

    #[test]
    fn test_period_total_is_rounded_once() {
        let expenses = vec![ExpenseEntry::new("Internet", money("33.33"))];
        let report = ExpenseCalculator::calculate(&expenses, 12, &taxes(&[("ICMS", 18.0)]));

        // 33.33 * 1.18 = 39.3294, shown as 39.33
        assert_eq!(report.lines[0].adjusted_monthly, money("39.33"));
        // 39.3294 * 12 = 471.9528, not 39.33 * 12 = 471.96
        assert_eq!(report.lines[0].period_total, money("471.95"));
        assert_eq!(report.lines[0].period_total.cents(), 47195);
    }

    #[test]
    fn test_huge_amounts_saturate_instead_of_overflowing() {
        let expenses = vec![
            ExpenseEntry::new("Energy", money("90000000000000")),
            ExpenseEntry::new("Water", money("90000000000000")),
        ];
        let report = ExpenseCalculator::calculate(&expenses, 1000, &TaxRates::new());

        assert_eq!(report.lines[0].period_total, Money::from_cents(9_000_000_000_000_000_000));
        assert_eq!(report.total_period(), Money::from_cents(i64::MAX));
        assert_eq!(report.total_monthly(), money("180000000000000"));

        let summary = ExpenseSummary::new(&report, money("2500"), 18.0);
        assert!(summary.budget_remaining.is_negative());
    }

    #[test]
    fn test_zero_and_negative_period_propagate() {
        let expenses = vec![ExpenseEntry::new("Energy", money("100"))];
        let none = TaxRates::new();

        let zero = ExpenseCalculator::calculate(&expenses, 0, &none);
        assert_eq!(zero.total_period(), Money::zero());

        let negative = ExpenseCalculator::calculate(&expenses, -2, &none);
        assert_eq!(negative.total_period(), money("-200"));
    }

    #[test]
    fn test_summary_remaining_is_exact_subtraction() {
        let expenses = vec![
            ExpenseEntry::new("Energy", money("100")),
            ExpenseEntry::new("Water", money("50")),
        ];
        let report =
            ExpenseCalculator::calculate(&expenses, 3, &taxes(&[("ICMS", 18.0), ("ISS", 5.0)]));
        let summary = ExpenseSummary::new(&report, money("2500"), 18.0);

        assert_eq!(summary.total_spend, money("553.50"));
        assert_eq!(summary.budget_remaining, money("1946.50"));
        // 553.50 * 0.18 = 99.63
        assert_eq!(summary.flat_tax, money("99.63"));
    }

    #[test]
    fn test_overspent_budget_goes_negative() {
        let expenses = vec![ExpenseEntry::new("Energy", money("1000"))];
        let report = ExpenseCalculator::calculate(&expenses, 12, &TaxRates::new());
        let summary = ExpenseSummary::new(&report, money("1500"), 18.0);

        assert_eq!(summary.budget_remaining, money("-10500"));
        assert!(summary.budget_remaining.is_negative());
    }
}
