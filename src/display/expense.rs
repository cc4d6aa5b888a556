//! Expense display formatting
//!
//! Formats an expense report and its closing summary for the console.

use crate::services::{ExpenseReport, ExpenseSummary};

use super::report::separator;

/// Adjusted monthly costs followed by period totals, one service per line
pub fn format_expense_report(report: &ExpenseReport, symbol: &str) -> String {
    let name_width = report
        .lines
        .iter()
        .map(|l| l.service.chars().count())
        .max()
        .unwrap_or(7)
        .max(7);

    let mut output = String::new();

    output.push_str(&format!(
        "Tax-adjusted monthly cost per service (combined taxes: {}%):\n",
        report.combined_tax_percent
    ));
    for line in &report.lines {
        output.push_str(&format!(
            "  {:<name_width$}  {:>14}\n",
            line.service,
            line.adjusted_monthly.format_with_symbol(symbol),
            name_width = name_width,
        ));
    }

    output.push('\n');
    output.push_str(&format!(
        "Totals for the period ({} months):\n",
        report.period_months
    ));
    for line in &report.lines {
        output.push_str(&format!(
            "  {:<name_width$}  {:>14}\n",
            line.service,
            line.period_total.format_with_symbol(symbol),
            name_width = name_width,
        ));
    }

    output.push_str(&format!("  {}\n", separator(name_width + 16)));
    output.push_str(&format!(
        "  {:<name_width$}  {:>14}\n",
        "TOTAL",
        report.total_period().format_with_symbol(symbol),
        name_width = name_width,
    ));

    output
}

/// Total spend, what is left of the budget, and the flat ICMS figure
pub fn format_expense_summary(summary: &ExpenseSummary, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Total spend: {}\n",
        summary.total_spend.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Left over from budget: {}\n",
        summary.budget_remaining.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total ICMS applied ({}%): {}\n",
        summary.display_tax_percent,
        summary.flat_tax.format_with_symbol(symbol)
    ));
    output
}

/// The line printed for the simulated real-time rate
pub fn format_rate_line(rate: f64) -> String {
    format!("Real-time ICMS rate: {}%", rate)
}

/// Short explanations of the two taxes the calculator asks about
pub fn format_tax_explanations(icms_rate: f64) -> String {
    let mut output = String::new();
    output.push_str("-- Tax explanations --\n");
    output.push_str(&format!(
        "ICMS: tax on the circulation of goods and services. Current rate: {}%.\n",
        icms_rate
    ));
    output.push_str(
        "ISS: tax on services. The rate depends on the municipality and the service provided.\n",
    );
    output
}
