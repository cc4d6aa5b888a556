//! Expense input collection
//!
//! Asks for the monthly budget, one monthly amount per service, one
//! percentage per tax and the period length, in that order.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::TaxnetResult;
use crate::models::{ExpenseEntry, ExpenseInputs, TaxRate, TaxRates, DEFAULT_SERVICES, DEFAULT_TAXES};

use super::prompt::Prompter;

/// Collect the inputs for the default services and taxes
pub fn collect_expense_inputs<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> TaxnetResult<ExpenseInputs> {
    collect_expense_inputs_for(prompter, &DEFAULT_SERVICES, &DEFAULT_TAXES)
}

/// Collect the inputs for an explicit list of services and taxes
pub fn collect_expense_inputs_for<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    services: &[&str],
    taxes: &[&str],
) -> TaxnetResult<ExpenseInputs> {
    let budget = prompter.ask_money("Enter your average monthly income: ")?;

    let mut expenses = Vec::with_capacity(services.len());
    for service in services {
        let amount =
            prompter.ask_money(&format!("Enter the average monthly amount for {}: ", service))?;
        expenses.push(ExpenseEntry::new(*service, amount));
    }

    let mut rates = TaxRates::new();
    for tax in taxes {
        let percent = prompter.ask_percent(&format!("Enter the {} rate (%): ", tax))?;
        rates.push(TaxRate::new(*tax, percent));
    }

    let period_months =
        prompter.ask_integer("Enter the number of months for the calculation: ", "period")?;

    debug!(
        services = expenses.len(),
        taxes = rates.len(),
        period_months,
        "collected expense inputs"
    );

    Ok(ExpenseInputs {
        budget,
        expenses,
        taxes: rates,
        period_months,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use std::io::Cursor;

    #[test]
    fn test_collects_in_prompt_order() {
        let input = "2500\n100\n50\n80\n300\n18\n5\n3\n";
        let mut prompter = Prompter::new(Cursor::new(input), Vec::new());

        let inputs = collect_expense_inputs(&mut prompter).unwrap();

        assert_eq!(inputs.budget, Money::from_cents(250000));
        let services: Vec<&str> = inputs.expenses.iter().map(|e| e.service.as_str()).collect();
        assert_eq!(services, DEFAULT_SERVICES);
        assert_eq!(inputs.expenses[3].monthly_amount, Money::from_cents(30000));
        assert_eq!(inputs.taxes.combined_percent(), 23.0);
        assert_eq!(inputs.period_months, 3);

        let out = String::from_utf8(prompter.into_writer()).unwrap();
        assert!(out.contains("Enter the average monthly amount for Household Purchases: "));
        assert!(out.contains("Enter the ISS rate (%): "));
    }

    #[test]
    fn test_invalid_entry_is_asked_again() {
        let input = "1000\nten\n10\n5\n3\n12\n";
        let mut prompter = Prompter::new(Cursor::new(input), Vec::new());

        let inputs = collect_expense_inputs_for(&mut prompter, &["Energy"], &["ICMS", "ISS"]).unwrap();

        assert_eq!(inputs.expenses[0].monthly_amount, Money::from_cents(1000));
        assert_eq!(inputs.taxes.combined_percent(), 8.0);
        let out = String::from_utf8(prompter.into_writer()).unwrap();
        assert!(out.contains("Invalid amount: 'ten'"));
    }

    #[test]
    fn test_end_of_input_aborts() {
        let mut prompter = Prompter::new(Cursor::new("2500\n100\n"), Vec::new());
        let err = collect_expense_inputs(&mut prompter).unwrap_err();
        assert!(err.is_end_of_input());
    }

    #[test]
    fn test_no_taxes() {
        let mut prompter = Prompter::new(Cursor::new("100\n40\n12\n"), Vec::new());
        let inputs = collect_expense_inputs_for(&mut prompter, &["Water"], &[]).unwrap();
        assert!(inputs.taxes.is_empty());
        assert_eq!(inputs.period_months, 12);
    }
}
