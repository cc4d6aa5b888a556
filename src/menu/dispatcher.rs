//! Main menu loop
//!
//! Reads a numbered choice, runs the matching flow to completion and returns
//! to the menu until the user exits or input ends.

use std::io::{BufRead, Write};

use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::display::{
    format_expense_report, format_expense_summary, format_network_analysis, format_rate_line,
    format_tax_explanations, ExpenseChart,
};
use crate::error::{TaxnetError, TaxnetResult};
use crate::network::NetworkAnalyzer;
use crate::presenter::ChartPresenter;
use crate::services::{ExpenseCalculator, ExpenseSummary};

use super::input::collect_expense_inputs;
use super::prompt::{parse_integer, Prompter};
use super::state::{format_menu, MenuChoice, MenuState};

/// Values every flow of one session shares
#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    /// ICMS rate fetched at startup; also the display rate of the summary
    pub icms_rate: f64,
    pub currency_symbol: String,
    pub network_nodes: usize,
}

impl SessionContext {
    pub fn from_settings(settings: &Settings, icms_rate: f64) -> Self {
        Self {
            icms_rate,
            currency_symbol: settings.currency_symbol.clone(),
            network_nodes: settings.network_nodes,
        }
    }
}

/// Drives the menu state machine over a console
pub struct MenuDispatcher<'p, R, W> {
    prompter: Prompter<R, W>,
    context: SessionContext,
    presenter: &'p mut dyn ChartPresenter,
    rng: ChaCha8Rng,
    state: MenuState,
}

impl<'p, R: BufRead, W: Write> MenuDispatcher<'p, R, W> {
    pub fn new(
        prompter: Prompter<R, W>,
        context: SessionContext,
        presenter: &'p mut dyn ChartPresenter,
        rng: ChaCha8Rng,
    ) -> Self {
        Self {
            prompter,
            context,
            presenter,
            rng,
            state: MenuState::Idle,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Consume the dispatcher, returning the output stream
    pub fn into_writer(self) -> W {
        self.prompter.into_writer()
    }

    /// Run until the exit option is chosen or input ends
    pub fn run(&mut self) -> TaxnetResult<()> {
        while !self.state.is_terminated() {
            match self.step() {
                Ok(()) => {}
                Err(TaxnetError::EndOfInput) => {
                    info!("input closed, leaving the menu");
                    self.state = MenuState::Terminated;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Show the menu, read one choice and run its flow
    pub fn step(&mut self) -> TaxnetResult<()> {
        write!(self.prompter.writer(), "{}", format_menu())?;
        let number = self
            .prompter
            .ask("\nChoose an option: ", |line| parse_integer(line, "choice"))?;

        let choice = MenuChoice::from_number(number);
        self.state = self.state.on_choice(choice);
        debug!(number, state = ?self.state, "menu choice");

        match self.state {
            MenuState::Idle => {
                writeln!(self.prompter.writer(), "Invalid option. Try again.")?;
            }
            MenuState::ExpenseFlow => self.expense_flow()?,
            MenuState::RateDisplay => self.show_rate()?,
            MenuState::ExplanationDisplay => self.show_explanations()?,
            MenuState::NetworkFlow => self.network_flow()?,
            MenuState::Terminated => {
                writeln!(self.prompter.writer(), "Exiting...")?;
            }
        }

        self.state = self.state.finish();
        Ok(())
    }

    fn expense_flow(&mut self) -> TaxnetResult<()> {
        let inputs = collect_expense_inputs(&mut self.prompter)?;
        let report = ExpenseCalculator::calculate_inputs(&inputs);
        let symbol = self.context.currency_symbol.as_str();

        let out = self.prompter.writer();
        writeln!(out)?;
        write!(out, "{}", format_expense_report(&report, symbol))?;

        let chart = ExpenseChart::from_report(&report, self.context.icms_rate, symbol);
        let shown = self.presenter.show_expense_charts(&mut *out, &chart);
        charts_shown(&mut *out, shown)?;

        let summary = ExpenseSummary::new(&report, inputs.budget, self.context.icms_rate);
        writeln!(out)?;
        write!(out, "{}", format_expense_summary(&summary, symbol))?;
        Ok(())
    }

    fn show_rate(&mut self) -> TaxnetResult<()> {
        let out = self.prompter.writer();
        writeln!(out)?;
        writeln!(out, "{}", format_rate_line(self.context.icms_rate))?;
        Ok(())
    }

    fn show_explanations(&mut self) -> TaxnetResult<()> {
        let out = self.prompter.writer();
        writeln!(out)?;
        write!(out, "{}", format_tax_explanations(self.context.icms_rate))?;
        Ok(())
    }

    fn network_flow(&mut self) -> TaxnetResult<()> {
        let analysis = NetworkAnalyzer::new(self.context.network_nodes).run(&mut self.rng)?;

        let out = self.prompter.writer();
        writeln!(out)?;
        write!(out, "{}", format_network_analysis(&analysis))?;

        let shown = self.presenter.show_network(&mut *out, &analysis);
        charts_shown(out, shown)
    }
}

/// A chart screen that cannot be opened is reported and the flow goes on
fn charts_shown<W: Write>(out: &mut W, shown: TaxnetResult<()>) -> TaxnetResult<()> {
    match shown {
        Err(TaxnetError::Tui(message)) => {
            warn!(error = %message, "chart presentation failed");
            writeln!(out, "Charts unavailable: {}", message)?;
            Ok(())
        }
        other => other,
    }
}
