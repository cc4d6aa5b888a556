//! Full-screen chart presentation
//!
//! Each chart takes over the terminal (raw mode, alternate screen) until the
//! user dismisses it, then the console is handed back to the menu.

pub mod event;
pub mod layout;
pub mod terminal;
pub mod views;

use std::io::Write;

use tracing::debug;

use crate::display::ExpenseChart;
use crate::error::{TaxnetError, TaxnetResult};
use crate::network::NetworkAnalysis;
use crate::presenter::ChartPresenter;

pub use terminal::run_screen;
pub use views::Screen;

/// Presents charts as ratatui screens
#[derive(Debug, Default, Clone, Copy)]
pub struct TuiPresenter;

impl TuiPresenter {
    pub fn new() -> Self {
        Self
    }

    fn show(&self, screen: Screen<'_>) -> TaxnetResult<()> {
        debug!(screen = screen.name(), "opening chart screen");
        run_screen(&screen).map_err(|e| TaxnetError::Tui(e.to_string()))
    }
}

impl ChartPresenter for TuiPresenter {
    fn show_expense_charts(&mut self, out: &mut dyn Write, chart: &ExpenseChart) -> TaxnetResult<()> {
        out.flush()?;
        self.show(Screen::ExpenseBars(chart))?;
        self.show(Screen::ExpensePie(chart))
    }

    fn show_network(&mut self, out: &mut dyn Write, analysis: &NetworkAnalysis) -> TaxnetResult<()> {
        out.flush()?;
        self.show(Screen::Network(analysis))
    }
}
