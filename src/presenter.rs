//! Chart presentation backends
//!
//! The menu hands finished chart data to a [`ChartPresenter`]. The TUI
//! presenter lives in [`crate::tui`]; [`TextPresenter`] writes plain text to
//! the console stream and is what tests and piped sessions use.

use std::io::Write;

use crate::display::{format_bar_chart, format_network_drawing, format_pie_chart, ExpenseChart};
use crate::error::TaxnetResult;
use crate::network::NetworkAnalysis;

/// Something that can show the expense charts and the network drawing
///
/// Both calls block until the charts have been shown (for the TUI, until the
/// user dismisses them).
pub trait ChartPresenter {
    /// Show the grouped bar chart followed by the pie chart
    fn show_expense_charts(&mut self, out: &mut dyn Write, chart: &ExpenseChart) -> TaxnetResult<()>;

    /// Show the spring-layout drawing of the network
    fn show_network(&mut self, out: &mut dyn Write, analysis: &NetworkAnalysis) -> TaxnetResult<()>;
}

/// Writes text charts to the console stream
#[derive(Debug, Clone, Copy)]
pub struct TextPresenter {
    bar_width: usize,
    grid_width: usize,
    grid_height: usize,
}

impl TextPresenter {
    pub fn new(bar_width: usize, grid_width: usize, grid_height: usize) -> Self {
        Self {
            bar_width,
            grid_width,
            grid_height,
        }
    }
}

impl Default for TextPresenter {
    fn default() -> Self {
        Self::new(30, 48, 16)
    }
}

impl ChartPresenter for TextPresenter {
    fn show_expense_charts(&mut self, out: &mut dyn Write, chart: &ExpenseChart) -> TaxnetResult<()> {
        writeln!(out)?;
        write!(out, "{}", format_bar_chart(chart, self.bar_width))?;
        writeln!(out)?;
        write!(out, "{}", format_pie_chart(chart, self.bar_width / 2))?;
        Ok(())
    }

    fn show_network(&mut self, out: &mut dyn Write, analysis: &NetworkAnalysis) -> TaxnetResult<()> {
        writeln!(out)?;
        write!(
            out,
            "{}",
            format_network_drawing(analysis, self.grid_width, self.grid_height)
        )?;
        Ok(())
    }
}
