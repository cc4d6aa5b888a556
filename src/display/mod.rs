//! Display formatting for terminal output
//!
//! Provides utilities for formatting reports, tables and text charts for
//! terminal display.

pub mod charts;
pub mod expense;
pub mod network;
pub mod report;

pub use charts::{format_bar_chart, format_network_drawing, format_pie_chart, ExpenseChart, PieSlice};
pub use expense::{
    format_expense_report, format_expense_summary, format_rate_line, format_tax_explanations,
};
pub use network::format_network_analysis;
