//! Chart screens
//!
//! Each screen draws one chart into the body and a dismiss hint into the
//! footer.

pub mod bars;
pub mod graph;
pub mod pie;

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::display::ExpenseChart;
use crate::network::NetworkAnalysis;

use super::layout::ScreenLayout;

/// Which chart a full-screen view shows
#[derive(Debug, Clone, Copy)]
pub enum Screen<'a> {
    ExpenseBars(&'a ExpenseChart),
    ExpensePie(&'a ExpenseChart),
    Network(&'a NetworkAnalysis),
}

impl Screen<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::ExpenseBars(_) => "expense bars",
            Screen::ExpensePie(_) => "expense pie",
            Screen::Network(_) => "network graph",
        }
    }
}

/// Palette shared by the bar, pie and graph screens
pub const PALETTE: [Color; 8] = [
    Color::LightBlue,
    Color::LightRed,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightMagenta,
    Color::LightCyan,
    Color::Blue,
    Color::Red,
];

/// Render a screen into the whole frame
pub fn render(frame: &mut Frame, screen: &Screen<'_>) {
    let layout = ScreenLayout::new(frame.area());

    match screen {
        Screen::ExpenseBars(chart) => bars::render(frame, chart, layout.body),
        Screen::ExpensePie(chart) => pie::render(frame, chart, layout.body),
        Screen::Network(analysis) => graph::render(frame, analysis, layout.body),
    }

    let footer = Paragraph::new(Line::from(vec![
        Span::styled(" Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" / "),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::raw(" / "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::styled(" to continue", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(footer, layout.footer);
}
