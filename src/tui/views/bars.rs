//! Grouped bar chart view
//!
//! One group per service: the original monthly amount and the period total
//! with tax, each labelled with its value.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::display::ExpenseChart;
use crate::models::Money;
use crate::tui::layout::LegendLayout;

const ORIGINAL_COLOR: Color = Color::LightBlue;
const WITH_TAX_COLOR: Color = Color::LightRed;

/// Render the bar chart view
pub fn render(frame: &mut Frame, chart: &ExpenseChart, area: Rect) {
    let layout = LegendLayout::new(area);

    let legend = Paragraph::new(Line::from(vec![
        Span::styled(" ██ ", Style::default().fg(ORIGINAL_COLOR)),
        Span::raw("Original (monthly)   "),
        Span::styled("██ ", Style::default().fg(WITH_TAX_COLOR)),
        Span::raw(format!("With ICMS ({}%, whole period)", chart.tax_percent)),
    ]));
    frame.render_widget(legend, layout.legend);

    let block = Block::default()
        .title(format!(" {} ", chart.bar_title()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL);

    let mut bar_chart = BarChart::default()
        .block(block)
        .bar_width(bar_width(layout.chart.width, chart.services.len()))
        .bar_gap(1)
        .group_gap(3)
        .label_style(Style::default().fg(Color::White));

    for ((service, &original), &with_tax) in
        chart.services.iter().zip(&chart.original).zip(&chart.with_tax)
    {
        let group = BarGroup::default()
            .label(Line::from(service.clone()))
            .bars(&[
                bar(original, chart.money(original), ORIGINAL_COLOR),
                bar(with_tax, chart.money(with_tax), WITH_TAX_COLOR),
            ]);
        bar_chart = bar_chart.data(group);
    }

    frame.render_widget(bar_chart, layout.chart);
}

fn bar(amount: Money, label: String, color: Color) -> Bar<'static> {
    Bar::default()
        .value(amount.cents().max(0) as u64)
        .text_value(label)
        .style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color))
}

/// Widest bars that still fit every group side by side
fn bar_width(area_width: u16, groups: usize) -> u16 {
    if groups == 0 {
        return 1;
    }
    let inner = area_width.saturating_sub(2) as usize;
    let per_group = inner / groups;
    // two bars, one bar gap, three group gap
    let width = per_group.saturating_sub(4) / 2;
    width.clamp(3, 16) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_fits_groups() {
        assert_eq!(bar_width(100, 4), 10);
        assert_eq!(bar_width(20, 4), 3);
        assert_eq!(bar_width(400, 1), 16);
        assert_eq!(bar_width(80, 0), 1);
    }
}
