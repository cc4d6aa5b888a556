//! Pie chart view
//!
//! Slices are filled with braille points on a canvas, starting at 140° and
//! running counter-clockwise. A legend lists every slice with its share.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::display::report::format_share;
use crate::display::{ExpenseChart, PieSlice};
use crate::tui::layout::{square_bounds, SplitLayout};

use super::PALETTE;

const START_ANGLE: f64 = 140.0;
const RINGS: usize = 48;
const STEPS_PER_RING: usize = 360;
/// Slices smaller than this get no label on the pie itself
const MIN_LABEL_SHARE: f64 = 4.0;

/// Render the pie chart view
pub fn render(frame: &mut Frame, chart: &ExpenseChart, area: Rect) {
    let layout = SplitLayout::new(area);
    let slices = chart.pie_slices();
    let points = slice_points(&slices);
    let (x_bounds, y_bounds) = square_bounds(layout.drawing, 1.15);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(format!(" {} ", chart.pie_title()))
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL),
        )
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for (idx, coords) in points.iter().enumerate() {
                ctx.draw(&Points {
                    coords: coords.as_slice(),
                    color: slice_color(idx),
                });
            }
            ctx.layer();
            for (slice, (start, sweep)) in slices.iter().zip(slice_angles(&slices)) {
                if slice.share < MIN_LABEL_SHARE {
                    continue;
                }
                let mid = (start + sweep / 2.0).to_radians();
                ctx.print(
                    0.6 * mid.cos(),
                    0.6 * mid.sin(),
                    Span::styled(
                        format_share(slice.share),
                        Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });
    frame.render_widget(canvas, layout.drawing);

    let legend: Vec<Line> = slices
        .iter()
        .enumerate()
        .map(|(idx, slice)| {
            Line::from(vec![
                Span::styled("██ ", Style::default().fg(slice_color(idx))),
                Span::raw(format!(
                    "{} {} ({})",
                    slice.label,
                    format_share(slice.share),
                    chart.money(slice.value)
                )),
            ])
        })
        .collect();

    let panel = Paragraph::new(legend).block(
        Block::default()
            .title(" Slices ")
            .borders(Borders::ALL),
    );
    frame.render_widget(panel, layout.panel);
}

fn slice_color(idx: usize) -> Color {
    PALETTE[idx % PALETTE.len()]
}

/// Start angle and sweep in degrees for every slice
fn slice_angles(slices: &[PieSlice]) -> Vec<(f64, f64)> {
    let mut start = START_ANGLE;
    slices
        .iter()
        .map(|slice| {
            let sweep = slice.share / 100.0 * 360.0;
            let angles = (start, sweep);
            start += sweep;
            angles
        })
        .collect()
}

/// Sample the unit disc and assign every sample to the slice covering its angle
fn slice_points(slices: &[PieSlice]) -> Vec<Vec<(f64, f64)>> {
    // Cumulative end of each slice, measured from the start angle
    let ends: Vec<f64> = slice_angles(slices)
        .iter()
        .map(|&(start, sweep)| start - START_ANGLE + sweep)
        .collect();
    let mut points = vec![Vec::new(); slices.len()];

    for ring in 1..=RINGS {
        let radius = ring as f64 / RINGS as f64;
        for step in 0..STEPS_PER_RING {
            let offset = step as f64 * 360.0 / STEPS_PER_RING as f64;
            if let Some(idx) = ends.iter().position(|&end| offset < end) {
                let theta = (START_ANGLE + offset).to_radians();
                points[idx].push((radius * theta.cos(), radius * theta.sin()));
            }
        }
    }

    points
}
