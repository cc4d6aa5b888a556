//! Layout definitions for the chart screens
//!
//! Every screen has a body and a one-line footer; the body of the pie and
//! network screens is split into a drawing and a side panel.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Body plus footer hint line
pub struct ScreenLayout {
    pub body: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Body
                Constraint::Length(1), // Footer
            ])
            .split(area);

        Self {
            body: chunks[0],
            footer: chunks[1],
        }
    }
}

/// Drawing on the left, legend or details on the right
pub struct SplitLayout {
    pub drawing: Rect,
    pub panel: Rect,
}

impl SplitLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(area);

        Self {
            drawing: chunks[0],
            panel: chunks[1],
        }
    }
}

/// One-line legend above a chart
pub struct LegendLayout {
    pub legend: Rect,
    pub chart: Rect,
}

impl LegendLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(3)])
            .split(area);

        Self {
            legend: chunks[0],
            chart: chunks[1],
        }
    }
}

/// Canvas bounds that keep circles round in a cell grid
///
/// Terminal cells are roughly twice as tall as they are wide.
pub fn square_bounds(area: Rect, radius: f64) -> ([f64; 2], [f64; 2]) {
    let width = f64::from(area.width.max(1));
    let height = f64::from(area.height.max(1));
    let aspect = width / (2.0 * height);

    if aspect >= 1.0 {
        ([-radius * aspect, radius * aspect], [-radius, radius])
    } else {
        ([-radius, radius], [-radius / aspect, radius / aspect])
    }
}
