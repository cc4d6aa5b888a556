//! Network graph view
//!
//! Draws the spring layout on a canvas: links as lines, nodes as circles
//! labelled with their index. The side panel lists degrees and links.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Borders, Paragraph, Wrap,
    },
    Frame,
};

use crate::network::NetworkAnalysis;
use crate::tui::layout::{square_bounds, SplitLayout};

use super::PALETTE;

const NODE_RADIUS: f64 = 0.07;
const EDGE_COLOR: Color = Color::DarkGray;

/// Render the network view
pub fn render(frame: &mut Frame, analysis: &NetworkAnalysis, area: Rect) {
    let layout = SplitLayout::new(area);
    let positions = &analysis.layout.positions;
    let edges = analysis.edges();
    let (x_bounds, y_bounds) = square_bounds(layout.drawing, 1.25);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(format!(
                    " Communication network ({} nodes) ",
                    analysis.node_count()
                ))
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
            for &(a, b) in &edges {
                let (x1, y1) = positions[a];
                let (x2, y2) = positions[b];
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: EDGE_COLOR,
                });
            }
            ctx.layer();
            for (node, &(x, y)) in positions.iter().enumerate() {
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: NODE_RADIUS,
                    color: node_color(node),
                });
            }
            ctx.layer();
            for (node, &(x, y)) in positions.iter().enumerate() {
                ctx.print(
                    x + NODE_RADIUS * 1.5,
                    y + NODE_RADIUS * 1.5,
                    Span::styled(
                        node.to_string(),
                        Style::default()
                            .fg(node_color(node))
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });
    frame.render_widget(canvas, layout.drawing);

    let mut lines = vec![Line::from(Span::styled(
        "Degree (row sum)",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for (node, degree) in analysis.degrees.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(node_color(node))),
            Span::raw(format!("Node {}: {}", node, degree)),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Links",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    if edges.is_empty() {
        lines.push(Line::raw("none"));
    } else {
        let links: Vec<String> = edges
            .iter()
            .map(|(a, b)| format!("{}-{}", a, b))
            .collect();
        lines.push(Line::raw(links.join(", ")));
    }

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Nodes ").borders(Borders::ALL));
    frame.render_widget(panel, layout.panel);
}

fn node_color(node: usize) -> Color {
    PALETTE[node % PALETTE.len()]
}
