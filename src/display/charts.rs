//! Chart data and text chart rendering
//!
//! [`ExpenseChart`] holds what both chart backends draw: the original monthly
//! amount and the period total with tax for each service. The text renderers
//! here are used when no interactive terminal is available.

use crate::models::Money;
use crate::network::NetworkAnalysis;
use crate::services::ExpenseReport;

use super::report::{format_bar, format_share, separator, truncate};

/// One slice of the expense pie
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: Money,
    /// Share of the whole pie in percent; negative values get 0
    pub share: f64,
    /// Whether this slice is a period total with tax
    pub with_tax: bool,
}

/// Bar and pie chart data for one expense calculation
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseChart {
    pub services: Vec<String>,
    /// Monthly amounts as entered
    pub original: Vec<Money>,
    /// Period totals with tax
    pub with_tax: Vec<Money>,
    /// Tax percentage shown in titles
    pub tax_percent: f64,
    pub currency_symbol: String,
}

impl ExpenseChart {
    pub fn from_report(report: &ExpenseReport, tax_percent: f64, currency_symbol: &str) -> Self {
        Self {
            services: report.lines.iter().map(|l| l.service.clone()).collect(),
            original: report.lines.iter().map(|l| l.monthly_amount).collect(),
            with_tax: report.lines.iter().map(|l| l.period_total).collect(),
            tax_percent,
            currency_symbol: currency_symbol.to_string(),
        }
    }

    pub fn bar_title(&self) -> String {
        format!("Expenses per service (ICMS: {}%)", self.tax_percent)
    }

    pub fn pie_title(&self) -> String {
        format!("Expense distribution (ICMS: {}%)", self.tax_percent)
    }

    /// Format an amount with the chart's currency symbol
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Largest bar value, never below zero
    pub fn max_value(&self) -> Money {
        self.original
            .iter()
            .chain(&self.with_tax)
            .copied()
            .max()
            .unwrap_or_default()
            .max(Money::zero())
    }

    /// Originals first, then the with-tax totals, each with its share
    pub fn pie_slices(&self) -> Vec<PieSlice> {
        let positive = |m: Money| m.cents().max(0);
        let total: i64 = self
            .original
            .iter()
            .chain(&self.with_tax)
            .map(|&m| positive(m))
            .sum();

        let share = |m: Money| {
            if total == 0 {
                0.0
            } else {
                positive(m) as f64 / total as f64 * 100.0
            }
        };

        let originals = self
            .services
            .iter()
            .zip(&self.original)
            .map(|(service, &value)| PieSlice {
                label: service.clone(),
                value,
                share: share(value),
                with_tax: false,
            });
        let taxed = self
            .services
            .iter()
            .zip(&self.with_tax)
            .map(|(service, &value)| PieSlice {
                label: format!("{} - with ICMS", service),
                value,
                share: share(value),
                with_tax: true,
            });

        originals.chain(taxed).collect()
    }
}

/// Grouped bar chart: original and with-tax bar per service
pub fn format_bar_chart(chart: &ExpenseChart, bar_width: usize) -> String {
    let max = chart.max_value().as_f64();
    let mut output = String::new();

    output.push_str(&chart.bar_title());
    output.push('\n');
    output.push_str(&separator(bar_width + 34));
    output.push('\n');

    for ((service, &original), &with_tax) in
        chart.services.iter().zip(&chart.original).zip(&chart.with_tax)
    {
        output.push_str(service);
        output.push('\n');
        output.push_str(&format!(
            "  {:<12} {}  {}\n",
            "Original",
            format_bar(original.as_f64(), max, bar_width),
            chart.money(original)
        ));
        output.push_str(&format!(
            "  {:<12} {}  {}\n",
            "With ICMS",
            format_bar(with_tax.as_f64(), max, bar_width),
            chart.money(with_tax)
        ));
    }

    output
}

/// Pie chart as a table of slices with share bars
pub fn format_pie_chart(chart: &ExpenseChart, bar_width: usize) -> String {
    let slices = chart.pie_slices();
    let label_width = slices
        .iter()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(5)
        .min(36);

    let mut output = String::new();
    output.push_str(&chart.pie_title());
    output.push('\n');
    output.push_str(&separator(label_width + bar_width + 24));
    output.push('\n');

    for slice in &slices {
        output.push_str(&format!(
            "  {:<label_width$}  {}  {:>6}  {}\n",
            truncate(&slice.label, label_width),
            format_bar(slice.share, 100.0, bar_width),
            format_share(slice.share),
            chart.money(slice.value),
            label_width = label_width,
        ));
    }

    output
}

/// Plot the graph layout on a character grid and list its edges
pub fn format_network_drawing(analysis: &NetworkAnalysis, width: usize, height: usize) -> String {
    let width = width.max(3);
    let height = height.max(3);
    let mut grid = vec![vec![' '; width]; height];

    let to_cell = |(x, y): (f64, f64)| {
        let col = ((x + 1.0) / 2.0 * (width - 1) as f64).round();
        let row = ((1.0 - y) / 2.0 * (height - 1) as f64).round();
        (
            (col.max(0.0) as usize).min(width - 1),
            (row.max(0.0) as usize).min(height - 1),
        )
    };

    let edges = analysis.edges();
    for &(a, b) in &edges {
        let start = analysis.layout.positions[a];
        let end = analysis.layout.positions[b];
        let steps = width.max(height) * 2;
        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            let point = (
                start.0 + (end.0 - start.0) * t,
                start.1 + (end.1 - start.1) * t,
            );
            let (col, row) = to_cell(point);
            grid[row][col] = '·';
        }
    }

    for (node, &position) in analysis.layout.positions.iter().enumerate() {
        let (col, row) = to_cell(position);
        for (offset, ch) in node.to_string().chars().enumerate() {
            if col + offset < width {
                grid[row][col + offset] = ch;
            }
        }
    }

    let mut output = String::new();
    output.push_str(&format!(
        "Communication network ({} nodes, {} links)\n",
        analysis.node_count(),
        edges.len()
    ));
    output.push_str(&format!("┌{}┐\n", "─".repeat(width)));
    for row in grid {
        let line: String = row.into_iter().collect();
        output.push_str(&format!("│{}│\n", line));
    }
    output.push_str(&format!("└{}┘\n", "─".repeat(width)));

    if edges.is_empty() {
        output.push_str("Links: none\n");
    } else {
        let links: Vec<String> = edges
            .iter()
            .map(|(a, b)| format!("{}-{}", a, b))
            .collect();
        output.push_str(&format!("Links: {}\n", links.join(", ")));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseEntry, TaxRate, TaxRates};
    use crate::network::{AdjacencyMatrix, NetworkAnalyzer};
    use crate::services::ExpenseCalculator;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sample_chart() -> ExpenseChart {
        let expenses = vec![
            ExpenseEntry::new("Energy", Money::from_cents(10000)),
            ExpenseEntry::new("Water", Money::from_cents(5000)),
        ];
        let taxes: TaxRates = vec![TaxRate::new("ICMS", 18.0), TaxRate::new("ISS", 5.0)]
            .into_iter()
            .collect();
        let report = ExpenseCalculator::calculate(&expenses, 3, &taxes);
        ExpenseChart::from_report(&report, 18.0, "R$")
    }

    #[test]
    fn test_chart_from_report() {
        let chart = sample_chart();
        assert_eq!(chart.services, vec!["Energy", "Water"]);
        assert_eq!(chart.original[0].cents(), 10000);
        assert_eq!(chart.with_tax[0].cents(), 36900);
        assert_eq!(chart.max_value().cents(), 36900);
        assert_eq!(chart.bar_title(), "Expenses per service (ICMS: 18%)");
    }

    #[test]
    fn test_pie_slices_sum_to_hundred() {
        let slices = sample_chart().pie_slices();

        assert_eq!(slices.len(), 4);
        assert_eq!(slices[0].label, "Energy");
        assert_eq!(slices[2].label, "Energy - with ICMS");
        assert!(slices[3].with_tax);

        let total: f64 = slices.iter().map(|s| s.share).sum();
        assert!((total - 100.0).abs() < 1e-9);
        // 369 / (100 + 50 + 369 + 184.5)
        assert!((slices[2].share - 369.0 / 703.5 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_and_zero_slices() {
        let mut chart = sample_chart();
        chart.original = vec![Money::from_cents(-100), Money::zero()];
        chart.with_tax = vec![Money::zero(), Money::zero()];
        assert!(chart.pie_slices().iter().all(|s| s.share == 0.0));
        assert_eq!(chart.max_value(), Money::zero());
    }

    #[test]
    fn test_text_bar_chart() {
        let output = format_bar_chart(&sample_chart(), 20);
        assert!(output.starts_with("Expenses per service (ICMS: 18%)"));
        assert!(output.contains("R$100.00"));
        assert!(output.contains("R$369.00"));
        // the largest value fills its whole bar
        assert!(output.contains(&"█".repeat(20)));
    }

    #[test]
    fn test_text_pie_chart() {
        let output = format_pie_chart(&sample_chart(), 10);
        assert!(output.contains("Expense distribution (ICMS: 18%)"));
        assert!(output.contains("Water - with ICMS"));
        assert!(output.contains("52.5%"));
    }

    #[test]
    fn test_network_drawing_marks_every_node() {
        let matrix = AdjacencyMatrix::from_rows(&[
            vec![0, 1, 0],
            vec![0, 0, 1],
            vec![0, 0, 0],
        ])
        .unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let analysis = NetworkAnalyzer::new(3).analyze(matrix, &mut rng).unwrap();
        let output = format_network_drawing(&analysis, 30, 12);

        assert!(output.contains("3 nodes, 2 links"));
        assert!(output.contains("Links: 0-1, 1-2"));
        let grid: String = output.lines().skip(2).take(12).collect();
        for node in ['0', '1', '2'] {
            assert!(grid.contains(node), "node {} not drawn", node);
        }
    }

    #[test]
    fn test_network_drawing_without_links() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let analysis = NetworkAnalyzer::new(2)
            .analyze(AdjacencyMatrix::zero(2), &mut rng)
            .unwrap();
        assert!(format_network_drawing(&analysis, 10, 5).contains("Links: none"));
    }
}
