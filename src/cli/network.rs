//! Network CLI command
//!
//! Runs the communication network analysis once, outside the menu.

use std::io::{self, Write};

use clap::Args;

use crate::config::Settings;
use crate::display::format_network_analysis;
use crate::error::{TaxnetError, TaxnetResult};
use crate::network::NetworkAnalyzer;

use super::session::{select_presenter, session_rng};

/// Arguments of the `network` command
#[derive(Args, Debug, Clone, Default)]
pub struct NetworkArgs {
    /// Number of nodes (defaults to the configured size)
    #[arg(short, long)]
    pub nodes: Option<usize>,
    /// Seed for a reproducible matrix and layout
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Node count and seed after applying the settings
pub fn resolve_network_args(settings: &Settings, args: &NetworkArgs) -> TaxnetResult<(usize, Option<u64>)> {
    let nodes = args.nodes.unwrap_or(settings.network_nodes);
    if nodes == 0 {
        return Err(TaxnetError::Validation(
            "a network needs at least one node".into(),
        ));
    }
    Ok((nodes, args.seed.or(settings.network_seed)))
}

/// Handle the `network` command
pub fn handle_network_command(settings: &Settings, args: NetworkArgs, force_text: bool) -> TaxnetResult<()> {
    let (nodes, seed) = resolve_network_args(settings, &args)?;
    let mut rng = session_rng(seed);
    let analysis = NetworkAnalyzer::new(nodes).run(&mut rng)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", format_network_analysis(&analysis))?;

    let mut presenter = select_presenter(settings.chart_mode, force_text);
    presenter.show_network(&mut out, &analysis)?;
    out.flush()?;
    Ok(())
}
