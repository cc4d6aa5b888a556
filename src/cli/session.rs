//! Interactive session setup
//!
//! Picks the chart presenter, seeds the session RNG, fetches the ICMS rate
//! once and hands the console to the menu dispatcher.

use std::io::{self, IsTerminal};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::{ChartMode, Settings};
use crate::display::format_rate_line;
use crate::error::TaxnetResult;
use crate::menu::{MenuDispatcher, Prompter, SessionContext};
use crate::presenter::{ChartPresenter, TextPresenter};
use crate::services::{FixedRateProvider, TaxRateProvider};
use crate::tui::TuiPresenter;

/// Which presenter a session should use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterKind {
    Tui,
    Text,
}

/// Resolve the chart mode against `--text` and the attached terminal
pub fn presenter_kind(mode: ChartMode, force_text: bool, interactive: bool) -> PresenterKind {
    if force_text {
        return PresenterKind::Text;
    }
    match mode {
        ChartMode::Tui => PresenterKind::Tui,
        ChartMode::Text => PresenterKind::Text,
        ChartMode::Auto if interactive => PresenterKind::Tui,
        ChartMode::Auto => PresenterKind::Text,
    }
}

/// Build the presenter for this process
pub fn select_presenter(mode: ChartMode, force_text: bool) -> Box<dyn ChartPresenter> {
    let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();
    let kind = presenter_kind(mode, force_text, interactive);
    debug!(?kind, ?mode, interactive, "selected chart presenter");

    match kind {
        PresenterKind::Tui => Box::new(TuiPresenter::new()),
        PresenterKind::Text => Box::new(TextPresenter::default()),
    }
}

/// RNG for the network demo; a random seed is logged so a run can be repeated
pub fn session_rng(seed: Option<u64>) -> ChaCha8Rng {
    let seed = seed.unwrap_or_else(rand::random);
    debug!(seed, "seeding network generator");
    ChaCha8Rng::seed_from_u64(seed)
}

/// Fetch the ICMS rate from the configured provider
pub fn fetch_rate(settings: &Settings) -> TaxnetResult<f64> {
    FixedRateProvider::new(settings.simulated_icms_rate).current_rate()
}

/// Run the interactive menu on the process console
pub fn run_menu(settings: &Settings, force_text: bool) -> TaxnetResult<()> {
    let rate = fetch_rate(settings)?;
    println!("{}", format_rate_line(rate));

    let mut presenter = select_presenter(settings.chart_mode, force_text);
    let prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
    let context = SessionContext::from_settings(settings, rate);

    let mut dispatcher = MenuDispatcher::new(
        prompter,
        context,
        presenter.as_mut(),
        session_rng(settings.network_seed),
    );
    dispatcher.run()?;

    info!("session finished");
    Ok(())
}
