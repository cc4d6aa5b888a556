//! Config CLI command
//!
//! Shows where settings live and what they currently are; `--init` writes
//! the settings file so it can be edited.

use crate::config::{Settings, TaxnetPaths};
use crate::display::report::double_separator;
use crate::error::TaxnetResult;

/// Handle the `config` command
pub fn handle_config_command(paths: &TaxnetPaths, settings: &Settings, init: bool) -> TaxnetResult<()> {
    if init {
        settings.save(paths)?;
        println!("Wrote settings to {}", paths.settings_file().display());
        println!();
    }
    print!("{}", format_config(paths, settings));
    Ok(())
}

/// Paths and settings as shown by `taxnet config`
pub fn format_config(paths: &TaxnetPaths, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str("taxnet configuration\n");
    output.push_str(&format!("{}\n", double_separator(20)));
    output.push_str(&format!("Config directory: {}\n", paths.base_dir().display()));
    output.push_str(&format!(
        "Settings file:    {}{}\n",
        paths.settings_file().display(),
        if paths.is_initialized() { "" } else { " (not created)" }
    ));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Currency symbol:     {}\n", settings.currency_symbol));
    output.push_str(&format!("  Simulated ICMS rate: {}%\n", settings.simulated_icms_rate));
    output.push_str(&format!("  Network nodes:       {}\n", settings.network_nodes));
    output.push_str(&format!(
        "  Network seed:        {}\n",
        settings
            .network_seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "random".to_string())
    ));
    output.push_str(&format!("  Chart mode:          {:?}\n", settings.chart_mode));
    output
}
