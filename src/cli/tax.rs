//! Rate and explanation CLI commands

use crate::config::Settings;
use crate::display::{format_rate_line, format_tax_explanations};
use crate::error::TaxnetResult;

use super::session::fetch_rate;

/// Handle the `rate` command
pub fn handle_rate_command(settings: &Settings) -> TaxnetResult<()> {
    let rate = fetch_rate(settings)?;
    println!("{}", format_rate_line(rate));
    Ok(())
}

/// Handle the `explain` command
pub fn handle_explain_command(settings: &Settings) -> TaxnetResult<()> {
    let rate = fetch_rate(settings)?;
    print!("{}", format_tax_explanations(rate));
    Ok(())
}
