//! Tax rate models
//!
//! Tax rates are plain percentages labelled by name. ICMS and ISS are the two
//! the calculator prompts for; no rate gets special treatment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Taxes the calculator asks about, in prompt order
pub const DEFAULT_TAXES: [&str; 2] = ["ICMS", "ISS"];

/// Parse a percentage such as "18", "18.5", "18,5" or "18%"
pub fn parse_percent(s: &str) -> Result<f64, String> {
    let trimmed = s.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    let number = if !number.contains('.') && number.matches(',').count() == 1 {
        number.replace(',', ".")
    } else {
        number.to_string()
    };

    match number.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format!("'{}' is not a percentage", trimmed)),
    }
}

/// A named tax percentage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRate {
    /// Tax name (e.g. "ICMS")
    pub name: String,
    /// Percentage, e.g. 18.0 for 18%
    pub percent: f64,
}

impl TaxRate {
    pub fn new(name: impl Into<String>, percent: f64) -> Self {
        Self {
            name: name.into(),
            percent,
        }
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}%", self.name, self.percent)
    }
}

/// Ordered collection of tax rates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRates(Vec<TaxRate>);

impl TaxRates {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a rate, keeping entry order
    pub fn push(&mut self, rate: TaxRate) {
        self.0.push(rate);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaxRate> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all percentages
    pub fn combined_percent(&self) -> f64 {
        self.0.iter().map(|r| r.percent).sum()
    }

    /// Sum of all percentages as a fraction (23% -> 0.23)
    pub fn combined_fraction(&self) -> f64 {
        self.combined_percent() / 100.0
    }
}

impl FromIterator<TaxRate> for TaxRates {
    fn from_iter<I: IntoIterator<Item = TaxRate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
