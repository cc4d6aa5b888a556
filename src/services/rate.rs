//! Tax rate lookup
//!
//! The "real-time" ICMS rate comes from a [`TaxRateProvider`]. The only
//! provider shipped returns a configured constant; a live lookup can be
//! plugged in without touching the calculator.

use tracing::info;

use crate::error::{TaxnetError, TaxnetResult};

/// Source of the current ICMS percentage
pub trait TaxRateProvider {
    /// Fetch the current rate as a percentage (18.0 means 18%)
    fn current_rate(&self) -> TaxnetResult<f64>;

    /// Short description of where the rate comes from
    fn source(&self) -> &str;
}

/// Provider that always returns the same simulated rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRateProvider {
    rate: f64,
}

impl FixedRateProvider {
    /// Rate used when nothing else is configured
    pub const DEFAULT_RATE: f64 = 18.0;

    pub fn new(rate: f64) -> Self {
        Self { rate }
    }
}

impl Default for FixedRateProvider {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RATE)
    }
}

impl TaxRateProvider for FixedRateProvider {
    fn current_rate(&self) -> TaxnetResult<f64> {
        if !self.rate.is_finite() {
            return Err(TaxnetError::Validation(format!(
                "simulated rate is not a number: {}",
                self.rate
            )));
        }
        info!(rate = self.rate, source = self.source(), "fetched ICMS rate");
        Ok(self.rate)
    }

    fn source(&self) -> &str {
        "simulated"
    }
}
