//! User settings for taxnet
//!
//! Manages user preferences: currency symbol, the simulated ICMS rate,
//! network demo size and seed, and how charts are presented.

use serde::{Deserialize, Serialize};

use super::paths::TaxnetPaths;
use crate::error::TaxnetError;

/// How charts are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    /// Full-screen charts when stdout is a terminal, text otherwise
    #[default]
    Auto,
    /// Always use the full-screen terminal UI
    Tui,
    /// Always print text charts
    Text,
}

/// User settings for taxnet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Percentage reported by the simulated real-time ICMS lookup
    #[serde(default = "default_icms_rate")]
    pub simulated_icms_rate: f64,

    /// Number of nodes in the generated network
    #[serde(default = "default_network_nodes")]
    pub network_nodes: usize,

    /// Fixed RNG seed for the network demo (random when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_seed: Option<u64>,

    /// Chart presentation preference
    #[serde(default)]
    pub chart_mode: ChartMode,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "R$".to_string()
}

fn default_icms_rate() -> f64 {
    18.0
}

fn default_network_nodes() -> usize {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            simulated_icms_rate: default_icms_rate(),
            network_nodes: default_network_nodes(),
            network_seed: None,
            chart_mode: ChartMode::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &TaxnetPaths) -> Result<Self, TaxnetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TaxnetError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TaxnetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - `config --init` decides when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TaxnetPaths) -> Result<(), TaxnetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TaxnetError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            TaxnetError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Reject values the rest of the program cannot work with
    pub fn validate(&self) -> Result<(), TaxnetError> {
        if !self.simulated_icms_rate.is_finite() {
            return Err(TaxnetError::Config(
                "simulated_icms_rate must be a finite number".into(),
            ));
        }
        if self.network_nodes == 0 {
            return Err(TaxnetError::Config(
                "network_nodes must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "R$");
        assert_eq!(settings.simulated_icms_rate, 18.0);
        assert_eq!(settings.network_nodes, 5);
        assert_eq!(settings.network_seed, None);
        assert_eq!(settings.chart_mode, ChartMode::Auto);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TaxnetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.network_nodes, 5);
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TaxnetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.network_nodes = 8;
        settings.network_seed = Some(42);
        settings.chart_mode = ChartMode::Text;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.network_nodes, 8);
        assert_eq!(loaded.network_seed, Some(42));
        assert_eq!(loaded.chart_mode, ChartMode::Text);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TaxnetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"simulated_icms_rate": 12.5}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.simulated_icms_rate, 12.5);
        assert_eq!(loaded.currency_symbol, "R$");
    }

    #[test]
    fn test_zero_nodes_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TaxnetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"network_nodes": 0}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, TaxnetError::Config(_)));
    }
}
