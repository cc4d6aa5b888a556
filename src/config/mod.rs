//! Configuration module for taxnet
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TaxnetPaths;
pub use settings::{ChartMode, Settings};
