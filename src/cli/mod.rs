//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the menu, services and
//! network analysis.

pub mod config;
pub mod network;
pub mod session;
pub mod tax;

pub use config::handle_config_command;
pub use network::{handle_network_command, NetworkArgs};
pub use session::run_menu;
pub use tax::{handle_explain_command, handle_rate_command};
