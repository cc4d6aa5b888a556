//! taxnet - household expense calculator and network analysis demo
//!
//! This library provides the core functionality behind the `taxnet` binary:
//! a tax-adjusted monthly expense calculator with bar and pie charts, and a
//! random communication network whose adjacency matrix is analysed (degrees,
//! LU factorization) and drawn with a spring layout.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, expenses and tax rates
//! - `services`: Expense calculation and the ICMS rate provider
//! - `network`: Adjacency matrices, LU decomposition and graph layout
//! - `display`: Text formatting for reports, tables and charts
//! - `presenter`: Chart presentation backends
//! - `tui`: Full-screen chart screens
//! - `menu`: The interactive console menu
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust
//! use taxnet::models::{ExpenseEntry, Money, TaxRate, TaxRates};
//! use taxnet::services::ExpenseCalculator;
//!
//! let expenses = vec![ExpenseEntry::new("Energy", Money::from_cents(10000))];
//! let taxes: TaxRates = vec![TaxRate::new("ICMS", 18.0)].into_iter().collect();
//!
//! let report = ExpenseCalculator::calculate(&expenses, 2, &taxes);
//! assert_eq!(report.total_period(), Money::from_cents(23600));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod menu;
pub mod models;
pub mod network;
pub mod presenter;
pub mod services;
pub mod tui;

pub use error::TaxnetError;
