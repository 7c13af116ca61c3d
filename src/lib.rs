//! Stroke Risk - a terminal client for a stroke-risk prediction service
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
