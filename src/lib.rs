//! ga4-panel - a terminal panel for GA4 page views and active users
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod analytics;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod traits;
pub mod ui;
