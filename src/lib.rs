//! Analytica - terminal client for the ANALYSTIC.A dashboard backend.
//!
//! This crate provides theme selection with persisted preferences, the
//! indicator loader, the realtime update feed, the insights bridge, and a
//! small terminal KPI screen.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the dashboard services.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing terminal views and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "analytica";
