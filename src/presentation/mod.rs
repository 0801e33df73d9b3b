//! Presentation layer with terminal views and event handling.

/// Stdout views.
pub mod console;
/// Theme palettes.
pub mod theme;
/// UI screens.
pub mod ui;

pub use ui::{MobileApp, MobileKpiScreen};
