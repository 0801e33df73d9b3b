//! Application layer with the dashboard services.

/// Dashboard services.
pub mod services;
/// View slot binding.
pub mod view;

pub use services::{AiQueryBridge, DashboardLoader, RealtimeFeed, ThemeSession};
pub use view::ViewBinding;
