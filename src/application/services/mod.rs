//! Dashboard services.

mod ai_query_bridge;
mod dashboard_loader;
mod realtime_feed;
mod theme_session;

pub use ai_query_bridge::AiQueryBridge;
pub use dashboard_loader::DashboardLoader;
pub use realtime_feed::RealtimeFeed;
pub use theme_session::ThemeSession;
