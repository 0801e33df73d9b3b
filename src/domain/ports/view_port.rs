//! Output surfaces the presentation layer provides.

use crate::domain::entities::RealtimeMessage;

/// Writable text slot in a view.
pub trait SlotSink: Send + Sync {
    /// Replaces the slot content.
    fn write_text(&self, text: &str);
}

/// Receives the active theme name, restyling the view.
pub trait ThemeSurface: Send + Sync {
    /// Applies a theme by name. Unknown names must be tolerated.
    fn set_theme(&self, name: &str);
}

/// Rendering hook for realtime messages.
pub trait RealtimeRenderer: Send + Sync {
    /// Renders one message.
    fn render(&self, message: &RealtimeMessage);
}
