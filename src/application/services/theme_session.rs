//! Theme selection and cycling.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::Theme;
use crate::domain::errors::PreferenceError;
use crate::domain::ports::{ClockPort, PreferenceStore, THEME_KEY, ThemeSurface};

/// Active theme for one view, persisted through a preference store.
///
/// The session starts on [`Theme::Light`] at position 0 until
/// [`load_initial_theme`](Self::load_initial_theme) runs.
pub struct ThemeSession {
    store: Arc<dyn PreferenceStore>,
    surface: Arc<dyn ThemeSurface>,
    clock: Arc<dyn ClockPort>,
    current: String,
    position: Option<usize>,
}

impl ThemeSession {
    /// Creates a session. Nothing is applied until a theme is loaded or set.
    #[must_use]
    pub fn new(
        store: Arc<dyn PreferenceStore>,
        surface: Arc<dyn ThemeSurface>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            store,
            surface,
            clock,
            current: Theme::Light.as_str().to_string(),
            position: Some(0),
        }
    }

    /// Name of the active theme, which may be outside the known set.
    #[must_use]
    pub fn current_name(&self) -> &str {
        &self.current
    }

    /// Active theme, `None` if the name is unrecognized.
    #[must_use]
    pub fn current(&self) -> Option<Theme> {
        Theme::from_name(&self.current)
    }

    /// Cycle position of the active theme, `None` if the name is unrecognized.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        self.position
    }

    /// Applies a theme to the surface and persists it.
    ///
    /// Any name is accepted. The surface is updated even if persisting fails.
    ///
    /// # Errors
    /// Returns error if the preference store cannot be written.
    pub fn apply_theme(&mut self, name: &str) -> Result<(), PreferenceError> {
        self.show(name);
        self.store.set(THEME_KEY, name).inspect_err(|e| {
            warn!(theme = name, error = %e, "Failed to persist theme");
        })?;
        debug!(theme = name, "Theme persisted");
        Ok(())
    }

    /// Restores the persisted theme, or picks one from the local hour.
    ///
    /// The hour-based default is shown but not persisted.
    ///
    /// # Errors
    /// Returns error if the preference store cannot be read or written.
    pub fn load_initial_theme(&mut self) -> Result<(), PreferenceError> {
        match self.store.get(THEME_KEY)? {
            Some(saved) if !saved.is_empty() => {
                info!(theme = %saved, "Restoring saved theme");
                self.apply_theme(&saved)
            }
            _ => {
                let hour = self.clock.local_hour();
                let theme = Theme::for_hour(hour);
                info!(theme = %theme, hour, "No saved theme, using time of day");
                self.show(theme.as_str());
                Ok(())
            }
        }
    }

    /// Moves to the next theme in cycle order and persists it.
    ///
    /// An unrecognized active theme advances to the first theme.
    ///
    /// # Errors
    /// Returns error if the preference store cannot be written.
    pub fn advance_theme(&mut self) -> Result<Theme, PreferenceError> {
        let next = self.position.map_or(Theme::at(0), |position| Theme::at(position + 1));
        self.apply_theme(next.as_str())?;
        Ok(next)
    }

    fn show(&mut self, name: &str) {
        self.surface.set_theme(name);
        self.position = Theme::index_of(name);
        if self.position.is_none() {
            warn!(theme = name, "Applying unrecognized theme");
        }
        self.current = name.to_string();
    }
}
