//! Event loop for the mobile KPI screen.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use tracing::{debug, info, warn};

use super::mobile_screen::MobileKpiScreen;
use crate::application::ThemeSession;
use crate::domain::ports::KpiPort;
use crate::presentation::theme::PaletteSurface;

/// What a key press asks the screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// `q`, `Esc` or `Ctrl-C`.
    Quit,
    /// `t`.
    CycleTheme,
}

impl KeyAction {
    /// Maps a key press; other keys are ignored.
    #[must_use]
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q') | KeyCode::Esc, KeyModifiers::NONE)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Self::Quit),
            (KeyCode::Char('t'), KeyModifiers::NONE) => Some(Self::CycleTheme),
            _ => None,
        }
    }
}

/// Runs the mobile screen until the user quits. `t` cycles the theme.
pub struct MobileApp {
    screen: MobileKpiScreen,
    kpis: Arc<dyn KpiPort>,
    theme: ThemeSession,
    surface: Arc<PaletteSurface>,
}

impl MobileApp {
    /// Creates the app. `theme` must apply to `surface`.
    #[must_use]
    pub fn new(kpis: Arc<dyn KpiPort>, theme: ThemeSession, surface: Arc<PaletteSurface>) -> Self {
        let screen = MobileKpiScreen::new(surface.palette());
        Self {
            screen,
            kpis,
            theme,
            surface,
        }
    }

    /// Draws, then handles input while the mount fetch is in flight and after.
    ///
    /// # Errors
    /// Returns error if the terminal cannot be drawn or read.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let mut terminal_events = EventStream::new();

        let mut fetching = self.screen.begin_mount();
        let kpis = Arc::clone(&self.kpis);
        let fetch = async move { kpis.fetch_kpis().await };
        tokio::pin!(fetch);

        self.draw(terminal)?;

        loop {
            tokio::select! {
                result = &mut fetch, if fetching => {
                    fetching = false;
                    self.screen.finish_mount(result);
                    self.draw(terminal)?;
                }

                event = terminal_events.next() => match event {
                    Some(Ok(Event::Key(key))) => {
                        if self.handle_key(&key) == Some(KeyAction::Quit) {
                            info!("Mobile screen closed");
                            return Ok(());
                        }
                        self.draw(terminal)?;
                    }
                    Some(Ok(Event::Resize(..))) => self.draw(terminal)?,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        debug!("Terminal event stream ended");
                        return Ok(());
                    }
                },
            }
        }
    }

    /// Applies a key press and returns the action it mapped to.
    pub fn handle_key(&mut self, key: &KeyEvent) -> Option<KeyAction> {
        let action = KeyAction::from_key(key)?;

        if action == KeyAction::CycleTheme {
            match self.theme.advance_theme() {
                Ok(theme) => info!(theme = %theme, "Theme advanced"),
                Err(e) => warn!(error = %e, "Theme changed but not saved"),
            }
            self.screen.set_palette(self.surface.palette());
        }

        Some(action)
    }

    fn draw(&self, terminal: &mut DefaultTerminal) -> Result<()> {
        terminal.draw(|frame| frame.render_widget(&self.screen, frame.area()))?;
        Ok(())
    }
}
