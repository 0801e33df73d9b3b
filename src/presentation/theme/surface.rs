use parking_lot::RwLock;
use tracing::debug;

use super::palette::Palette;
use crate::domain::ports::ThemeSurface;

/// Theme surface holding the palette the terminal views draw with.
#[derive(Debug, Default)]
pub struct PaletteSurface {
    palette: RwLock<Palette>,
}

impl PaletteSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        *self.palette.read()
    }
}

impl ThemeSurface for PaletteSurface {
    fn set_theme(&self, name: &str) {
        debug!(theme = name, "Restyling terminal palette");
        *self.palette.write() = Palette::for_name(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Theme;

    #[test]
    fn test_set_theme_swaps_palette() {
        let surface = PaletteSurface::new();
        assert_eq!(surface.palette(), Palette::for_theme(Theme::Light));

        surface.set_theme("gold");
        assert_eq!(surface.palette(), Palette::for_theme(Theme::Gold));

        surface.set_theme("sepia");
        assert_eq!(surface.palette(), Palette::for_theme(Theme::Light));
    }
}
