use ratatui::style::{Color, Modifier, Style};

use crate::domain::entities::Theme;

/// Colors one theme resolves to in the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub dimmed: Color,
}

// background, foreground, accent, dimmed
const LIGHT: [&str; 4] = ["#f5f5f5", "#1f2933", "#2563eb", "#9aa5b1"];
const DARK: [&str; 4] = ["#111827", "#e5e7eb", "#60a5fa", "#6b7280"];
const NEON: [&str; 4] = ["#0d0221", "#f8f8f2", "#ff2a6d", "#7a04eb"];
const GOLD: [&str; 4] = ["#1c1917", "#fde68a", "#d4af37", "#78716c"];
const EXTRA: [&str; 4] = ["#1e1b4b", "#e0e7ff", "#a78bfa", "#6366f1"];
const MATRIX: [&str; 4] = ["#000000", "#00ff41", "#008f11", "#003b00"];
const NIGHT: [&str; 4] = ["#0b1026", "#9ca3af", "#4b5563", "#374151"];

impl Palette {
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        let [background, foreground, accent, dimmed] = match theme {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
            Theme::Neon => NEON,
            Theme::Gold => GOLD,
            Theme::Extra => EXTRA,
            Theme::Matrix => MATRIX,
            Theme::Night => NIGHT,
        };

        Self {
            background: parse_color(background),
            foreground: parse_color(foreground),
            accent: parse_color(accent),
            dimmed: parse_color(dimmed),
        }
    }

    /// Resolves a theme name; unknown names get the light palette.
    #[must_use]
    pub fn for_name(name: &str) -> Self {
        Self::for_theme(Theme::from_name(name).unwrap_or(Theme::Light))
    }

    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::default().bg(self.background).fg(self.foreground)
    }

    #[must_use]
    pub fn title_style(&self) -> Style {
        self.base_style()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        self.base_style().fg(self.dimmed)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_theme(Theme::Light)
    }
}

fn parse_color(s: &str) -> Color {
    match parse_hex_color(s) {
        Ok((r, g, b)) => Color::Rgb(r, g, b),
        Err(()) => Color::Reset,
    }
}

fn parse_hex_color(s: &str) -> Result<(u8, u8, u8), ()> {
    let s = s.trim_start_matches('#');

    if !s.is_ascii() || s.len() != 6 {
        return Err(());
    }

    let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| ())?;
    let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| ())?;
    let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| ())?;
    Ok((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF0000"), Ok((255, 0, 0)));
        assert_eq!(parse_hex_color("00ff41"), Ok((0, 255, 65)));
        assert_eq!(parse_hex_color("#0f0"), Err(()));
        assert_eq!(parse_color("#zzzzzz"), Color::Reset);
    }

    #[test]
    fn test_every_theme_has_distinct_background() {
        let mut backgrounds: Vec<_> = Theme::ALL
            .iter()
            .map(|theme| format!("{:?}", Palette::for_theme(*theme).background))
            .collect();
        backgrounds.sort();
        backgrounds.dedup();
        assert_eq!(backgrounds.len(), Theme::COUNT);
    }

    #[test]
    fn test_unknown_name_uses_light() {
        assert_eq!(Palette::for_name("sepia"), Palette::for_theme(Theme::Light));
        assert_eq!(
            Palette::for_name("matrix").foreground,
            Color::Rgb(0, 255, 65)
        );
    }
}
