//! Visual theme cycle.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hour (inclusive) at which the automatic theme switches to dark.
pub const NIGHT_START_HOUR: u32 = 19;
/// Hour (exclusive) until which the automatic theme stays dark.
pub const NIGHT_END_HOUR: u32 = 7;

/// Named visual theme. Declaration order is the cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Default daytime theme.
    Light,
    /// Default night theme.
    Dark,
    /// Neon accent theme.
    Neon,
    /// Gold accent theme.
    Gold,
    /// Extra theme.
    Extra,
    /// Green-on-black theme.
    Matrix,
    /// Low-contrast night theme.
    Night,
}

impl Theme {
    /// All themes in cycle order.
    pub const ALL: [Self; 7] = [
        Self::Light,
        Self::Dark,
        Self::Neon,
        Self::Gold,
        Self::Extra,
        Self::Matrix,
        Self::Night,
    ];

    /// Number of themes in the cycle.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the persisted name of the theme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Neon => "neon",
            Self::Gold => "gold",
            Self::Extra => "extra",
            Self::Matrix => "matrix",
            Self::Night => "night",
        }
    }

    /// Looks up a theme by its exact persisted name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.as_str() == name)
    }

    /// Returns the cycle position of a theme name, `None` if unrecognized.
    #[must_use]
    pub fn index_of(name: &str) -> Option<usize> {
        Self::from_name(name).map(Self::index)
    }

    /// Returns the cycle position.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the theme at a cycle position, wrapping around.
    #[must_use]
    pub const fn at(position: usize) -> Self {
        Self::ALL[position % Self::COUNT]
    }

    /// Returns the successor in cycle order.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::at(self.index() + 1)
    }

    /// Picks the automatic theme for a local hour of day.
    #[must_use]
    pub const fn for_hour(hour: u32) -> Self {
        if hour >= NIGHT_START_HOUR || hour < NIGHT_END_HOUR {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
