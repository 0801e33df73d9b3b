//! Terminal rendering of dashboard themes.

mod palette;
mod surface;

pub use palette::Palette;
pub use surface::PaletteSurface;
