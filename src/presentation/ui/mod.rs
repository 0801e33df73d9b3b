//! UI screens.

mod mobile_app;
mod mobile_screen;

pub use mobile_app::{KeyAction, MobileApp};
pub use mobile_screen::{MEMBERS_LABEL, MobileKpiScreen, TITLE};
