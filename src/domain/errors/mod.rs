//! Domain error types.

mod api_error;
mod channel_error;
mod preference_error;

pub use api_error::ApiError;
pub use channel_error::{ChannelError, ChannelResult};
pub use preference_error::PreferenceError;
