//! Analytics backend HTTP client.

mod client;
mod dto;

pub use client::{AnalyticsClient, DEFAULT_BASE_URL};
