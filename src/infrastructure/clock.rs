//! Wall clock.

use chrono::{Local, Timelike};

use crate::domain::ports::ClockPort;

/// Reads the hour from the system local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn local_hour(&self) -> u32 {
        Local::now().hour()
    }
}
