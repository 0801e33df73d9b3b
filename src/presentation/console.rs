//! Plain stdout views for the command-line subcommands.

use std::io::{self, Write};

use crate::domain::entities::{RealtimeMessage, SlotId};
use crate::domain::ports::{RealtimeRenderer, SlotSink};

/// Slot printing `name: text` lines to stdout.
pub struct PrintSlot {
    slot: SlotId,
}

impl PrintSlot {
    /// Creates a sink labelled with the slot name.
    #[must_use]
    pub const fn new(slot: SlotId) -> Self {
        Self { slot }
    }
}

impl SlotSink for PrintSlot {
    fn write_text(&self, text: &str) {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}: {text}", self.slot);
    }
}

/// Renderer printing each realtime message as one JSON line.
#[derive(Debug, Default)]
pub struct JsonLineRenderer;

impl RealtimeRenderer for JsonLineRenderer {
    fn render(&self, message: &RealtimeMessage) {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}", message.payload());
    }
}
