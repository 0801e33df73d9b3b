//! Binding between logical slots and the sinks a view provides.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::trace;

use crate::domain::entities::SlotId;
use crate::domain::ports::SlotSink;

/// Maps slots to optional sinks. Writing to an unbound slot is a no-op.
#[derive(Clone, Default)]
pub struct ViewBinding {
    slots: HashMap<SlotId, Arc<dyn SlotSink>>,
}

impl ViewBinding {
    /// Creates a binding with no slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a sink to a slot, replacing any previous one.
    #[must_use]
    pub fn bind(mut self, slot: SlotId, sink: Arc<dyn SlotSink>) -> Self {
        self.slots.insert(slot, sink);
        self
    }

    /// Writes text into a slot. Returns `false` when the slot is unbound.
    pub fn write(&self, slot: SlotId, text: &str) -> bool {
        match self.slots.get(&slot) {
            Some(sink) => {
                sink.write_text(text);
                true
            }
            None => {
                trace!(slot = %slot, "Slot not bound, skipping");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::RecordingSlot;

    #[test]
    fn test_write_to_bound_slot() {
        let slot = RecordingSlot::new();
        let view = ViewBinding::new().bind(SlotId::KpiMembers, Arc::new(slot.clone()));

        assert!(view.write(SlotId::KpiMembers, "12"));
        assert_eq!(slot.last().as_deref(), Some("12"));
    }

    #[test]
    fn test_write_to_unbound_slot_is_noop() {
        let view = ViewBinding::new();

        assert!(!view.write(SlotId::AiResponse, "<p>hi</p>"));
    }
}
