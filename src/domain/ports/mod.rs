mod clock_port;
mod kpi_port;
mod preference_store_port;
mod realtime_port;
mod view_port;

pub use clock_port::ClockPort;
pub use kpi_port::{InsightsPort, KpiPort};
pub use preference_store_port::{PreferenceStore, THEME_KEY};
pub use realtime_port::{RealtimeEvent, RealtimePort};
pub use view_port::{RealtimeRenderer, SlotSink, ThemeSurface};

#[cfg(test)]
pub mod mocks {
    pub use super::kpi_port::{MockInsightsPort, MockKpiPort};

    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::{ClockPort, RealtimeRenderer, SlotSink, ThemeSurface};
    use crate::domain::entities::RealtimeMessage;

    /// Slot that records every write.
    #[derive(Default, Clone)]
    pub struct RecordingSlot {
        pub writes: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingSlot {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn last(&self) -> Option<String> {
            self.writes.lock().last().cloned()
        }
    }

    impl SlotSink for RecordingSlot {
        fn write_text(&self, text: &str) {
            self.writes.lock().push(text.to_string());
        }
    }

    /// Theme surface that records applied names.
    #[derive(Default, Clone)]
    pub struct RecordingSurface {
        pub applied: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn last(&self) -> Option<String> {
            self.applied.lock().last().cloned()
        }
    }

    impl ThemeSurface for RecordingSurface {
        fn set_theme(&self, name: &str) {
            self.applied.lock().push(name.to_string());
        }
    }

    /// Renderer that records every message.
    #[derive(Default, Clone)]
    pub struct RecordingRenderer {
        pub rendered: Arc<Mutex<Vec<RealtimeMessage>>>,
    }

    impl RecordingRenderer {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl RealtimeRenderer for RecordingRenderer {
        fn render(&self, message: &RealtimeMessage) {
            self.rendered.lock().push(message.clone());
        }
    }

    /// Clock pinned to one hour.
    pub struct FixedClock(pub u32);

    impl ClockPort for FixedClock {
        fn local_hour(&self) -> u32 {
            self.0
        }
    }
}
