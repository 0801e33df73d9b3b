/// Source of the local wall-clock hour.
pub trait ClockPort: Send + Sync {
    /// Current local hour in `0..24`.
    fn local_hour(&self) -> u32;
}
