//! Cancelable one-shot deadlines against a caller-supplied monotonic
//! clock.
//!
//! Wall time never enters the engine: callers pass `now` in milliseconds
//! from whatever clock drives their frames, so tests can advance a
//! virtual clock instead of sleeping. Cancellation is dropping the value.

/// A single armed deadline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneShot {
    deadline_ms: f64,
}

impl OneShot {
    /// Arm at `now + delay`. Negative delays are treated as immediately
    /// due.
    pub fn after(now_ms: f64, delay_ms: f64) -> Self {
        Self { deadline_ms: now_ms + delay_ms.max(0.0) }
    }

    /// True once `now` reaches the deadline.
    pub fn due(self, now_ms: f64) -> bool {
        now_ms >= self.deadline_ms
    }

    /// The armed deadline, for chaining successor timers.
    pub fn deadline_ms(self) -> f64 {
        self.deadline_ms
    }
}
