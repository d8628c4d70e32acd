//! Quiet-period timer for search input
//!
//! Single-slot deadline: every trigger overwrites the previous one, so a
//! burst of keystrokes yields exactly one firing once the quiet period
//! after the last keystroke has elapsed.

use std::time::{Duration, Instant};

pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Default)]
pub struct Debouncer {
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Arm (or re-arm) the slot; the deadline moves to `now + delay`
    pub fn trigger_at(&mut self, now: Instant) {
        self.deadline = Some(now + DEBOUNCE_DELAY);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns true exactly once per elapsed deadline; firing clears the slot
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Debouncer, DEBOUNCE_DELAY};
    use std::time::{Duration, Instant};

    #[test]
    fn burst_of_triggers_fires_once_after_the_last() {
        let start = Instant::now();
        let mut debouncer = Debouncer::default();

        debouncer.trigger_at(start);
        debouncer.trigger_at(start + Duration::from_millis(50));
        debouncer.trigger_at(start + Duration::from_millis(100));

        // Quiet period counts from the last trigger
        assert!(!debouncer.fire_due(start + Duration::from_millis(250)));
        assert!(debouncer.fire_due(start + Duration::from_millis(100) + DEBOUNCE_DELAY));

        // The slot is consumed
        assert!(!debouncer.fire_due(start + Duration::from_secs(10)));
    }

    #[test]
    fn cancel_clears_the_slot() {
        let start = Instant::now();
        let mut debouncer = Debouncer::default();

        debouncer.trigger_at(start);
        debouncer.cancel();
        assert!(!debouncer.fire_due(start + DEBOUNCE_DELAY));
    }

    #[test]
    fn untriggered_slot_never_fires() {
        let mut debouncer = Debouncer::default();
        assert!(!debouncer.fire_due(Instant::now()));
    }
}
