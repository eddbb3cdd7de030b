use std::time::Duration;

/// Trailing-edge debounce over a caller-supplied monotonic clock.
///
/// Every `trigger` pushes the deadline out to `now + delay`; the work is due
/// only once the trigger stream has been quiet for a full `delay`.
#[derive(Clone, Debug)]
pub struct TrailingDebounce {
    delay: Duration,
    deadline: Option<Duration>,
}

impl TrailingDebounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn trigger(&mut self, now: Duration) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns true exactly once per quiet period, clearing the deadline.
    pub fn fire_if_due(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
