use std::time::{Duration, Instant};

/// Fires once after input has been quiet for `delay`.
///
/// Callers pass `now` explicitly so the UI loop (and tests) control time.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Record activity, pushing the deadline out.
    pub fn touch(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when the deadline has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
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
    use super::*;

    #[test]
    fn test_fires_once_after_delay() {
        let start = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(400));
        d.touch(start);
        assert!(d.is_pending());
        assert!(!d.fire(start + Duration::from_millis(399)));
        assert!(d.fire(start + Duration::from_millis(400)));
        assert!(!d.fire(start + Duration::from_millis(800)));
        assert!(!d.is_pending());
    }

    #[test]
    fn test_touch_pushes_deadline() {
        let start = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(400));
        d.touch(start);
        d.touch(start + Duration::from_millis(300));
        assert!(!d.fire(start + Duration::from_millis(500)));
        assert!(d.fire(start + Duration::from_millis(700)));
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(10));
        d.touch(start);
        d.cancel();
        assert!(!d.fire(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_idle_never_fires() {
        let mut d = Debouncer::new(Duration::from_millis(10));
        assert!(!d.fire(Instant::now()));
    }
}
