//! Trailing-edge debouncer
//!
//! Holds at most one pending value. Scheduling again replaces the value and
//! restarts the delay; the value is released by `poll` once the delay has
//! elapsed without a newer `schedule`.

use std::time::{Duration, Instant};

#[derive(Debug)]
struct Pending<T> {
    due: Instant,
    value: T,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replace any pending value and restart the delay from `now`
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            due: now + self.delay,
            value,
        });
    }

    /// Drop the pending value. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Release the pending value if its delay has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.due => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn test_nothing_pending_initially() {
        let mut debouncer: Debouncer<String> = Debouncer::new(DELAY);
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(Instant::now()), None);
        assert_eq!(debouncer.time_until_due(Instant::now()), None);
    }

    #[test]
    fn test_fires_only_after_delay() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule("SBIN", start);

        assert_eq!(debouncer.poll(start + Duration::from_millis(299)), None);
        assert_eq!(debouncer.poll(start + DELAY), Some("SBIN"));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + DELAY * 2), None);
    }

    #[test]
    fn test_reschedule_restarts_delay_and_replaces_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule("SB", start);
        debouncer.schedule("SBI", start + Duration::from_millis(200));

        assert_eq!(debouncer.poll(start + DELAY), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(500)),
            Some("SBI")
        );
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule(1, start);

        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());
        assert_eq!(debouncer.poll(start + DELAY), None);
    }

    #[test]
    fn test_time_until_due() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        debouncer.schedule((), start);

        assert_eq!(
            debouncer.time_until_due(start + Duration::from_millis(100)),
            Some(Duration::from_millis(200))
        );
        assert_eq!(
            debouncer.time_until_due(start + Duration::from_secs(1)),
            Some(Duration::ZERO)
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // Keystrokes closer together than the delay release exactly one value: the last one
        #[test]
        fn prop_burst_releases_last_value_once(gaps in prop::collection::vec(0u64..300, 1..20)) {
            let start = Instant::now();
            let mut debouncer = Debouncer::new(DELAY);
            let mut now = start;
            let mut released = Vec::new();

            for (i, gap) in gaps.iter().enumerate() {
                now += Duration::from_millis(*gap);
                if let Some(v) = debouncer.poll(now) {
                    released.push(v);
                }
                debouncer.schedule(i, now);
            }

            let mut t = now;
            while t <= now + DELAY * 2 {
                if let Some(v) = debouncer.poll(t) {
                    released.push(v);
                }
                t += Duration::from_millis(10);
            }

            prop_assert_eq!(released, vec![gaps.len() - 1]);
        }
    }
}
