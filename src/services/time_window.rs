use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::services::clock::Clock;

/// Decides whether a timestamp is on the pending or elapsed side of "now".
///
/// Both comparisons are inclusive: a candidate exactly equal to the clock
/// reading counts as pending *and* as elapsed. The admin flows have always
/// relied on that double-inclusive boundary, so it is kept as-is rather
/// than picking one side as authoritative.
pub struct TimeWindow {
    clock: Arc<dyn Clock>,
}

impl TimeWindow {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// With `must_be_pending`, true iff `candidate >= now`; otherwise true
    /// iff `candidate <= now`.
    pub fn is_pending(&self, candidate: DateTime<Utc>, must_be_pending: bool) -> bool {
        let now = self.clock.now();

        if must_be_pending {
            candidate >= now
        } else {
            candidate <= now
        }
    }

    pub fn still_pending(&self, candidate: DateTime<Utc>) -> bool {
        self.is_pending(candidate, true)
    }

    pub fn already_elapsed(&self, candidate: DateTime<Utc>) -> bool {
        self.is_pending(candidate, false)
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::clock::MockClock;
    use chrono::{Duration, TimeZone};

    fn window_at(now: DateTime<Utc>) -> TimeWindow {
        let mut clock = MockClock::new();
        clock.expect_now().return_const(now);
        TimeWindow::new(Arc::new(clock))
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn future_candidate_is_pending_not_elapsed() {
        let window = window_at(fixed_now());
        let candidate = fixed_now() + Duration::minutes(5);

        assert!(window.still_pending(candidate));
        assert!(!window.already_elapsed(candidate));
    }

    #[test]
    fn past_candidate_is_elapsed_not_pending() {
        let window = window_at(fixed_now());
        let candidate = fixed_now() - Duration::minutes(5);

        assert!(!window.still_pending(candidate));
        assert!(window.already_elapsed(candidate));
    }

    #[test]
    fn candidate_equal_to_now_satisfies_both_predicates() {
        let window = window_at(fixed_now());

        assert!(window.is_pending(fixed_now(), true));
        assert!(window.is_pending(fixed_now(), false));
    }
}
