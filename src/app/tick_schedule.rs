//! One-shot tick scheduling, re-armed after every tick.
//!
//! Pure and I/O-free: the loop asks for the next deadline and sleeps until
//! it. Each tick is scheduled relative to the moment the previous one ran, so
//! ticks never overlap and drift is allowed.

use std::time::{Duration, Instant};

use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSchedule {
    interval: Duration,
    next_at: Option<Instant>,
}

impl TickSchedule {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_at: None,
        }
    }

    /// Schedules the next tick no sooner than `interval` after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.next_at = Some(now + self.interval);
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.next_at.is_some_and(|at| at <= now)
    }

    pub fn next_at(&self) -> Option<Instant> {
        self.next_at
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Earliest moment the loop has to wake up: the next tick or the expiry of
/// the status message, whichever comes first. Never earlier than `now`.
pub fn next_deadline(state: &AppState, now: Instant) -> Option<Instant> {
    min_instant(state.schedule.next_at(), state.messages.expires_at()).map(|at| at.max(now))
}

fn min_instant(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    const INTERVAL: Duration = Duration::from_millis(100);

    mod schedule_tests {
        use super::*;

        #[test]
        fn unarmed_schedule_is_never_due() {
            let schedule = TickSchedule::new(INTERVAL);

            assert!(schedule.next_at().is_none());
            assert!(!schedule.is_due(Instant::now()));
        }

        #[test]
        fn arm_schedules_one_interval_ahead() {
            let now = Instant::now();
            let mut schedule = TickSchedule::new(INTERVAL);

            schedule.arm(now);

            assert_eq!(schedule.next_at(), Some(now + INTERVAL));
            assert!(!schedule.is_due(now));
            assert!(schedule.is_due(now + INTERVAL));
        }

        #[test]
        fn rearm_is_relative_to_latest_tick() {
            let now = Instant::now();
            let mut schedule = TickSchedule::new(INTERVAL);
            schedule.arm(now);

            let late = now + Duration::from_millis(130);
            schedule.arm(late);

            assert_eq!(schedule.next_at(), Some(late + INTERVAL));
        }
    }

    mod next_deadline_tests {
        use super::*;

        fn create_test_state(now: Instant) -> AppState {
            AppState::new(&Settings::default(), now).unwrap()
        }

        #[test]
        fn fresh_state_waits_for_first_tick() {
            let now = Instant::now();
            let state = create_test_state(now);

            assert_eq!(next_deadline(&state, now), Some(now + INTERVAL));
        }

        #[test]
        fn earlier_message_expiry_wins() {
            let now = Instant::now();
            let mut state = create_test_state(now);
            state.messages.set_info_at("hi".to_string(), now - Duration::from_millis(950));

            assert_eq!(
                next_deadline(&state, now),
                Some(now + Duration::from_millis(50))
            );
        }

        #[test]
        fn later_message_expiry_loses_to_tick() {
            let now = Instant::now();
            let mut state = create_test_state(now);
            state.messages.set_error_at("boom".to_string(), now);

            assert_eq!(next_deadline(&state, now), Some(now + INTERVAL));
        }

        #[test]
        fn overdue_tick_is_clamped_to_now() {
            let now = Instant::now();
            let state = create_test_state(now);
            let later = now + Duration::from_secs(1);

            assert_eq!(next_deadline(&state, later), Some(later));
        }
    }

    mod min_instant_tests {
        use super::*;

        #[test]
        fn both_none_returns_none() {
            assert!(min_instant(None, None).is_none());
        }

        #[test]
        fn one_side_returns_that_side() {
            let now = Instant::now();
            assert_eq!(min_instant(Some(now), None), Some(now));
            assert_eq!(min_instant(None, Some(now)), Some(now));
        }

        #[test]
        fn both_some_returns_earlier() {
            let now = Instant::now();
            let later = now + Duration::from_secs(1);

            assert_eq!(min_instant(Some(now), Some(later)), Some(now));
            assert_eq!(min_instant(Some(later), Some(now)), Some(now));
        }
    }
}
