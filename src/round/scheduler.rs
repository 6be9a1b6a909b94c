use itertools::Itertools;
use std::time::Duration;

use crate::types::Side;

use super::RoundConfig;

/// Decides when each snake steps. Each snake has its own deadline, after its first tick
/// the deadline moves forward one interval at a time. Nothing here reads a clock, the
/// caller says how much time passed.
///
/// A snake steps at most once per [Scheduler::advance]. If it fell a whole interval or more
/// behind, its next deadline is one interval from now instead of in the past.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduler {
    interval: Duration,
    now: Duration,
    next_due: [Duration; 2],
}

impl Scheduler {
    /// with a zero `interval` both sides fire on every advance
    pub fn new(interval: Duration, left_first_tick: Duration, right_first_tick: Duration) -> Self {
        Scheduler {
            interval,
            now: Duration::ZERO,
            next_due: [left_first_tick, right_first_tick],
        }
    }

    #[allow(missing_docs)]
    pub fn from_config(config: &RoundConfig) -> Self {
        Self::new(
            config.update_interval(),
            config.first_tick(Side::Left),
            config.first_tick(Side::Right),
        )
    }

    /// time since the round started
    pub fn now(&self) -> Duration {
        self.now
    }

    /// when this side will next step
    pub fn next_due(&self, side: Side) -> Duration {
        self.next_due[side.as_index()]
    }

    /// moves time forward and returns the sides that came due, earliest deadline first
    /// and left on a tie
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Side> {
        self.now = self.now.saturating_add(elapsed);
        let mut due = Side::all()
            .iter()
            .copied()
            .filter(|side| self.next_due(*side) <= self.now)
            .collect_vec();
        due.sort_by_key(|side| self.next_due(*side));

        for side in due.iter() {
            let mut next = self.next_due(*side).saturating_add(self.interval);
            if next <= self.now {
                next = self.now.saturating_add(self.interval);
            }
            self.next_due[side.as_index()] = next;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_left_runs_at_half_interval_offset() {
        let mut s = Scheduler::from_config(&RoundConfig::default());
        assert_eq!(s.advance(ms(99)), vec![]);
        assert_eq!(s.advance(ms(1)), vec![Side::Left]);
        assert_eq!(s.advance(ms(100)), vec![Side::Right]);
        assert_eq!(s.advance(ms(100)), vec![Side::Left]);
        assert_eq!(s.advance(ms(100)), vec![Side::Right]);
        assert_eq!(s.now(), ms(400));
        assert_eq!(s.next_due(Side::Left), ms(500));
        assert_eq!(s.next_due(Side::Right), ms(600));
    }

    #[test]
    fn test_each_side_fires_once_per_advance() {
        let mut s = Scheduler::new(ms(200), ms(100), ms(200));
        assert_eq!(s.advance(ms(650)), vec![Side::Left, Side::Right]);
        // both fell behind, so the next deadlines are one interval from now
        assert_eq!(s.next_due(Side::Left), ms(850));
        assert_eq!(s.next_due(Side::Right), ms(850));
        assert_eq!(s.advance(Duration::from_secs(3600)), vec![Side::Left, Side::Right]);
        assert_eq!(s.advance(ms(199)), vec![]);
    }

    #[test]
    fn test_late_frames_keep_the_cadence() {
        let mut s = Scheduler::new(ms(200), ms(100), ms(200));
        let mut fired = vec![];
        for _ in 0..40 {
            for side in s.advance(ms(16)) {
                fired.push((side, s.now()));
            }
        }
        // frames land at multiples of 16ms, each tick fires on the first frame past its deadline
        assert_eq!(
            fired,
            vec![
                (Side::Left, ms(112)),
                (Side::Right, ms(208)),
                (Side::Left, ms(304)),
                (Side::Right, ms(400)),
                (Side::Left, ms(512)),
                (Side::Right, ms(608)),
            ]
        );
    }

    #[test]
    fn test_left_first_on_a_tie() {
        let mut s = Scheduler::new(ms(50), ms(50), ms(50));
        assert_eq!(s.advance(ms(50)), vec![Side::Left, Side::Right]);
        assert_eq!(s.advance(ms(100)), vec![Side::Left, Side::Right]);
    }

    #[test]
    fn test_right_can_come_first() {
        let mut s = Scheduler::new(ms(100), ms(90), ms(30));
        assert_eq!(s.advance(ms(100)), vec![Side::Right, Side::Left]);
    }

    #[test]
    fn test_zero_interval_fires_every_advance() {
        let mut s = Scheduler::new(Duration::ZERO, Duration::ZERO, Duration::ZERO);
        for _ in 0..3 {
            assert_eq!(s.advance(Duration::ZERO), vec![Side::Left, Side::Right]);
        }
    }

    #[test]
    fn test_time_saturates_instead_of_overflowing() {
        let mut s = Scheduler::new(ms(200), ms(100), ms(200));
        s.advance(Duration::MAX);
        assert_eq!(s.now(), Duration::MAX);
        assert_eq!(s.next_due(Side::Left), Duration::MAX);
        assert_eq!(s.advance(Duration::MAX), vec![Side::Left, Side::Right]);
    }
}
