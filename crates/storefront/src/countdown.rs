//! Sale countdown.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use techstore_core::ValueObject;
use techstore_scheduler::Ticker;

/// Time left until a target instant, broken down for display.
///
/// All components are non-negative; once the target passes, every field
/// clamps to zero rather than going negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeRemaining {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Break down the span from `now` to `target`, clamped at zero.
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let diff = target - now;
        if diff <= Duration::zero() {
            return Self::ZERO;
        }

        Self {
            days: diff.num_days(),
            hours: diff.num_hours() % 24,
            minutes: diff.num_minutes() % 60,
            seconds: diff.num_seconds() % 60,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl ValueObject for TimeRemaining {}

/// Countdown to a sale deadline, recomputed on a one-second cadence.
///
/// Owns its ticker; cancel it when the owning view is torn down so a stale
/// countdown can never keep mutating. The remaining time derives from
/// absolute time, so ticks the owner missed are skipped, not replayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    target: DateTime<Utc>,
    ticker: Ticker,
    remaining: TimeRemaining,
}

impl Countdown {
    /// Create a countdown; the remaining time is computed immediately, then
    /// refreshed once per second via [`Countdown::tick`].
    pub fn new(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self {
            target,
            ticker: Ticker::new(Duration::seconds(1), now),
            remaining: TimeRemaining::until(target, now),
        }
    }

    /// Recompute the remaining time if a second has elapsed. Returns whether
    /// the countdown updated.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if !self.ticker.poll(now) {
            return false;
        }

        self.remaining = TimeRemaining::until(self.target, now);
        true
    }

    pub fn remaining(&self) -> TimeRemaining {
        self.remaining
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// Release the ticker when the owning view goes away.
    pub fn cancel(&mut self) {
        self.ticker.cancel();
    }

    pub fn is_active(&self) -> bool {
        self.ticker.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 29, 12, 0, 0).unwrap()
    }

    #[test]
    fn breakdown_splits_days_hours_minutes_seconds() {
        let target = t0() + Duration::days(2) + Duration::hours(3) + Duration::minutes(4)
            + Duration::seconds(5);

        let remaining = TimeRemaining::until(target, t0());
        assert_eq!(
            remaining,
            TimeRemaining { days: 2, hours: 3, minutes: 4, seconds: 5 }
        );
    }

    #[test]
    fn remaining_clamps_to_zero_at_and_past_the_target() {
        assert_eq!(TimeRemaining::until(t0(), t0()), TimeRemaining::ZERO);
        assert_eq!(
            TimeRemaining::until(t0(), t0() + Duration::hours(1)),
            TimeRemaining::ZERO
        );
    }

    #[test]
    fn tick_updates_once_per_second() {
        let mut countdown = Countdown::new(t0() + Duration::hours(1), t0());
        assert_eq!(countdown.remaining().minutes, 0);

        assert!(!countdown.tick(t0() + Duration::milliseconds(500)));
        assert!(countdown.tick(t0() + Duration::seconds(1)));
        assert_eq!(countdown.remaining().minutes, 59);
        assert_eq!(countdown.remaining().seconds, 59);
    }

    #[test]
    fn missed_ticks_do_not_queue_up() {
        let mut countdown = Countdown::new(t0() + Duration::hours(1), t0());

        // Stall for ten seconds: one update, recomputed from absolute time.
        assert!(countdown.tick(t0() + Duration::seconds(10)));
        assert_eq!(countdown.remaining().seconds, 50);
        assert!(!countdown.tick(t0() + Duration::milliseconds(10_500)));
    }

    #[test]
    fn cancelled_countdown_stops_updating() {
        let mut countdown = Countdown::new(t0() + Duration::hours(1), t0());
        let before = countdown.remaining();

        countdown.cancel();
        assert!(!countdown.tick(t0() + Duration::seconds(30)));
        assert_eq!(countdown.remaining(), before);
        assert!(!countdown.is_active());
    }

    #[test]
    fn countdown_reaches_zero_once_the_sale_ends() {
        let mut countdown = Countdown::new(t0() + Duration::seconds(2), t0());

        countdown.tick(t0() + Duration::seconds(3));
        assert!(countdown.remaining().is_zero());
    }
}
