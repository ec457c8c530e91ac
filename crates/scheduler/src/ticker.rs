//! Repeating interval with skip-missed-tick semantics.

use chrono::{DateTime, Duration, Utc};

/// A repeating timer driven by explicit polling.
///
/// `poll(now)` fires at most once per call; if the owner fell behind by
/// several periods, the missed ticks are skipped and the schedule realigns
/// past `now`. That matches what periodic recomputation wants: the work
/// derives from absolute time, so catching up tick-by-tick would only
/// repeat the same result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker {
    period: Duration,
    next_due: DateTime<Utc>,
    active: bool,
}

impl Ticker {
    /// Create a ticker whose first fire is one period after `now`.
    ///
    /// Periods shorter than a millisecond are clamped up to one.
    pub fn new(period: Duration, now: DateTime<Utc>) -> Self {
        let period = period.max(Duration::milliseconds(1));
        Self {
            period,
            next_due: now + period,
            active: true,
        }
    }

    /// Fire if a period boundary has passed. Returns whether it fired.
    pub fn poll(&mut self, now: DateTime<Utc>) -> bool {
        if !self.active || now < self.next_due {
            return false;
        }

        // Skip missed periods: realign strictly past `now`.
        let behind = now - self.next_due;
        let periods = behind.num_milliseconds() / self.period.num_milliseconds() + 1;
        self.next_due += self.period * (periods as i32);

        true
    }

    /// Stop the ticker. A cancelled ticker never fires again.
    pub fn cancel(&mut self) {
        if self.active {
            self.active = false;
            tracing::debug!("ticker cancelled");
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// When the ticker will next fire (meaningless once cancelled).
    pub fn next_due(&self) -> DateTime<Utc> {
        self.next_due
    }
}
