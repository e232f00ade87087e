//! Local time source and tick detection.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use sea_lines_common::{WallClock, Weekday};

/// Break a local timestamp into the face's clock fields.
pub fn wall_clock<Tz>(
    now: &DateTime<Tz>,
    fast_forward: bool,
) -> WallClock
where
    Tz: TimeZone,
{
    if fast_forward {
        return WallClock::fast_forward(now.second());
    }
    WallClock::new(
        now.hour(),
        now.minute(),
        now.day(),
        Weekday::from_days_from_sunday(now.weekday().num_days_from_sunday()),
    )
}

/// Current local time.
pub fn now() -> DateTime<Local> { Local::now() }

/// Fires once per displayed minute, or once per second when fast-forwarding.
#[derive(Debug)]
pub struct Ticker {
    fast_forward: bool,
    last: Option<i64>,
}

impl Ticker {
    pub const fn new(fast_forward: bool) -> Self {
        Self {
            fast_forward,
            last: None,
        }
    }

    /// Whether `now` falls in a new tick period since the last poll.
    pub fn poll<Tz>(
        &mut self,
        now: &DateTime<Tz>,
    ) -> bool
    where
        Tz: TimeZone,
    {
        let seconds = now.timestamp();
        let period = if self.fast_forward { seconds } else { seconds.div_euclid(60) };
        let changed = self.last != Some(period);
        self.last = Some(period);
        changed
    }
}
