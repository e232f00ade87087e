//! Broken-down local time as the face consumes it.
//!
//! The face never reads a clock itself: the host converts whatever time source
//! it has into a [`WallClock`] and hands it to every repaint.

use core::fmt;

/// Day of the week, Sunday first.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Weekday(u8);

impl Weekday {
    const ABBREVIATIONS: [&'static str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

    pub const SUNDAY: Self = Self(0);

    /// Weekday from days since Sunday, wrapping past Saturday.
    pub const fn from_days_from_sunday(days: u32) -> Self { Self((days % 7) as u8) }

    /// Days since Sunday, `0..7`.
    pub const fn days_from_sunday(self) -> u32 { self.0 as u32 }

    /// Three-letter English abbreviation.
    pub const fn abbrev(self) -> &'static str { Self::ABBREVIATIONS[self.0 as usize] }
}

impl fmt::Display for Weekday {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// Local time broken into the fields the face draws.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WallClock {
    /// `0..24`
    pub hour: u32,
    /// `0..60`
    pub minute: u32,
    /// `1..=31`
    pub day_of_month: u32,
    pub weekday: Weekday,
}

impl WallClock {
    /// Build from fields, wrapping hour and minute into range.
    pub const fn new(
        hour: u32,
        minute: u32,
        day_of_month: u32,
        weekday: Weekday,
    ) -> Self {
        Self {
            hour: hour % 24,
            minute: minute % 60,
            day_of_month,
            weekday,
        }
    }

    /// Debug clock that sweeps every field once a minute, driven by the
    /// current second, so all hand angles and calendar labels can be checked
    /// by eye.
    pub const fn fast_forward(second: u32) -> Self {
        let s = second % 60;
        Self {
            hour: s % 24,
            minute: s,
            day_of_month: s % 31 + 1,
            weekday: Weekday::from_days_from_sunday(s % 7),
        }
    }
}

impl fmt::Display for WallClock {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} {:>2} {:02}:{:02}", self.weekday, self.day_of_month, self.hour, self.minute)
    }
}
