//! Time display utilities.
//!
//! Schedules are shown as wall-clock times in a time zone that defaults to
//! the system zone. Tests pass an explicit zone for stable output.

use std::fmt;

use jiff::{tz::TimeZone, SignedDuration, Timestamp};

/// Formats a timestamp as `HH:MM` local time.
pub struct LocalTime<'a> {
    timestamp: &'a Timestamp,
    tz: TimeZone,
}

impl<'a> LocalTime<'a> {
    /// Uses the system time zone.
    pub fn new(timestamp: &'a Timestamp) -> Self {
        Self::in_zone(timestamp, TimeZone::system())
    }

    pub fn in_zone(timestamp: &'a Timestamp, tz: TimeZone) -> Self {
        Self { timestamp, tz }
    }
}

impl fmt::Display for LocalTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.timestamp.to_zoned(self.tz.clone()).strftime("%H:%M")
        )
    }
}

/// Formats a number of minutes as `1h 30m`, `45m` or `2h`.
pub struct Minutes(pub i64);

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hours, minutes) = (self.0 / 60, self.0 % 60);
        match (hours, minutes) {
            (0, m) => write!(f, "{m}m"),
            (h, 0) => write!(f, "{h}h"),
            (h, m) => write!(f, "{h}h {m}m"),
        }
    }
}

/// Formats a remaining duration as `MM:SS`, or `H:MM:SS` past an hour.
pub struct Countdown(pub i64);

impl Countdown {
    pub fn from_duration(duration: SignedDuration) -> Self {
        Self(duration.as_secs().max(0))
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.max(0);
        let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
        if hours > 0 {
            write!(f, "{hours}:{minutes:02}:{seconds:02}")
        } else {
            write!(f, "{minutes:02}:{seconds:02}")
        }
    }
}
