use jiff::{tz::TimeZone, Timestamp};
use thiserror::Error;
use time::{Duration, OffsetDateTime, UtcOffset};

#[derive(Error, Debug)]
pub enum WindowError {
    #[error("unknown timezone {name}: {source}")]
    UnknownZone {
        name: String,
        #[source]
        source: jiff::Error,
    },

    #[error("calendar arithmetic failed: {0}")]
    Calendar(#[from] jiff::Error),

    #[error("timestamp out of range: {0}")]
    Component(#[from] time::error::ComponentRange),

    #[error("{0} is out of range")]
    OutOfRange(&'static str),
}

/// Half-open UTC interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
}

impl TimeWindow {
    pub fn new(start: OffsetDateTime, end: OffsetDateTime) -> Self {
        Self {
            start: start.to_offset(UtcOffset::UTC),
            end: end.to_offset(UtcOffset::UTC),
        }
    }

    pub fn contains(&self, at: OffsetDateTime) -> bool {
        self.start <= at && at < self.end
    }

    /// The local calendar day before `now`'s day in `tz`, as 24 UTC hours
    /// starting at that day's local midnight.
    pub fn yesterday(now: OffsetDateTime, tz: &TimeZone) -> Result<Self, WindowError> {
        let today = Timestamp::from_nanosecond(now.unix_timestamp_nanos())?
            .to_zoned(tz.clone())
            .date();
        let midnight = today.yesterday()?.to_zoned(tz.clone())?;
        let start = OffsetDateTime::from_unix_timestamp_nanos(midnight.timestamp().as_nanosecond())?;
        Ok(Self::new(start, start + Duration::days(1)))
    }

    /// Rolling lookback ending at `now`, no timezone anchoring.
    pub fn trailing(now: OffsetDateTime, lookback: Duration) -> Result<Self, WindowError> {
        let start = now
            .checked_sub(lookback)
            .ok_or(WindowError::OutOfRange("lookback"))?;
        Ok(Self::new(start, now))
    }

    /// `days` worth of history ending `offset` days before `now`.
    pub fn history(now: OffsetDateTime, days: i64, offset: i64) -> Result<Self, WindowError> {
        let total = days
            .checked_add(offset)
            .ok_or(WindowError::OutOfRange("days"))?;
        let start = now
            .checked_sub(checked_days(total, "days")?)
            .ok_or(WindowError::OutOfRange("days"))?;
        let end = now
            .checked_sub(checked_days(offset, "offset")?)
            .ok_or(WindowError::OutOfRange("offset"))?;
        Ok(Self::new(start, end))
    }
}

/// `Duration::days` without the overflow panic.
pub fn checked_days(days: i64, what: &'static str) -> Result<Duration, WindowError> {
    days.checked_mul(86_400)
        .map(Duration::seconds)
        .ok_or(WindowError::OutOfRange(what))
}

pub fn zone(name: &str) -> Result<TimeZone, WindowError> {
    TimeZone::get(name).map_err(|source| WindowError::UnknownZone {
        name: name.to_string(),
        source,
    })
}
