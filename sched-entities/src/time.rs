use std::{
    fmt,
    ops::Sub,
};

use time::{format_description::FormatItem, macros::format_description, OffsetDateTime, UtcOffset};

pub use time::Duration;

const DISPLAY_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

/// A point in time with second precision, stored as unix timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self(secs)
    }

    pub const fn as_secs(self) -> i64 {
        self.0
    }

    /// `None` if the result is not representable.
    pub fn checked_add(self, duration: Duration) -> Option<Self> {
        self.0.checked_add(duration.whole_seconds()).map(Self)
    }

    pub fn to_offset_date_time(self) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp(self.0).ok()
    }

    /// Formats the timestamp as local wall clock time of the given offset.
    pub fn format_with_offset(self, offset: UtcOffset) -> String {
        self.to_offset_date_time()
            .and_then(|dt| dt.to_offset(offset).format(DISPLAY_FORMAT).ok())
            .unwrap_or_else(|| self.0.to_string())
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self(from.unix_timestamp())
    }
}

impl From<Timestamp> for i64 {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl From<i64> for Timestamp {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl Sub<Timestamp> for Timestamp {
    type Output = Duration;
    fn sub(self, rhs: Timestamp) -> Self::Output {
        Duration::seconds(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(&self.format_with_offset(UtcOffset::UTC))
    }
}
