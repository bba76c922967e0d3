use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use derive_more::From;
use std::fmt;
use thiserror::Error as ThisError;

///
/// Timestamp
/// (UTC, nanosecond resolution)
///
/// Written to the store as a fixed-precision RFC-3339 string with nine
/// fractional digits, so lexical order of stored values matches time order.
///

#[derive(Clone, Copy, Debug, Eq, From, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub const EPOCH: Self = Self(DateTime::UNIX_EPOCH);

    #[must_use]
    pub const fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }

    /// Construct from nanoseconds since the unix epoch.
    #[must_use]
    pub fn from_unix_nanos(nanos: i64) -> Self {
        Self(DateTime::from_timestamp_nanos(nanos))
    }

    #[must_use]
    /// Current wall-clock timestamp.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Nanoseconds since the unix epoch, if representable in an `i64`.
    #[must_use]
    pub fn unix_nanos(&self) -> Option<i64> {
        self.0.timestamp_nanos_opt()
    }

    /// Whether the year fits the four digits of the rendered form.
    /// Other years render with a sign and do not parse back.
    #[must_use]
    pub fn has_four_digit_year(&self) -> bool {
        (0..=9999).contains(&self.0.year())
    }

    /// Render as `YYYY-MM-DDTHH:MM:SS.nnnnnnnnnZ`.
    #[must_use]
    pub fn to_rfc3339_nanos(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Nanos, true)
    }

    pub fn parse_rfc3339_nanos(s: &str) -> Result<Self, TimestampParseError> {
        let parsed = DateTime::parse_from_rfc3339(s).map_err(|source| TimestampParseError {
            input: s.to_string(),
            source,
        })?;

        Ok(Self(parsed.with_timezone(&Utc)))
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::EPOCH
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339_nanos())
    }
}

///
/// TimestampParseError
///

#[derive(Debug, ThisError)]
#[error("invalid rfc3339 timestamp '{input}': {source}")]
pub struct TimestampParseError {
    pub input: String,
    #[source]
    pub source: chrono::ParseError,
}
