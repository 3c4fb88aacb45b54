//! Timestamps with explicit precision and offset.

use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};

use chrono::{DateTime, FixedOffset, SecondsFormat};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The finest unit a timestamp was specified to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimestampPrecision {
    /// `2007T`
    Year,
    /// `2007-02T`
    Month,
    /// `2007-02-23`
    Day,
    /// `2007-02-23T12:14Z`
    Minute,
    /// `2007-02-23T12:14:33Z`
    Second,
    /// `2007-02-23T12:14:33.079Z`, with the number of fractional digits.
    ///
    /// `.5` and `.50` are different precisions.
    Fractional(u32),
}

/// A point in time together with the offset and precision it was written with.
///
/// Two timestamps are equal only when they denote the same instant, carry the
/// same offset, and have the same precision. `12:00Z` and `13:00+01:00` are the
/// same instant but different timestamps.
#[derive(Copy, Clone)]
pub struct Timestamp {
    datetime: DateTime<FixedOffset>,
    precision: TimestampPrecision,
}

impl Timestamp {
    /// Creates a timestamp.
    #[must_use]
    pub const fn new(datetime: DateTime<FixedOffset>, precision: TimestampPrecision) -> Self {
        Self {
            datetime,
            precision,
        }
    }

    /// Parses an RFC 3339 string.
    ///
    /// Precision is `Fractional(n)` when the input has `n` fractional second
    /// digits and `Second` otherwise.
    ///
    /// # Errors
    ///
    /// Returns the `chrono` parse error if `s` is not valid RFC 3339.
    pub fn parse_rfc3339(s: &str) -> Result<Self, chrono::ParseError> {
        let datetime = DateTime::parse_from_rfc3339(s)?;
        let precision = match s.split_once('.') {
            Some((_, rest)) => {
                let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
                TimestampPrecision::Fractional(u32::try_from(digits).unwrap_or(u32::MAX))
            }
            None => TimestampPrecision::Second,
        };
        Ok(Self::new(datetime, precision))
    }

    /// Returns the date and time with its offset.
    #[must_use]
    pub const fn datetime(&self) -> &DateTime<FixedOffset> {
        &self.datetime
    }

    /// Returns the precision.
    #[must_use]
    pub const fn precision(&self) -> TimestampPrecision {
        self.precision
    }

    /// Returns the offset from UTC in seconds.
    #[must_use]
    pub fn offset_seconds(&self) -> i32 {
        self.datetime.offset().local_minus_utc()
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.datetime == other.datetime
            && self.offset_seconds() == other.offset_seconds()
            && self.precision == other.precision
    }
}

impl Eq for Timestamp {}

impl Hash for Timestamp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.datetime.timestamp().hash(state);
        self.datetime.timestamp_subsec_nanos().hash(state);
        self.offset_seconds().hash(state);
        self.precision.hash(state);
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({self}, {:?})", self.precision)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dt = &self.datetime;
        match self.precision {
            TimestampPrecision::Year => write!(f, "{}T", dt.format("%Y")),
            TimestampPrecision::Month => write!(f, "{}T", dt.format("%Y-%m")),
            TimestampPrecision::Day => write!(f, "{}", dt.format("%Y-%m-%d")),
            TimestampPrecision::Minute => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M%:z")),
            TimestampPrecision::Second | TimestampPrecision::Fractional(0) => {
                write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
            TimestampPrecision::Fractional(digits) => {
                let nanos = format!("{:09}", dt.timestamp_subsec_nanos());
                let digits = digits as usize;
                let fraction = if digits <= nanos.len() {
                    nanos[..digits].to_string()
                } else {
                    format!("{nanos}{}", "0".repeat(digits - nanos.len()))
                };
                write!(f, "{}.{fraction}", dt.format("%Y-%m-%dT%H:%M:%S"))?;
                if self.offset_seconds() == 0 {
                    f.write_char('Z')
                } else {
                    write!(f, "{}", dt.format("%:z"))
                }
            }
        }
    }
}
