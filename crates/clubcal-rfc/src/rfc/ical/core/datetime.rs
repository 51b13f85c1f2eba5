//! iCalendar DATE-TIME and UTC-OFFSET value types (RFC 5545 §3.3.5, §3.3.14).

use std::fmt;

use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;

/// UTC offset representation (e.g., -0500, +0530).
///
/// Stored as total seconds from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcOffset {
    /// Total seconds from UTC (positive = east, negative = west).
    seconds: i32,
}

impl UtcOffset {
    /// Creates a UTC offset from total seconds.
    #[must_use]
    pub const fn from_seconds(seconds: i32) -> Self {
        Self { seconds }
    }

    /// Returns the offset as total seconds from UTC.
    #[must_use]
    pub const fn as_seconds(self) -> i32 {
        self.seconds
    }

    /// UTC offset (zero).
    pub const UTC: Self = Self { seconds: 0 };
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.seconds >= 0 { '+' } else { '-' };
        let abs = self.seconds.abs();
        let hours = abs / 3600;
        let minutes = (abs % 3600) / 60;
        let seconds = abs % 60;
        write!(f, "{sign}{hours:02}{minutes:02}")?;
        if seconds != 0 {
            write!(f, "{seconds:02}")?;
        }
        Ok(())
    }
}

/// Form of DATE-TIME value (RFC 5545 §3.3.5).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTimeForm {
    /// Floating time - same wall-clock time in any timezone.
    ///
    /// Example: `19980118T230000`
    Floating,

    /// UTC time - absolute instant, indicated by 'Z' suffix.
    ///
    /// Example: `19980119T070000Z`
    Utc,

    /// Zoned time - local time with TZID reference.
    ///
    /// Example: `TZID=America/Toronto:19980119T020000`
    Zoned {
        /// The IANA timezone identifier.
        tzid: String,
    },
}

/// DATE-TIME value (RFC 5545 §3.3.5).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTime {
    /// Wall-clock time in the frame given by `form`.
    pub local: NaiveDateTime,
    pub form: DateTimeForm,
}

impl DateTime {
    /// Creates a floating DATE-TIME.
    #[must_use]
    pub const fn floating(local: NaiveDateTime) -> Self {
        Self {
            local,
            form: DateTimeForm::Floating,
        }
    }

    /// Creates a UTC DATE-TIME for an instant.
    #[must_use]
    pub fn utc(instant: chrono::DateTime<Utc>) -> Self {
        Self {
            local: instant.naive_utc(),
            form: DateTimeForm::Utc,
        }
    }

    /// Creates a zoned DATE-TIME by converting an instant to wall-clock time in `tz`.
    #[must_use]
    pub fn zoned(instant: chrono::DateTime<Utc>, tz: Tz) -> Self {
        Self {
            local: instant.with_timezone(&tz).naive_local(),
            form: DateTimeForm::Zoned {
                tzid: tz.name().to_string(),
            },
        }
    }

    /// Returns the TZID for zoned values.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        match &self.form {
            DateTimeForm::Zoned { tzid } => Some(tzid),
            DateTimeForm::Floating | DateTimeForm::Utc => None,
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.local.format("%Y%m%dT%H%M%S"))?;
        if self.form == DateTimeForm::Utc {
            write!(f, "Z")?;
        }
        Ok(())
    }
}
