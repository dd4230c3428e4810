// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Time utilities for certificate validity checking.
//!
//! Timestamps are whole seconds relative to the Unix epoch and may be
//! negative, so certificates can be built with windows far in the past.
//! Calendar conversion (for display and for building fixtures from dates)
//! goes through `der::DateTime`, which covers 1970 through 9999.
//!
//! The clock is read through the [`TimeSource`] trait. Library code never
//! calls the system clock directly except via [`SystemTimeSource`].

use core::fmt;
use core::time::Duration;

use der::DateTime;

/// Seconds in one day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// A point in time, in seconds since 1970-01-01T00:00:00Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    unix_secs: i64,
}

impl Time {
    /// 1970-01-01T00:00:00Z
    pub const UNIX_EPOCH: Time = Time { unix_secs: 0 };

    /// Creates a Time from seconds since the Unix epoch.
    pub const fn from_unix_secs(unix_secs: i64) -> Self {
        Time { unix_secs }
    }

    /// Seconds since the Unix epoch.
    pub const fn unix_secs(&self) -> i64 {
        self.unix_secs
    }

    /// Creates a Time from a `der::DateTime`.
    pub fn from_date_time(date_time: &DateTime) -> Self {
        let secs = date_time.unix_duration().as_secs();
        Time::from_unix_secs(i64::try_from(secs).unwrap_or(i64::MAX))
    }

    /// Creates a Time at midnight UTC of the given calendar date.
    ///
    /// Returns `None` for dates `der::DateTime` cannot represent.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Option<Self> {
        DateTime::new(year, month, day, 0, 0, 0)
            .ok()
            .map(|dt| Self::from_date_time(&dt))
    }

    /// Returns the calendar representation, if this time is within the
    /// range `der::DateTime` supports.
    pub fn to_date_time(&self) -> Option<DateTime> {
        let secs = u64::try_from(self.unix_secs).ok()?;
        DateTime::from_unix_duration(Duration::from_secs(secs)).ok()
    }

    /// Returns this time shifted forward by `days`, saturating at the bounds.
    pub fn add_days(self, days: i64) -> Self {
        Time::from_unix_secs(
            self.unix_secs
                .saturating_add(days.saturating_mul(SECONDS_PER_DAY)),
        )
    }

    /// Returns this time shifted back by `days`, saturating at the bounds.
    pub fn sub_days(self, days: i64) -> Self {
        Time::from_unix_secs(
            self.unix_secs
                .saturating_sub(days.saturating_mul(SECONDS_PER_DAY)),
        )
    }

    /// Returns this time shifted by `secs` seconds (negative moves back).
    pub fn add_secs(self, secs: i64) -> Self {
        Time::from_unix_secs(self.unix_secs.saturating_add(secs))
    }

    /// Checks if this time is before another time.
    pub fn is_before(&self, other: &Time) -> bool {
        self.unix_secs < other.unix_secs
    }

    /// Checks if this time is after another time.
    pub fn is_after(&self, other: &Time) -> bool {
        self.unix_secs > other.unix_secs
    }

    /// Formats the calendar date as `YYYY-MM-DD`.
    ///
    /// Times outside the calendar range fall back to `@<unix seconds>`.
    pub fn date_string(&self) -> alloc::string::String {
        match self.to_date_time() {
            Some(dt) => alloc::format!("{:04}-{:02}-{:02}", dt.year(), dt.month(), dt.day()),
            None => alloc::format!("@{}", self.unix_secs),
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_date_time() {
            Some(dt) => write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                dt.year(),
                dt.month(),
                dt.day(),
                dt.hour(),
                dt.minutes(),
                dt.seconds()
            ),
            None => write!(f, "@{}", self.unix_secs),
        }
    }
}

/// Certificate validity period.
///
/// Both bounds are inclusive: a certificate is valid at `now` when `now` is
/// neither before `not_before` nor after `not_after`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validity {
    /// The time before which the certificate is not valid.
    pub not_before: Time,
    /// The time after which the certificate is not valid.
    pub not_after: Time,
}

impl Validity {
    /// Creates a new Validity period.
    ///
    /// An inverted window (`not_after` before `not_before`) is accepted as
    /// given; such a certificate is never valid.
    pub const fn new(not_before: Time, not_after: Time) -> Self {
        Validity {
            not_before,
            not_after,
        }
    }

    /// Creates a window starting at `start` and lasting `days` days.
    pub fn starting_at(start: Time, days: i64) -> Self {
        Validity::new(start, start.add_days(days))
    }

    /// Checks if the certificate is valid at the given time.
    pub fn is_valid_at(&self, check_time: &Time) -> bool {
        !check_time.is_before(&self.not_before) && !check_time.is_after(&self.not_after)
    }

    /// Checks if the validity period is well-formed.
    pub fn is_well_formed(&self) -> bool {
        !self.not_after.is_before(&self.not_before)
    }
}

// ============================================================================
// Time sources
// ============================================================================

/// A source of the current time.
///
/// Validation reads `now` once per call through this trait, so tests and
/// fixtures can pin the clock with [`FixedTimeSource`].
pub trait TimeSource {
    /// Get the current time from this source.
    fn now(&self) -> Time;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Time {
        (**self).now()
    }
}

/// Reads the operating system clock.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

#[cfg(feature = "std")]
impl TimeSource for SystemTimeSource {
    fn now(&self) -> Time {
        current_time()
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimeSource {
    time: Time,
}

impl FixedTimeSource {
    /// Create a source that always reports `time`.
    pub const fn new(time: Time) -> Self {
        Self { time }
    }

    /// Create a source from seconds since the Unix epoch.
    pub const fn from_unix_secs(secs: i64) -> Self {
        Self::new(Time::from_unix_secs(secs))
    }

    /// The pinned instant.
    pub fn timestamp(&self) -> Time {
        self.time
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> Time {
        self.time
    }
}

/// Gets current time from the system clock.
///
/// A clock set before 1970 yields a negative timestamp rather than an error.
#[cfg(feature = "std")]
pub fn current_time() -> Time {
    match std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
        Ok(elapsed) => Time::from_unix_secs(i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX)),
        Err(err) => {
            let behind = i64::try_from(err.duration().as_secs()).unwrap_or(i64::MAX);
            Time::from_unix_secs(-behind)
        }
    }
}
