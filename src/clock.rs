//! Time sources for the expiration-date window.
//!
//! The expiration check is the only validation that depends on something
//! other than its input. It reads "now" through the [`Clock`] trait so tests
//! and callers can pin it.
//!
//! # Example
//!
//! ```
//! use card_form::clock::{Clock, FixedClock};
//!
//! let clock = FixedClock::from_ymd(2024, 1, 1).unwrap();
//! assert_eq!(clock.now().to_string(), "2024-01-01 00:00:00");
//! ```

use chrono::{NaiveDate, NaiveDateTime};

/// A source of the current local date and time.
pub trait Clock {
    /// Returns the current moment as a naive local timestamp.
    fn now(&self) -> NaiveDateTime;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Reads the wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// A clock frozen at one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    /// Creates a clock that always returns `now`.
    pub const fn new(now: NaiveDateTime) -> Self {
        Self(now)
    }

    /// Creates a clock frozen at local midnight of the given day.
    ///
    /// Returns `None` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(Self)
    }
}

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
