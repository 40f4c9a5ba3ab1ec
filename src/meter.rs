//! Service meter (SMU) values
//!
//! Machine operating hours are displayed as decimal text with exactly two
//! fraction digits. Values are stored as whole centihours so repeated
//! ticking never accumulates floating point drift.

use std::fmt;

/// One simulated tick adds a single centihour (0.01 h) to a display value.
pub const TICK_CENTIHOURS: i64 = 1;

/// An SMU reading in whole centihours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SmuValue(i64);

impl SmuValue {
    /// Build a value from whole hours, e.g. a seeded meter of 4250 h.
    pub fn from_whole_hours(hours: i64) -> Self {
        Self(hours.saturating_mul(100))
    }

    /// Build a value from raw centihours.
    pub fn from_centihours(centihours: i64) -> Self {
        Self(centihours)
    }

    /// Parse a displayed reading.
    ///
    /// Accepts an unsigned integer part with an optional fraction of one or
    /// two digits ("120", "120.5", "120.05"). Anything else, including
    /// longer fractions, returns None and the caller skips the display.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (whole, frac) = match text.split_once('.') {
            Some((w, f)) => (w, Some(f)),
            None => (text, None),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let mut centihours = whole.parse::<i64>().ok()?.checked_mul(100)?;

        if let Some(frac) = frac {
            if frac.is_empty() || frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let mut frac_value = frac.parse::<i64>().ok()?;
            if frac.len() == 1 {
                frac_value *= 10;
            }
            centihours = centihours.checked_add(frac_value)?;
        }

        Some(Self(centihours))
    }

    /// Advance by `ticks` simulated intervals.
    pub fn tick(self, ticks: u32) -> Self {
        Self(self.0.saturating_add(TICK_CENTIHOURS * i64::from(ticks)))
    }

    pub fn centihours(self) -> i64 {
        self.0
    }

    pub fn whole_hours(self) -> i64 {
        self.0 / 100
    }
}

impl fmt::Display for SmuValue {
    /// Render with exactly two fraction digits, e.g. "120.03".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
