use std::fmt;
use std::ops::{Add, Sub};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::TimeError;

// @module: Subtitle time value type

// @const: Canonical time string regex (H:MM:SS.mmm)
static TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+):([0-5]\d):([0-5]\d)\.(\d{3})$").unwrap()
});

/// An immutable time value with millisecond resolution.
///
/// The single source of truth is `total_msecs`; hour/minute/second/millisecond
/// components are derived. Values are ordered and support addition and
/// subtraction, which may produce negative intermediate results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubtitleTime {
    total_msecs: i64,
}

impl SubtitleTime {
    /// The zero ("null") time value
    pub const ZERO: SubtitleTime = SubtitleTime { total_msecs: 0 };

    /// Build a time from components.
    ///
    /// Out-of-range minute/second/millisecond values overflow naturally into
    /// the total, so `from_components(0, 0, 90, 0)` equals
    /// `from_components(0, 1, 30, 0)`.
    pub fn from_components(hours: i64, minutes: i64, seconds: i64, mseconds: i64) -> Self {
        SubtitleTime {
            total_msecs: hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + mseconds,
        }
    }

    /// Build a time from a total millisecond count
    pub fn from_msecs(total_msecs: i64) -> Self {
        SubtitleTime { total_msecs }
    }

    /// Build a time from a frame number at the given framerate,
    /// rounding to the nearest millisecond
    pub fn from_frames(frames: i64, framerate: f64) -> Self {
        SubtitleTime {
            total_msecs: (frames as f64 * 1000.0 / framerate).round() as i64,
        }
    }

    /// Parse the canonical `H:MM:SS.mmm` form.
    ///
    /// Hours are one or more digits without an upper bound; minutes and
    /// seconds are exactly two digits in 00-59; milliseconds are exactly
    /// three digits. Anything else, including a comma decimal separator or a
    /// missing component, fails.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let caps = TIME_REGEX
            .captures(s)
            .ok_or_else(|| TimeError::InvalidTimeString(s.to_string()))?;

        // The grammar guarantees each group is a short digit run
        let hours: i64 = caps[1]
            .parse()
            .map_err(|_| TimeError::InvalidTimeString(s.to_string()))?;
        let minutes: i64 = caps[2].parse().unwrap();
        let seconds: i64 = caps[3].parse().unwrap();
        let mseconds: i64 = caps[4].parse().unwrap();

        Ok(Self::from_components(hours, minutes, seconds, mseconds))
    }

    /// Whether `parse` would succeed on the input
    pub fn validate(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

    /// Total milliseconds since zero
    pub fn total_msecs(&self) -> i64 {
        self.total_msecs
    }

    /// Derived hour component (canonical for non-negative values)
    pub fn hours(&self) -> i64 {
        self.total_msecs.abs() / 3_600_000
    }

    /// Derived minute component, 0-59
    pub fn minutes(&self) -> i64 {
        (self.total_msecs.abs() % 3_600_000) / 60_000
    }

    /// Derived second component, 0-59
    pub fn seconds(&self) -> i64 {
        (self.total_msecs.abs() % 60_000) / 1_000
    }

    /// Derived millisecond component, 0-999
    pub fn mseconds(&self) -> i64 {
        self.total_msecs.abs() % 1_000
    }

    /// Whether this is the zero value
    pub fn is_zero(&self) -> bool {
        self.total_msecs == 0
    }

    /// Whether the value is negative (possible as an arithmetic intermediate)
    pub fn is_negative(&self) -> bool {
        self.total_msecs < 0
    }

    /// Frame number at the given framerate, rounded to the nearest frame
    pub fn to_frames(&self, framerate: f64) -> i64 {
        (self.total_msecs as f64 * framerate / 1000.0).round() as i64
    }
}

impl fmt::Display for SubtitleTime {
    /// Canonical `H:MM:SS.mmm` form, hours unpadded.
    ///
    /// Negative values render with a leading minus; they are not part of the
    /// canonical grammar and will not parse back.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.total_msecs < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}:{:02}:{:02}.{:03}",
            sign,
            self.hours(),
            self.minutes(),
            self.seconds(),
            self.mseconds()
        )
    }
}

impl Add for SubtitleTime {
    type Output = SubtitleTime;

    fn add(self, rhs: SubtitleTime) -> SubtitleTime {
        SubtitleTime {
            total_msecs: self.total_msecs + rhs.total_msecs,
        }
    }
}

impl Sub for SubtitleTime {
    type Output = SubtitleTime;

    fn sub(self, rhs: SubtitleTime) -> SubtitleTime {
        SubtitleTime {
            total_msecs: self.total_msecs - rhs.total_msecs,
        }
    }
}
