use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A unique identifier for a shift.
///
/// Shift identifiers are opaque strings. They are created externally along
/// with the shifts themselves, so no particular format is enforced beyond
/// being non-empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShiftId(String);

impl ShiftId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShiftId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a shift identifier is empty.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid shift id: must be non-empty")]
pub struct InvalidShiftIdError;

impl FromStr for ShiftId {
    type Err = InvalidShiftIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InvalidShiftIdError);
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for ShiftId {
    type Error = InvalidShiftIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(InvalidShiftIdError);
        }
        Ok(Self(value))
    }
}

impl From<ShiftId> for String {
    fn from(id: ShiftId) -> Self {
        id.0
    }
}

/// A time of day with minute precision.
///
/// Stored as minutes since midnight. The textual form is strict 24-hour
/// `HH:mm` (hours 00-23, minutes 00-59); anything else fails to parse rather
/// than being reinterpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Create a time of day from an hour and minute.
    ///
    /// Returns `None` if the hour is not in 0-23 or the minute is not in
    /// 0-59.
    #[must_use]
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(u16::from(hour) * 60 + u16::from(minute)))
        } else {
            None
        }
    }

    /// Minutes since midnight, in 0-1439.
    #[must_use]
    pub const fn minutes_since_midnight(self) -> u16 {
        self.0
    }

    /// Elapsed hours from `self` until `end`, wrapping around midnight.
    ///
    /// An end time numerically earlier than the start is interpreted as
    /// crossing midnight, so `23:00` until `01:00` is 2 hours. Equal times
    /// yield exactly 0, not 24. The result is always in `[0, 24)`.
    #[must_use]
    pub fn hours_until(self, end: Self) -> f64 {
        let minutes = (i32::from(end.0) - i32::from(self.0) + 1440) % 1440;
        f64::from(minutes) / 60.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Error returned when a string is not a valid `HH:mm` time.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid time '{0}': expected 'HH:mm' with hours 00-23 and minutes 00-59")]
pub struct ParseTimeError(String);

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseTimeError(s.to_string());

        let (hour, minute) = s.split_once(':').ok_or_else(error)?;
        if hour.len() != 2 || minute.len() != 2 {
            return Err(error());
        }

        let hour: u8 = hour.parse().map_err(|_| error())?;
        let minute: u8 = minute.parse().map_err(|_| error())?;

        Self::new(hour, minute).ok_or_else(error)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ParseTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

/// A scheduled block of time on a specific date.
///
/// Shifts are reference data: they are created and maintained externally and
/// treated as read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// The shift's unique identifier.
    pub shift_id: ShiftId,
    /// The calendar date the shift falls on (by its start time).
    pub date: NaiveDate,
    /// When the shift starts.
    pub start_time: TimeOfDay,
    /// When the shift ends. May be earlier than the start time, in which
    /// case the shift crosses midnight.
    pub end_time: TimeOfDay,
}

impl Shift {
    /// The shift's duration in hours, with midnight wraparound.
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        self.start_time.hours_until(self.end_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn duration_simple() {
        assert!((time("11:00").hours_until(time("13:30")) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn duration_wraps_around_midnight() {
        assert!((time("23:00").hours_until(time("01:00")) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn duration_equal_times_is_zero_not_twenty_four() {
        assert!(time("09:00").hours_until(time("09:00")).abs() < f64::EPSILON);
    }

    #[test]
    fn duration_is_always_within_a_day() {
        for start_minutes in (0_u16..1440).step_by(17) {
            for end_minutes in (0_u16..1440).step_by(23) {
                let start = TimeOfDay(start_minutes);
                let end = TimeOfDay(end_minutes);
                let hours = start.hours_until(end);
                assert!((0.0..24.0).contains(&hours), "{start} -> {end}: {hours}");
            }
        }
    }

    #[test]
    fn parse_valid_times() {
        assert_eq!(time("00:00").minutes_since_midnight(), 0);
        assert_eq!(time("23:59").minutes_since_midnight(), 1439);
        assert_eq!(time("07:30").minutes_since_midnight(), 450);
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert!("24:00".parse::<TimeOfDay>().is_err());
        assert!("12:60".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!("1200".parse::<TimeOfDay>().is_err());
        assert!("7:30".parse::<TimeOfDay>().is_err());
        assert!("12:3".parse::<TimeOfDay>().is_err());
        assert!("ab:cd".parse::<TimeOfDay>().is_err());
        assert!(String::new().parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn time_display_roundtrip() {
        assert_eq!(time("08:05").to_string(), "08:05");
    }

    #[test]
    fn shift_id_rejects_empty() {
        assert!("".parse::<ShiftId>().is_err());
    }

    #[test]
    fn shift_serde_roundtrip() {
        let shift = Shift {
            shift_id: "S001".parse().unwrap(),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            start_time: time("09:00"),
            end_time: time("17:00"),
        };

        let json = serde_json::to_string(&shift).unwrap();
        assert_eq!(
            json,
            r#"{"shiftId":"S001","date":"2025-03-14","startTime":"09:00","endTime":"17:00"}"#
        );

        let back: Shift = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shift);
    }

    #[test]
    fn shift_deserialize_rejects_malformed_time() {
        let json = r#"{"shiftId":"S001","date":"2025-03-14","startTime":"25:00","endTime":"17:00"}"#;
        assert!(serde_json::from_str::<Shift>(json).is_err());
    }

    #[test]
    fn overnight_shift_duration() {
        let shift = Shift {
            shift_id: "S002".parse().unwrap(),
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            start_time: time("22:00"),
            end_time: time("06:00"),
        };
        assert!((shift.duration_hours() - 8.0).abs() < f64::EPSILON);
    }
}
