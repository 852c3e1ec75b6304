//! Wall-clock abstraction and home-screen time/date formatting.

use core::fmt::Write as _;

use heapless::String;

pub const TIME_TEXT_BYTES: usize = 8;
pub const DATE_TEXT_BYTES: usize = 32;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Maps `0..=6` (Monday first); larger values wrap.
    pub const fn from_monday_index(index: u8) -> Self {
        match index % 7 {
            0 => Self::Monday,
            1 => Self::Tuesday,
            2 => Self::Wednesday,
            3 => Self::Thursday,
            4 => Self::Friday,
            5 => Self::Saturday,
            _ => Self::Sunday,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Local time at minute resolution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ClockReading {
    /// 0..=23
    pub hour: u8,
    pub minute: u8,
    pub weekday: Weekday,
    /// 1..=12
    pub month: u8,
    /// 1..=31
    pub day: u8,
}

/// Source of local wall-clock time.
pub trait WallClock {
    fn now(&mut self) -> ClockReading;
}

pub fn month_name(month: u8) -> Option<&'static str> {
    MONTH_NAMES.get(usize::from(month).checked_sub(1)?).copied()
}

/// `HH:MM` on a 12-hour dial, hour zero-padded.
pub fn format_time(reading: &ClockReading) -> String<TIME_TEXT_BYTES> {
    let hour = match reading.hour % 12 {
        0 => 12,
        hour => hour,
    };

    let mut out = String::new();
    let _ = write!(out, "{:02}:{:02}", hour, reading.minute);
    out
}

/// `Weekday, Month D` with no leading zero on the day.
pub fn format_date(reading: &ClockReading) -> String<DATE_TEXT_BYTES> {
    let mut out = String::new();
    let _ = write!(
        out,
        "{}, {} {}",
        reading.weekday.name(),
        month_name(reading.month).unwrap_or("?"),
        reading.day
    );
    out
}
