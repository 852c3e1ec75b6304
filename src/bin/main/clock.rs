use chrono::{Datelike, Local, Timelike};
use xi_watch_core::clock::{ClockReading, WallClock, Weekday};

/// Host local time.
pub struct LocalClock;

impl WallClock for LocalClock {
    fn now(&mut self) -> ClockReading {
        let now = Local::now();
        ClockReading {
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            weekday: Weekday::from_monday_index(now.weekday().num_days_from_monday() as u8),
            month: now.month() as u8,
            day: now.day() as u8,
        }
    }
}
