use crate::core::{ClockReading, ClockSource};
use chrono::{Local, Timelike};

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> ClockReading {
        let now = Local::now();
        ClockReading {
            hour: now.hour(),
            minute: now.minute(),
        }
    }
}

/// Always reports the same reading.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub ClockReading);

impl ClockSource for FixedClock {
    fn now(&self) -> ClockReading {
        self.0
    }
}
