use crate::domain::model::{ClockReading, EncodedTime};

/// Splits a reading into the three values the face shows: 12-hour hour
/// (midnight and noon are 12), five-minute bucket and the minutes left over.
pub fn encode_time(reading: ClockReading) -> EncodedTime {
    let hour = reading.hour % 12;
    EncodedTime {
        hour12: if hour == 0 { 12 } else { hour },
        minute_bucket: reading.minute / 5,
        minute_remainder: reading.minute % 5,
    }
}
