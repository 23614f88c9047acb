use crate::error::{OrghistError, Result};
use chrono::{DateTime, TimeZone, Timelike, Utc};
use std::fmt;
use std::str::FromStr;

pub const BUCKET_MINUTES: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bucket {
    pub hour: u32,
    pub minute: u32,
}

impl Bucket {
    /// Floors `minute` to the quarter hour. `hour` must be 0-23 and is kept
    /// as given.
    pub fn new(hour: u32, minute: u32) -> Self {
        debug_assert!(hour < 24, "hour {hour} out of range");
        Self {
            hour,
            minute: minute / BUCKET_MINUTES * BUCKET_MINUTES,
        }
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.hour, self.minute)
    }
}

impl FromStr for Bucket {
    type Err = OrghistError;

    fn from_str(s: &str) -> Result<Self> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| OrghistError::Parse(format!("Bucket label '{s}' has no ':'")))?;
        let hour: u32 = h
            .parse()
            .map_err(|_| OrghistError::Parse(format!("Invalid hour in bucket label '{s}'")))?;
        let minute: u32 = m
            .parse()
            .map_err(|_| OrghistError::Parse(format!("Invalid minute in bucket label '{s}'")))?;

        if hour > 23 || minute % BUCKET_MINUTES != 0 || minute >= 60 {
            return Err(OrghistError::Parse(format!(
                "Bucket label '{s}' is not a quarter-hour slot"
            )));
        }
        Ok(Self { hour, minute })
    }
}

pub fn bucket_for<Tz: TimeZone>(timestamp: &DateTime<Utc>, tz: &Tz) -> Bucket {
    let local = timestamp.with_timezone(tz);
    Bucket::new(local.hour(), local.minute())
}
