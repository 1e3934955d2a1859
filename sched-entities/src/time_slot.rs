use std::fmt;

use crate::{id::Id, time::Timestamp};

/// A contiguous interval of an event that is filled
/// with hourly time slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeBlock {
    pub id: Id,
    pub event_id: Id,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
}

/// An additional time slot of an event, typically not aligned
/// to the hourly grid of the time blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialStartTime {
    pub id: Id,
    pub event_id: Id,
    pub start_time: Timestamp,
}

impl fmt::Display for SpecialStartTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.start_time)
    }
}
