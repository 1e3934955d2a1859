use std::collections::BTreeSet;

use super::prelude::*;
use crate::repositories::Error as RepoError;

/// Distance between two regular time slots within a time block.
pub const TIME_SLOT_STEP: Duration = Duration::HOUR;

// Walks through the time block in hourly steps. The end of the
// block is always a time slot, even if it is not aligned to the
// hourly grid.
fn time_block_ticks(time_block: &TimeBlock) -> Vec<Timestamp> {
    let TimeBlock {
        start_time,
        end_time,
        ..
    } = *time_block;
    let mut ticks = Vec::new();
    let mut next_tick = Some(start_time);
    while let Some(tick) = next_tick.filter(|tick| *tick <= end_time) {
        ticks.push(tick);
        next_tick = tick.checked_add(TIME_SLOT_STEP);
    }
    if ticks.last().is_some_and(|last| *last < end_time) {
        ticks.push(end_time);
    }
    ticks
}

/// All time slots of an event, sorted and without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeSlotCalendar {
    time_points: Vec<Timestamp>,
}

impl TimeSlotCalendar {
    pub fn new<'a>(
        special_start_times: impl IntoIterator<Item = Timestamp>,
        time_blocks: impl IntoIterator<Item = &'a TimeBlock>,
    ) -> Self {
        let mut time_points: BTreeSet<_> = special_start_times.into_iter().collect();
        for time_block in time_blocks {
            time_points.extend(time_block_ticks(time_block));
        }
        Self {
            time_points: time_points.into_iter().collect(),
        }
    }

    pub fn time_points(&self) -> &[Timestamp] {
        &self.time_points
    }

    pub fn is_empty(&self) -> bool {
        self.time_points.is_empty()
    }

    /// The time slots within the given window.
    pub fn start_times(&self, window: TimeWindow) -> Vec<Timestamp> {
        self.time_points
            .iter()
            .copied()
            .filter(|t| window.contains(*t))
            .collect()
    }

    /// The time slots within the given window that are covered
    /// by the programme, i.e. `start_time <= t < end_time`.
    pub fn start_times_of_programme(
        &self,
        window: TimeWindow,
        programme: &Programme,
    ) -> Vec<Timestamp> {
        let (Some(start_time), Some(end_time)) = (programme.start_time, programme.end_time())
        else {
            return vec![];
        };
        let first = self.time_points.partition_point(|t| *t < start_time);
        let last = self.time_points.partition_point(|t| *t < end_time);
        if first >= last {
            return vec![];
        }
        self.time_points[first..last]
            .iter()
            .copied()
            .filter(|t| window.contains(*t))
            .collect()
    }

    /// Number of rows a programme occupies in the schedule.
    pub fn rowspan(&self, window: TimeWindow, programme: &Programme) -> usize {
        self.start_times_of_programme(window, programme).len()
    }
}

pub fn load_time_slot_calendar<R>(repo: &R, event_id: &str) -> Result<TimeSlotCalendar>
where
    R: TimeSlotRepo,
{
    let special_start_times = repo.special_start_times_of_event(event_id)?;
    let time_blocks = repo.time_blocks_of_event(event_id)?;
    log::debug!(
        "Loaded {} time block(s) and {} special start time(s) of event {}",
        time_blocks.len(),
        special_start_times.len(),
        event_id
    );
    Ok(TimeSlotCalendar::new(
        special_start_times.iter().map(|s| s.start_time),
        &time_blocks,
    ))
}

/// The time slots of an event, optionally restricted to a window
/// and to the slots covered by a single programme.
pub fn start_times<R>(
    repo: &R,
    event_id: &str,
    window: TimeWindow,
    programme: Option<&Programme>,
) -> Result<Vec<Timestamp>>
where
    R: TimeSlotRepo,
{
    let calendar = load_time_slot_calendar(repo, event_id)?;
    Ok(match programme {
        Some(programme) => calendar.start_times_of_programme(window, programme),
        None => calendar.start_times(window),
    })
}

#[derive(Debug, Clone)]
pub struct NewTimeBlock {
    pub event_id: Id,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
}

pub fn create_time_block<R>(repo: &R, new_time_block: NewTimeBlock) -> Result<TimeBlock>
where
    R: EventRepo + TimeSlotRepo,
{
    let NewTimeBlock {
        event_id,
        start_time,
        end_time,
    } = new_time_block;
    if end_time < start_time {
        return Err(Error::EndTimeBeforeStart);
    }
    let event = repo.get_event(event_id.as_str())?;
    let time_block = TimeBlock {
        id: Id::new(),
        event_id: event.id,
        start_time,
        end_time,
    };
    repo.create_time_block(&time_block)?;
    Ok(time_block)
}

pub fn create_special_start_time<R>(
    repo: &R,
    event_id: &Id,
    start_time: Timestamp,
) -> Result<SpecialStartTime>
where
    R: EventRepo + TimeSlotRepo,
{
    let event = repo.get_event(event_id.as_str())?;
    if repo
        .special_start_times_of_event(event.id.as_str())?
        .iter()
        .any(|s| s.start_time == start_time)
    {
        return Err(Error::SpecialStartTimeExists);
    }
    let special_start_time = SpecialStartTime {
        id: Id::new(),
        event_id: event.id,
        start_time,
    };
    repo.create_special_start_time(&special_start_time)
        .map_err(|err| match err {
            RepoError::AlreadyExists => Error::SpecialStartTimeExists,
            err => Error::Repo(err),
        })?;
    Ok(special_start_time)
}
