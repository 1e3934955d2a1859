use crate::{id::Id, time::Timestamp};

/// Optional bounds of the time slots that are shown.
///
/// The start is inclusive, the end is exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
}

impl TimeWindow {
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    pub fn contains(&self, t: Timestamp) -> bool {
        self.start.map_or(true, |start| t >= start) && self.end.map_or(true, |end| t < end)
    }

    /// An inverted window does not contain any point in time.
    pub fn is_inverted(&self) -> bool {
        matches!((self.start, self.end), (Some(start), Some(end)) if start > end)
    }
}

/// A named selection of rooms of an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub id: Id,
    pub event_id: Id,
    pub name: String,
    pub public: bool,
    pub order: i32,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
}

impl View {
    pub const MAX_NAME_LEN: usize = 32;

    pub fn window(&self) -> TimeWindow {
        TimeWindow {
            start: self.start_time,
            end: self.end_time,
        }
    }
}

/// Membership of a room in a view.
///
/// Rooms of a view are ordered by `order`. Orders are assigned
/// in steps of [`ViewRoom::ORDER_STEP`] to leave gaps for manual
/// reordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRoom {
    pub view_id: Id,
    pub room_id: Id,
    pub order: i32,
}

impl ViewRoom {
    pub const ORDER_STEP: i32 = 10;

    /// Orders for a fresh sequence of rooms: 10, 20, 30, ...
    pub fn sequential_orders(count: usize) -> impl Iterator<Item = i32> {
        (1..=count as i32).map(|i| i * Self::ORDER_STEP)
    }

    pub fn next_order(max_order: Option<i32>) -> i32 {
        max_order.unwrap_or(0).saturating_add(Self::ORDER_STEP)
    }
}
