use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{
    id::Id,
    time::{Duration, Timestamp},
};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProgrammeState {
    Idea,
    Asked,
    Offered,
    Accepted,
    Published,
    Cancelled,
    Rejected,
}

impl ProgrammeState {
    pub const fn is_published(self) -> bool {
        matches!(self, Self::Published)
    }
}

impl Default for ProgrammeState {
    fn default() -> Self {
        Self::Accepted
    }
}

/// Which programme items are visible in a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    PublishedOnly,
    IncludeUnpublished,
}

impl Visibility {
    pub const fn from_include_unpublished(include_unpublished: bool) -> Self {
        if include_unpublished {
            Self::IncludeUnpublished
        } else {
            Self::PublishedOnly
        }
    }

    pub const fn admits(self, state: ProgrammeState) -> bool {
        match self {
            Self::PublishedOnly => state.is_published(),
            Self::IncludeUnpublished => true,
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Programme {
    pub id          : Id,
    pub category_id : Id,
    pub title       : String,
    pub room_id     : Option<Id>,
    pub start_time  : Option<Timestamp>,
    // Items without a length have not been scheduled yet
    pub length      : Option<Duration>,
    pub state       : ProgrammeState,
}

impl Programme {
    pub fn end_time(&self) -> Option<Timestamp> {
        match (self.start_time, self.length) {
            (Some(start_time), Some(length)) => start_time.checked_add(length),
            _ => None,
        }
    }

    /// Whether the programme is still running at the given point in time.
    pub fn continues_at(&self, t: Timestamp) -> bool {
        match (self.start_time, self.end_time()) {
            (Some(start_time), Some(end_time)) => start_time < t && t < end_time,
            _ => false,
        }
    }
}
