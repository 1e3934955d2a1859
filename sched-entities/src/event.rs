use crate::id::Id;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: Id,
    pub slug: String,
    pub name: String,
}

/// Programme items are grouped into categories which
/// belong to exactly one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Id,
    pub event_id: Id,
    pub title: String,
}
