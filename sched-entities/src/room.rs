use crate::id::Id;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: Id,
    /// `None` for template rooms that are copied into events on demand.
    pub event_id: Option<Id>,
    pub name: String,
    pub order: i32,
    pub notes: String,
    pub slug: String,
    pub active: bool,
}

impl Room {
    pub fn is_template(&self) -> bool {
        self.event_id.is_none()
    }

    pub fn belongs_to(&self, event_id: &Id) -> bool {
        self.event_id.as_ref() == Some(event_id)
    }

    /// A copy of this room for the given event with a fresh id.
    pub fn instantiate_for(&self, event_id: Id) -> Self {
        Self {
            id: Id::new(),
            event_id: Some(event_id),
            ..self.clone()
        }
    }
}
