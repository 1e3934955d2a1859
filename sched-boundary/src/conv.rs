use super::*;
use sched_entities as e;

impl From<e::room::Room> for Room {
    fn from(from: e::room::Room) -> Self {
        let e::room::Room {
            id,
            event_id: _,
            name,
            order,
            notes,
            slug,
            active,
        } = from;
        Self {
            id: id.into(),
            slug,
            name,
            order,
            notes,
            active,
        }
    }
}

impl From<e::view::View> for View {
    fn from(from: e::view::View) -> Self {
        let e::view::View {
            id,
            event_id: _,
            name,
            public,
            order,
            start_time,
            end_time,
        } = from;
        Self {
            id: id.into(),
            name,
            public,
            order,
            start_time: start_time.map(Into::into),
            end_time: end_time.map(Into::into),
        }
    }
}

impl From<e::programme::Programme> for Programme {
    fn from(from: e::programme::Programme) -> Self {
        let end_time = from.end_time().map(Into::into);
        let e::programme::Programme {
            id,
            category_id,
            title,
            room_id,
            start_time,
            length,
            state,
        } = from;
        Self {
            id: id.into(),
            title,
            category_id: category_id.into(),
            room_id: room_id.map(Into::into),
            start_time: start_time.map(Into::into),
            end_time,
            length_minutes: length.map(|l| l.whole_minutes()),
            state: state.to_string(),
        }
    }
}
