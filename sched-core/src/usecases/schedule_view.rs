use super::prelude::*;

/// Anything that can be rendered as a schedule grid.
pub trait ScheduleView {
    fn event_id(&self) -> &Id;
    /// Columns of the grid in display order.
    fn rooms(&self) -> &[Room];
    fn window(&self) -> TimeWindow;
}

/// A persisted view together with its rooms.
#[derive(Debug, Clone)]
pub struct NamedView {
    pub view: View,
    pub rooms: Vec<Room>,
}

impl ScheduleView for NamedView {
    fn event_id(&self) -> &Id {
        &self.view.event_id
    }
    fn rooms(&self) -> &[Room] {
        &self.rooms
    }
    fn window(&self) -> TimeWindow {
        self.view.window()
    }
}

/// Shows all rooms of an event without any time restriction.
#[derive(Debug, Clone)]
pub struct AllRoomsPseudoView {
    pub event_id: Id,
    pub rooms: Vec<Room>,
}

impl AllRoomsPseudoView {
    pub const NAME: &'static str = "All rooms";

    pub fn name(&self) -> &str {
        Self::NAME
    }

    pub fn public(&self) -> bool {
        true
    }

    pub fn order(&self) -> i32 {
        0
    }
}

impl ScheduleView for AllRoomsPseudoView {
    fn event_id(&self) -> &Id {
        &self.event_id
    }
    fn rooms(&self) -> &[Room] {
        &self.rooms
    }
    fn window(&self) -> TimeWindow {
        TimeWindow::unbounded()
    }
}

pub fn load_named_view<R>(repo: &R, event_id: &Id, view_id: &Id) -> Result<NamedView>
where
    R: ViewRepo,
{
    let view = repo.get_view(view_id.as_str())?;
    if &view.event_id != event_id {
        return Err(Error::ViewOfOtherEvent);
    }
    let rooms = repo.rooms_of_view(view.id.as_str())?;
    Ok(NamedView { view, rooms })
}

pub fn all_rooms_pseudo_view<R>(repo: &R, event_id: &Id) -> Result<AllRoomsPseudoView>
where
    R: EventRepo + RoomRepo,
{
    let event = repo.get_event(event_id.as_str())?;
    let rooms = repo.rooms_of_event(event.id.as_str())?;
    Ok(AllRoomsPseudoView {
        event_id: event.id,
        rooms,
    })
}
