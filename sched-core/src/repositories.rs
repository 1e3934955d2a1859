// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait EventRepo {
    fn create_event(&self, event: &Event) -> Result<()>;

    fn get_event(&self, id: &str) -> Result<Event>;
    fn get_event_by_slug(&self, slug: &str) -> Result<Event>;
}

pub trait CategoryRepo {
    fn create_category(&self, category: &Category) -> Result<()>;

    fn get_category(&self, id: &str) -> Result<Category>;
}

pub trait RoomRepo {
    fn create_room(&self, room: &Room) -> Result<()>;

    fn get_room(&self, id: &str) -> Result<Room>;

    // event_id = None: look up a template room
    fn try_get_room_by_slug(&self, event_id: Option<&str>, slug: &str) -> Result<Option<Room>>;

    // Ordered by `order`, then by insertion
    fn rooms_of_event(&self, event_id: &str) -> Result<Vec<Room>>;
    fn template_rooms(&self) -> Result<Vec<Room>>;
}

pub trait ViewRepo {
    fn create_view(&self, view: &View) -> Result<()>;

    fn get_view(&self, id: &str) -> Result<View>;

    // Ordered by `order`, then by insertion
    fn views_of_event(&self, event_id: &str) -> Result<Vec<View>>;

    // Both ordered by the `order` of the view room, then by insertion
    fn view_rooms(&self, view_id: &str) -> Result<Vec<ViewRoom>>;
    fn rooms_of_view(&self, view_id: &str) -> Result<Vec<Room>>;

    fn max_view_room_order(&self, view_id: &str) -> Result<Option<i32>>;

    fn add_view_rooms(&self, view_rooms: &[ViewRoom]) -> Result<()>;
    fn delete_view_rooms(&self, view_id: &str) -> Result<usize>;

    // Re-points all view rooms of the event's views from one room to another
    fn move_view_rooms_of_event(
        &self,
        event_id: &str,
        from_room_id: &str,
        to_room_id: &str,
    ) -> Result<usize>;
}

pub trait TimeSlotRepo {
    fn create_time_block(&self, time_block: &TimeBlock) -> Result<()>;
    fn time_blocks_of_event(&self, event_id: &str) -> Result<Vec<TimeBlock>>;

    // Fails with `AlreadyExists` if the event already has this start time
    fn create_special_start_time(&self, special_start_time: &SpecialStartTime) -> Result<()>;
    fn special_start_times_of_event(&self, event_id: &str) -> Result<Vec<SpecialStartTime>>;
}

pub trait ProgrammeRepo {
    fn create_programme(&self, programme: &Programme) -> Result<()>;
    fn update_programme(&self, programme: &Programme) -> Result<()>;

    fn get_programme(&self, id: &str) -> Result<Programme>;

    // All programmes of the event in one of the given rooms that have
    // both a start time and a length, independent of their state.
    // Ordered by start time, then by insertion.
    fn scheduled_programmes_in_rooms(
        &self,
        event_id: &str,
        room_ids: &[&str],
    ) -> Result<Vec<Programme>>;

    // Re-points all programmes of the event from one room to another
    fn move_programmes_of_event(
        &self,
        event_id: &str,
        from_room_id: &str,
        to_room_id: &str,
    ) -> Result<usize>;
}
