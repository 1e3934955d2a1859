use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid event name")]
    EventName,
    #[error("An event with this slug already exists")]
    EventExists,
    #[error("Invalid room name")]
    RoomName,
    #[error("Invalid slug")]
    Slug,
    #[error("The slug is already used by another room of the event")]
    SlugExists,
    #[error("Invalid view name")]
    ViewName,
    #[error("Invalid title")]
    Title,
    #[error("The end of the time block is before its start")]
    EndTimeBeforeStart,
    #[error("The event already has this special start time")]
    SpecialStartTimeExists,
    #[error("The room belongs to another event")]
    RoomOfOtherEvent,
    #[error("The view belongs to another event")]
    ViewOfOtherEvent,
    #[error("The room is already part of the view")]
    RoomAlreadyInView,
    #[error("The same room has been given more than once")]
    DuplicateRoom,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
