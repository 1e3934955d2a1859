use super::prelude::*;
use crate::{
    repositories::Error as RepoError,
    util::{slug, validate},
};

#[derive(Debug, Clone)]
pub struct NewRoom {
    /// Template rooms do not belong to any event
    pub event_id: Option<Id>,
    pub name: String,
    /// Derived from the name if missing
    pub slug: Option<String>,
    pub order: i32,
    pub notes: String,
}

pub fn create_room<R>(repo: &R, new_room: NewRoom) -> Result<Room>
where
    R: EventRepo + RoomRepo,
{
    let NewRoom {
        event_id,
        name,
        slug,
        order,
        notes,
    } = new_room;
    let name = name.trim().to_owned();
    if !validate::is_valid_room_name(&name) {
        return Err(Error::RoomName);
    }
    let slug = match slug {
        Some(slug) => slug.trim().to_owned(),
        None => slug::slugify(&name),
    };
    if !slug::is_valid_slug(&slug) {
        return Err(Error::Slug);
    }
    let event_id = match event_id {
        Some(event_id) => Some(repo.get_event(event_id.as_str())?.id),
        None => None,
    };
    if repo
        .try_get_room_by_slug(event_id.as_ref().map(Id::as_str), &slug)?
        .is_some()
    {
        return Err(Error::SlugExists);
    }
    let room = Room {
        id: Id::new(),
        event_id,
        name,
        order,
        notes,
        slug,
        active: true,
    };
    log::debug!("Creating room {} ({})", room.name, room.slug);
    repo.create_room(&room)?;
    Ok(room)
}

pub fn rooms_of_event<R: RoomRepo>(repo: &R, event_id: &Id) -> Result<Vec<Room>> {
    Ok(repo.rooms_of_event(event_id.as_str())?)
}

pub fn template_rooms<R: RoomRepo>(repo: &R) -> Result<Vec<Room>> {
    Ok(repo.template_rooms()?)
}

/// Looks up rooms of an event by their slugs, keeping the given order.
pub fn room_ids_by_slugs<R: RoomRepo>(
    repo: &R,
    event_id: &Id,
    slugs: &[String],
) -> Result<Vec<Id>> {
    slugs
        .iter()
        .map(|slug| -> Result<Id> {
            repo.try_get_room_by_slug(Some(event_id.as_str()), slug)?
                .map(|room| room.id)
                .ok_or_else(|| {
                    log::warn!("Event {event_id} has no room {slug}");
                    Error::from(RepoError::NotFound)
                })
        })
        .collect()
}
