use super::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstantiatedRooms {
    pub created_rooms: usize,
    pub moved_programmes: usize,
    pub moved_view_rooms: usize,
}

/// Copies all template rooms into an event.
///
/// Rooms of the event that share the slug of a template are reused
/// instead of copied. Programmes and views of the event that still
/// refer to a template room are moved to its copy. The templates
/// themselves are kept. Running this more than once has no further
/// effect and must be done inside a transaction.
pub fn instantiate_rooms_for_event<R>(repo: &R, event_id: &Id) -> Result<InstantiatedRooms>
where
    R: EventRepo + RoomRepo + ViewRepo + ProgrammeRepo,
{
    let event = repo.get_event(event_id.as_str())?;
    let mut result = InstantiatedRooms::default();
    for template in repo.template_rooms()? {
        let room = match repo.try_get_room_by_slug(Some(event.id.as_str()), &template.slug)? {
            Some(room) => room,
            None => {
                let room = template.instantiate_for(event.id.clone());
                log::debug!("Copying template room {} into event {}", room.slug, event.slug);
                repo.create_room(&room)?;
                result.created_rooms += 1;
                room
            }
        };
        result.moved_programmes += repo.move_programmes_of_event(
            event.id.as_str(),
            template.id.as_str(),
            room.id.as_str(),
        )?;
        result.moved_view_rooms += repo.move_view_rooms_of_event(
            event.id.as_str(),
            template.id.as_str(),
            room.id.as_str(),
        )?;
    }
    log::info!(
        "Instantiated template rooms of event {}: {} room(s) created, {} programme(s) and {} view room(s) moved",
        event.slug,
        result.created_rooms,
        result.moved_programmes,
        result.moved_view_rooms
    );
    Ok(result)
}
