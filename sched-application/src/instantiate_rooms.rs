use super::*;

pub fn instantiate_rooms_for_event(
    connections: &sqlite::Connections,
    event_slug: &str,
) -> Result<usecases::InstantiatedRooms> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let event = conn.get_event_by_slug(event_slug)?;
        usecases::instantiate_rooms_for_event(conn, &event.id).map_err(|err| {
            warn!("Failed to instantiate template rooms for event {event_slug}: {err}");
            err
        })
    })?)
}
