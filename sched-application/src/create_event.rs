use super::*;

pub fn create_event(
    connections: &sqlite::Connections,
    new_event: usecases::NewEvent,
) -> Result<Event> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_event(conn, new_event).map_err(|err| {
            warn!("Failed to create event: {err}");
            err
        })
    })?)
}
