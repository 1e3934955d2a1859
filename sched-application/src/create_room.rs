use super::*;

pub fn create_room(
    connections: &sqlite::Connections,
    new_room: usecases::NewRoom,
) -> Result<Room> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_room(conn, new_room).map_err(|err| {
            warn!("Failed to create room: {err}");
            err
        })
    })?)
}
