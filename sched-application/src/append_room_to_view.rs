use super::*;

pub fn append_room_to_view(
    connections: &sqlite::Connections,
    view_id: &Id,
    room_id: &Id,
) -> Result<ViewRoom> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::append_room_to_view(conn, view_id, room_id).map_err(|err| {
            warn!("Failed to add room {room_id} to view {view_id}: {err}");
            err
        })
    })?)
}
