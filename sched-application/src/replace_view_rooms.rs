use super::*;

/// Replaces all rooms of a view within a single transaction.
pub fn replace_view_rooms(
    connections: &sqlite::Connections,
    view_id: &Id,
    room_ids: &[Id],
) -> Result<Vec<ViewRoom>> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::replace_view_rooms(conn, view_id, room_ids).map_err(|err| {
            warn!("Failed to replace rooms of view {view_id}: {err}");
            err
        })
    })?)
}

/// Same as [`replace_view_rooms`], but the rooms are given by
/// their slugs within the event of the view.
pub fn replace_view_rooms_by_slugs(
    connections: &sqlite::Connections,
    view_id: &Id,
    room_slugs: &[String],
) -> Result<Vec<ViewRoom>> {
    Ok(connections.exclusive()?.transaction(|conn| {
        let view = usecases::load_view(conn, view_id)?;
        let room_ids = usecases::room_ids_by_slugs(conn, &view.event_id, room_slugs)?;
        usecases::replace_view_rooms(conn, &view.id, &room_ids).map_err(|err| {
            warn!("Failed to replace rooms of view {view_id}: {err}");
            err
        })
    })?)
}
