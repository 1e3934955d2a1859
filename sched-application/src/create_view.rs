use super::*;

pub fn create_view(
    connections: &sqlite::Connections,
    new_view: usecases::NewView,
) -> Result<View> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_view(conn, new_view).map_err(|err| {
            warn!("Failed to create view: {err}");
            err
        })
    })?)
}
