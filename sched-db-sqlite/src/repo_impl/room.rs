use super::*;

impl RoomRepo for DbReadWrite<'_> {
    fn create_room(&self, room: &Room) -> Result<()> {
        create_room(&mut self.conn.borrow_mut(), room)
    }
    fn get_room(&self, id: &str) -> Result<Room> {
        get_room(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_room_by_slug(&self, event_id: Option<&str>, slug: &str) -> Result<Option<Room>> {
        try_get_room_by_slug(&mut self.conn.borrow_mut(), event_id, slug)
    }
    fn rooms_of_event(&self, event_id: &str) -> Result<Vec<Room>> {
        rooms_of_event(&mut self.conn.borrow_mut(), event_id)
    }
    fn template_rooms(&self) -> Result<Vec<Room>> {
        template_rooms(&mut self.conn.borrow_mut())
    }
}

impl RoomRepo for DbConnection<'_> {
    fn create_room(&self, room: &Room) -> Result<()> {
        create_room(&mut self.conn.borrow_mut(), room)
    }
    fn get_room(&self, id: &str) -> Result<Room> {
        get_room(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_room_by_slug(&self, event_id: Option<&str>, slug: &str) -> Result<Option<Room>> {
        try_get_room_by_slug(&mut self.conn.borrow_mut(), event_id, slug)
    }
    fn rooms_of_event(&self, event_id: &str) -> Result<Vec<Room>> {
        rooms_of_event(&mut self.conn.borrow_mut(), event_id)
    }
    fn template_rooms(&self) -> Result<Vec<Room>> {
        template_rooms(&mut self.conn.borrow_mut())
    }
}

impl RoomRepo for DbReadOnly<'_> {
    fn create_room(&self, _room: &Room) -> Result<()> {
        unreachable!();
    }
    fn get_room(&self, id: &str) -> Result<Room> {
        get_room(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_room_by_slug(&self, event_id: Option<&str>, slug: &str) -> Result<Option<Room>> {
        try_get_room_by_slug(&mut self.conn.borrow_mut(), event_id, slug)
    }
    fn rooms_of_event(&self, event_id: &str) -> Result<Vec<Room>> {
        rooms_of_event(&mut self.conn.borrow_mut(), event_id)
    }
    fn template_rooms(&self) -> Result<Vec<Room>> {
        template_rooms(&mut self.conn.borrow_mut())
    }
}

pub(super) fn load_room(model: models::Room) -> Room {
    let models::Room {
        rowid: _,
        id,
        event_id,
        name,
        sort_order,
        notes,
        slug,
        active,
    } = model;
    Room {
        id: id.into(),
        event_id: event_id.map(Into::into),
        name,
        order: sort_order,
        notes,
        slug,
        active,
    }
}

fn create_room(conn: &mut SqliteConnection, room: &Room) -> Result<()> {
    let new_room = models::NewRoom {
        id: room.id.as_str(),
        event_id: room.event_id.as_ref().map(Id::as_str),
        name: &room.name,
        sort_order: room.order,
        notes: &room.notes,
        slug: &room.slug,
        active: room.active,
    };
    diesel::insert_into(schema::rooms::table)
        .values(&new_room)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_room(conn: &mut SqliteConnection, id: &str) -> Result<Room> {
    use schema::rooms::dsl;
    let room = schema::rooms::table
        .filter(dsl::id.eq(id))
        .first::<models::Room>(conn)
        .map_err(from_diesel_err)?;
    Ok(load_room(room))
}

fn try_get_room_by_slug(
    conn: &mut SqliteConnection,
    event_id: Option<&str>,
    slug: &str,
) -> Result<Option<Room>> {
    use schema::rooms::dsl;
    let query = schema::rooms::table.filter(dsl::slug.eq(slug));
    let room = match event_id {
        Some(event_id) => query
            .filter(dsl::event_id.eq(event_id))
            .first::<models::Room>(conn),
        None => query
            .filter(dsl::event_id.is_null())
            .first::<models::Room>(conn),
    };
    Ok(room.optional().map_err(from_diesel_err)?.map(load_room))
}

fn rooms_of_event(conn: &mut SqliteConnection, event_id: &str) -> Result<Vec<Room>> {
    use schema::rooms::dsl;
    Ok(schema::rooms::table
        .filter(dsl::event_id.eq(event_id))
        .order_by((dsl::sort_order, dsl::rowid))
        .load::<models::Room>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_room)
        .collect())
}

fn template_rooms(conn: &mut SqliteConnection) -> Result<Vec<Room>> {
    use schema::rooms::dsl;
    Ok(schema::rooms::table
        .filter(dsl::event_id.is_null())
        .order_by((dsl::sort_order, dsl::rowid))
        .load::<models::Room>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_room)
        .collect())
}
