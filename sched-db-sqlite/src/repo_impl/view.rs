use super::*;

impl ViewRepo for DbReadWrite<'_> {
    fn create_view(&self, view: &View) -> Result<()> {
        create_view(&mut self.conn.borrow_mut(), view)
    }

    fn get_view(&self, id: &str) -> Result<View> {
        get_view(&mut self.conn.borrow_mut(), id)
    }
    fn views_of_event(&self, event_id: &str) -> Result<Vec<View>> {
        views_of_event(&mut self.conn.borrow_mut(), event_id)
    }
    fn view_rooms(&self, view_id: &str) -> Result<Vec<ViewRoom>> {
        view_rooms(&mut self.conn.borrow_mut(), view_id)
    }
    fn rooms_of_view(&self, view_id: &str) -> Result<Vec<Room>> {
        rooms_of_view(&mut self.conn.borrow_mut(), view_id)
    }
    fn max_view_room_order(&self, view_id: &str) -> Result<Option<i32>> {
        max_view_room_order(&mut self.conn.borrow_mut(), view_id)
    }
    fn add_view_rooms(&self, view_rooms: &[ViewRoom]) -> Result<()> {
        add_view_rooms(&mut self.conn.borrow_mut(), view_rooms)
    }
    fn delete_view_rooms(&self, view_id: &str) -> Result<usize> {
        delete_view_rooms(&mut self.conn.borrow_mut(), view_id)
    }
    fn move_view_rooms_of_event(
        &self,
        event_id: &str,
        from_room_id: &str,
        to_room_id: &str,
    ) -> Result<usize> {
        move_view_rooms_of_event(&mut self.conn.borrow_mut(), event_id, from_room_id, to_room_id)
    }
}

impl ViewRepo for DbConnection<'_> {
    fn create_view(&self, view: &View) -> Result<()> {
        create_view(&mut self.conn.borrow_mut(), view)
    }

    fn get_view(&self, id: &str) -> Result<View> {
        get_view(&mut self.conn.borrow_mut(), id)
    }
    fn views_of_event(&self, event_id: &str) -> Result<Vec<View>> {
        views_of_event(&mut self.conn.borrow_mut(), event_id)
    }
    fn view_rooms(&self, view_id: &str) -> Result<Vec<ViewRoom>> {
        view_rooms(&mut self.conn.borrow_mut(), view_id)
    }
    fn rooms_of_view(&self, view_id: &str) -> Result<Vec<Room>> {
        rooms_of_view(&mut self.conn.borrow_mut(), view_id)
    }
    fn max_view_room_order(&self, view_id: &str) -> Result<Option<i32>> {
        max_view_room_order(&mut self.conn.borrow_mut(), view_id)
    }
    fn add_view_rooms(&self, view_rooms: &[ViewRoom]) -> Result<()> {
        add_view_rooms(&mut self.conn.borrow_mut(), view_rooms)
    }
    fn delete_view_rooms(&self, view_id: &str) -> Result<usize> {
        delete_view_rooms(&mut self.conn.borrow_mut(), view_id)
    }
    fn move_view_rooms_of_event(
        &self,
        event_id: &str,
        from_room_id: &str,
        to_room_id: &str,
    ) -> Result<usize> {
        move_view_rooms_of_event(&mut self.conn.borrow_mut(), event_id, from_room_id, to_room_id)
    }
}

impl ViewRepo for DbReadOnly<'_> {
    fn create_view(&self, _view: &View) -> Result<()> {
        unreachable!();
    }

    fn get_view(&self, id: &str) -> Result<View> {
        get_view(&mut self.conn.borrow_mut(), id)
    }
    fn views_of_event(&self, event_id: &str) -> Result<Vec<View>> {
        views_of_event(&mut self.conn.borrow_mut(), event_id)
    }
    fn view_rooms(&self, view_id: &str) -> Result<Vec<ViewRoom>> {
        view_rooms(&mut self.conn.borrow_mut(), view_id)
    }
    fn rooms_of_view(&self, view_id: &str) -> Result<Vec<Room>> {
        rooms_of_view(&mut self.conn.borrow_mut(), view_id)
    }
    fn max_view_room_order(&self, view_id: &str) -> Result<Option<i32>> {
        max_view_room_order(&mut self.conn.borrow_mut(), view_id)
    }
    fn add_view_rooms(&self, _view_rooms: &[ViewRoom]) -> Result<()> {
        unreachable!();
    }
    fn delete_view_rooms(&self, _view_id: &str) -> Result<usize> {
        unreachable!();
    }
    fn move_view_rooms_of_event(
        &self,
        _event_id: &str,
        _from_room_id: &str,
        _to_room_id: &str,
    ) -> Result<usize> {
        unreachable!();
    }
}

fn load_view(model: models::View) -> View {
    let models::View {
        rowid: _,
        id,
        event_id,
        name,
        public,
        sort_order,
        start_time,
        end_time,
    } = model;
    View {
        id: id.into(),
        event_id: event_id.into(),
        name,
        public,
        order: sort_order,
        start_time: start_time.map(load_timestamp),
        end_time: end_time.map(load_timestamp),
    }
}

fn create_view(conn: &mut SqliteConnection, view: &View) -> Result<()> {
    let new_view = models::NewView {
        id: view.id.as_str(),
        event_id: view.event_id.as_str(),
        name: &view.name,
        public: view.public,
        sort_order: view.order,
        start_time: view.start_time.map(store_timestamp),
        end_time: view.end_time.map(store_timestamp),
    };
    diesel::insert_into(schema::views::table)
        .values(&new_view)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_view(conn: &mut SqliteConnection, id: &str) -> Result<View> {
    use schema::views::dsl;
    let view = schema::views::table
        .filter(dsl::id.eq(id))
        .first::<models::View>(conn)
        .map_err(from_diesel_err)?;
    Ok(load_view(view))
}

fn views_of_event(conn: &mut SqliteConnection, event_id: &str) -> Result<Vec<View>> {
    use schema::views::dsl;
    Ok(schema::views::table
        .filter(dsl::event_id.eq(event_id))
        .order_by((dsl::sort_order, dsl::rowid))
        .load::<models::View>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_view)
        .collect())
}

fn view_rooms(conn: &mut SqliteConnection, view_id: &str) -> Result<Vec<ViewRoom>> {
    use schema::view_rooms::dsl;
    Ok(schema::view_rooms::table
        .filter(dsl::view_id.eq(view_id))
        .order_by((dsl::sort_order, dsl::rowid))
        .load::<models::ViewRoom>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::ViewRoom {
                 rowid: _,
                 view_id,
                 room_id,
                 sort_order,
             }| ViewRoom {
                view_id: view_id.into(),
                room_id: room_id.into(),
                order: sort_order,
            },
        )
        .collect())
}

fn rooms_of_view(conn: &mut SqliteConnection, view_id: &str) -> Result<Vec<Room>> {
    use schema::{rooms::dsl as room_dsl, view_rooms::dsl as view_room_dsl};
    Ok(schema::view_rooms::table
        .inner_join(schema::rooms::table.on(room_dsl::id.eq(view_room_dsl::room_id)))
        .filter(view_room_dsl::view_id.eq(view_id))
        .order_by((view_room_dsl::sort_order, view_room_dsl::rowid))
        .select(schema::rooms::all_columns)
        .load::<models::Room>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(room::load_room)
        .collect())
}

fn max_view_room_order(conn: &mut SqliteConnection, view_id: &str) -> Result<Option<i32>> {
    use schema::view_rooms::dsl;
    schema::view_rooms::table
        .filter(dsl::view_id.eq(view_id))
        .select(diesel::dsl::max(dsl::sort_order))
        .first::<Option<i32>>(conn)
        .map_err(from_diesel_err)
}

fn add_view_rooms(conn: &mut SqliteConnection, view_rooms: &[ViewRoom]) -> Result<()> {
    let new_view_rooms: Vec<_> = view_rooms
        .iter()
        .map(|vr| models::NewViewRoom {
            view_id: vr.view_id.as_str(),
            room_id: vr.room_id.as_str(),
            sort_order: vr.order,
        })
        .collect();
    if new_view_rooms.is_empty() {
        return Ok(());
    }
    diesel::insert_into(schema::view_rooms::table)
        .values(&new_view_rooms)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_view_rooms(conn: &mut SqliteConnection, view_id: &str) -> Result<usize> {
    use schema::view_rooms::dsl;
    diesel::delete(schema::view_rooms::table.filter(dsl::view_id.eq(view_id)))
        .execute(conn)
        .map_err(from_diesel_err)
}

fn move_view_rooms_of_event(
    conn: &mut SqliteConnection,
    event_id: &str,
    from_room_id: &str,
    to_room_id: &str,
) -> Result<usize> {
    use schema::{view_rooms::dsl, views::dsl as view_dsl};
    let views_of_event = schema::views::table
        .filter(view_dsl::event_id.eq(event_id))
        .select(view_dsl::id);
    diesel::update(
        schema::view_rooms::table
            .filter(dsl::room_id.eq(from_room_id))
            .filter(dsl::view_id.eq_any(views_of_event)),
    )
    .set(dsl::room_id.eq(to_room_id))
    .execute(conn)
    .map_err(from_diesel_err)
}
