use super::*;

impl ProgrammeRepo for DbReadWrite<'_> {
    fn create_programme(&self, programme: &Programme) -> Result<()> {
        create_programme(&mut self.conn.borrow_mut(), programme)
    }
    fn update_programme(&self, programme: &Programme) -> Result<()> {
        update_programme(&mut self.conn.borrow_mut(), programme)
    }
    fn get_programme(&self, id: &str) -> Result<Programme> {
        get_programme(&mut self.conn.borrow_mut(), id)
    }
    fn scheduled_programmes_in_rooms(
        &self,
        event_id: &str,
        room_ids: &[&str],
    ) -> Result<Vec<Programme>> {
        scheduled_programmes_in_rooms(&mut self.conn.borrow_mut(), event_id, room_ids)
    }
    fn move_programmes_of_event(
        &self,
        event_id: &str,
        from_room_id: &str,
        to_room_id: &str,
    ) -> Result<usize> {
        move_programmes_of_event(&mut self.conn.borrow_mut(), event_id, from_room_id, to_room_id)
    }
}

impl ProgrammeRepo for DbConnection<'_> {
    fn create_programme(&self, programme: &Programme) -> Result<()> {
        create_programme(&mut self.conn.borrow_mut(), programme)
    }
    fn update_programme(&self, programme: &Programme) -> Result<()> {
        update_programme(&mut self.conn.borrow_mut(), programme)
    }
    fn get_programme(&self, id: &str) -> Result<Programme> {
        get_programme(&mut self.conn.borrow_mut(), id)
    }
    fn scheduled_programmes_in_rooms(
        &self,
        event_id: &str,
        room_ids: &[&str],
    ) -> Result<Vec<Programme>> {
        scheduled_programmes_in_rooms(&mut self.conn.borrow_mut(), event_id, room_ids)
    }
    fn move_programmes_of_event(
        &self,
        event_id: &str,
        from_room_id: &str,
        to_room_id: &str,
    ) -> Result<usize> {
        move_programmes_of_event(&mut self.conn.borrow_mut(), event_id, from_room_id, to_room_id)
    }
}

impl ProgrammeRepo for DbReadOnly<'_> {
    fn create_programme(&self, _programme: &Programme) -> Result<()> {
        unreachable!();
    }
    fn update_programme(&self, _programme: &Programme) -> Result<()> {
        unreachable!();
    }
    fn get_programme(&self, id: &str) -> Result<Programme> {
        get_programme(&mut self.conn.borrow_mut(), id)
    }
    fn scheduled_programmes_in_rooms(
        &self,
        event_id: &str,
        room_ids: &[&str],
    ) -> Result<Vec<Programme>> {
        scheduled_programmes_in_rooms(&mut self.conn.borrow_mut(), event_id, room_ids)
    }
    fn move_programmes_of_event(
        &self,
        _event_id: &str,
        _from_room_id: &str,
        _to_room_id: &str,
    ) -> Result<usize> {
        unreachable!();
    }
}

fn load_programme(model: models::Programme) -> Result<Programme> {
    let models::Programme {
        rowid: _,
        id,
        category_id,
        title,
        room_id,
        start_time,
        length_minutes,
        state,
    } = model;
    let state = state
        .parse::<ProgrammeState>()
        .map_err(|_| anyhow!("Invalid programme state: {state}"))?;
    Ok(Programme {
        id: id.into(),
        category_id: category_id.into(),
        title,
        room_id: room_id.map(Into::into),
        start_time: start_time.map(load_timestamp),
        length: length_minutes.map(|minutes| Duration::minutes(minutes.into())),
        state,
    })
}

fn store_length(length: Option<Duration>) -> Result<Option<i32>> {
    length
        .map(|length| {
            i32::try_from(length.whole_minutes())
                .map_err(|_| repo::Error::from(anyhow!("Invalid programme length: {length}")))
        })
        .transpose()
}

fn create_programme(conn: &mut SqliteConnection, programme: &Programme) -> Result<()> {
    let new_programme = models::NewProgramme {
        id: programme.id.as_str(),
        category_id: programme.category_id.as_str(),
        title: &programme.title,
        room_id: programme.room_id.as_ref().map(Id::as_str),
        start_time: programme.start_time.map(store_timestamp),
        length_minutes: store_length(programme.length)?,
        state: programme.state.as_ref(),
    };
    diesel::insert_into(schema::programmes::table)
        .values(&new_programme)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_programme(conn: &mut SqliteConnection, programme: &Programme) -> Result<()> {
    use schema::programmes::dsl;
    let changes = models::NewProgramme {
        id: programme.id.as_str(),
        category_id: programme.category_id.as_str(),
        title: &programme.title,
        room_id: programme.room_id.as_ref().map(Id::as_str),
        start_time: programme.start_time.map(store_timestamp),
        length_minutes: store_length(programme.length)?,
        state: programme.state.as_ref(),
    };
    let target = schema::programmes::table.filter(dsl::id.eq(programme.id.as_str()));
    let count = diesel::update(target)
        .set(&changes)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_programme(conn: &mut SqliteConnection, id: &str) -> Result<Programme> {
    use schema::programmes::dsl;
    let programme = schema::programmes::table
        .filter(dsl::id.eq(id))
        .first::<models::Programme>(conn)
        .map_err(from_diesel_err)?;
    load_programme(programme)
}

fn scheduled_programmes_in_rooms(
    conn: &mut SqliteConnection,
    event_id: &str,
    room_ids: &[&str],
) -> Result<Vec<Programme>> {
    use schema::{categories::dsl as category_dsl, programmes::dsl};
    let categories_of_event = schema::categories::table
        .filter(category_dsl::event_id.eq(event_id))
        .select(category_dsl::id);
    schema::programmes::table
        .filter(dsl::category_id.eq_any(categories_of_event))
        .filter(dsl::room_id.eq_any(room_ids.to_vec()))
        .filter(dsl::start_time.is_not_null())
        .filter(dsl::length_minutes.is_not_null())
        .order_by((dsl::start_time, dsl::rowid))
        .load::<models::Programme>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_programme)
        .collect()
}

fn move_programmes_of_event(
    conn: &mut SqliteConnection,
    event_id: &str,
    from_room_id: &str,
    to_room_id: &str,
) -> Result<usize> {
    use schema::{categories::dsl as category_dsl, programmes::dsl};
    let categories_of_event = schema::categories::table
        .filter(category_dsl::event_id.eq(event_id))
        .select(category_dsl::id);
    diesel::update(
        schema::programmes::table
            .filter(dsl::room_id.eq(from_room_id))
            .filter(dsl::category_id.eq_any(categories_of_event)),
    )
    .set(dsl::room_id.eq(to_room_id))
    .execute(conn)
    .map_err(from_diesel_err)
}
