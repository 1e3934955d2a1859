use super::*;

impl EventRepo for DbReadWrite<'_> {
    fn create_event(&self, event: &Event) -> Result<()> {
        create_event(&mut self.conn.borrow_mut(), event)
    }
    fn get_event(&self, id: &str) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn get_event_by_slug(&self, slug: &str) -> Result<Event> {
        get_event_by_slug(&mut self.conn.borrow_mut(), slug)
    }
}

impl EventRepo for DbConnection<'_> {
    fn create_event(&self, event: &Event) -> Result<()> {
        create_event(&mut self.conn.borrow_mut(), event)
    }
    fn get_event(&self, id: &str) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn get_event_by_slug(&self, slug: &str) -> Result<Event> {
        get_event_by_slug(&mut self.conn.borrow_mut(), slug)
    }
}

impl EventRepo for DbReadOnly<'_> {
    fn create_event(&self, _event: &Event) -> Result<()> {
        unreachable!();
    }
    fn get_event(&self, id: &str) -> Result<Event> {
        get_event(&mut self.conn.borrow_mut(), id)
    }
    fn get_event_by_slug(&self, slug: &str) -> Result<Event> {
        get_event_by_slug(&mut self.conn.borrow_mut(), slug)
    }
}

fn load_event(model: models::Event) -> Event {
    let models::Event {
        rowid: _,
        id,
        slug,
        name,
    } = model;
    Event {
        id: id.into(),
        slug,
        name,
    }
}

fn create_event(conn: &mut SqliteConnection, event: &Event) -> Result<()> {
    let new_event = models::NewEvent {
        id: event.id.as_str(),
        slug: &event.slug,
        name: &event.name,
    };
    diesel::insert_into(schema::events::table)
        .values(&new_event)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_event(conn: &mut SqliteConnection, id: &str) -> Result<Event> {
    use schema::events::dsl;
    let event = schema::events::table
        .filter(dsl::id.eq(id))
        .first::<models::Event>(conn)
        .map_err(from_diesel_err)?;
    Ok(load_event(event))
}

fn get_event_by_slug(conn: &mut SqliteConnection, slug: &str) -> Result<Event> {
    use schema::events::dsl;
    let event = schema::events::table
        .filter(dsl::slug.eq(slug))
        .first::<models::Event>(conn)
        .map_err(from_diesel_err)?;
    Ok(load_event(event))
}
