use super::*;

impl CategoryRepo for DbReadWrite<'_> {
    fn create_category(&self, category: &Category) -> Result<()> {
        create_category(&mut self.conn.borrow_mut(), category)
    }
    fn get_category(&self, id: &str) -> Result<Category> {
        get_category(&mut self.conn.borrow_mut(), id)
    }
}

impl CategoryRepo for DbConnection<'_> {
    fn create_category(&self, category: &Category) -> Result<()> {
        create_category(&mut self.conn.borrow_mut(), category)
    }
    fn get_category(&self, id: &str) -> Result<Category> {
        get_category(&mut self.conn.borrow_mut(), id)
    }
}

impl CategoryRepo for DbReadOnly<'_> {
    fn create_category(&self, _category: &Category) -> Result<()> {
        unreachable!();
    }
    fn get_category(&self, id: &str) -> Result<Category> {
        get_category(&mut self.conn.borrow_mut(), id)
    }
}

fn create_category(conn: &mut SqliteConnection, category: &Category) -> Result<()> {
    let new_category = models::NewCategory {
        id: category.id.as_str(),
        event_id: category.event_id.as_str(),
        title: &category.title,
    };
    diesel::insert_into(schema::categories::table)
        .values(&new_category)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_category(conn: &mut SqliteConnection, id: &str) -> Result<Category> {
    use schema::categories::dsl;
    let models::Category {
        rowid: _,
        id,
        event_id,
        title,
    } = schema::categories::table
        .filter(dsl::id.eq(id))
        .first(conn)
        .map_err(from_diesel_err)?;
    Ok(Category {
        id: id.into(),
        event_id: event_id.into(),
        title,
    })
}
