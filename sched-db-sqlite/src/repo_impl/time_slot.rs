use super::*;

impl TimeSlotRepo for DbReadWrite<'_> {
    fn create_time_block(&self, time_block: &TimeBlock) -> Result<()> {
        create_time_block(&mut self.conn.borrow_mut(), time_block)
    }
    fn create_special_start_time(&self, special_start_time: &SpecialStartTime) -> Result<()> {
        create_special_start_time(&mut self.conn.borrow_mut(), special_start_time)
    }
    fn time_blocks_of_event(&self, event_id: &str) -> Result<Vec<TimeBlock>> {
        time_blocks_of_event(&mut self.conn.borrow_mut(), event_id)
    }
    fn special_start_times_of_event(&self, event_id: &str) -> Result<Vec<SpecialStartTime>> {
        special_start_times_of_event(&mut self.conn.borrow_mut(), event_id)
    }
}

impl TimeSlotRepo for DbConnection<'_> {
    fn create_time_block(&self, time_block: &TimeBlock) -> Result<()> {
        create_time_block(&mut self.conn.borrow_mut(), time_block)
    }
    fn create_special_start_time(&self, special_start_time: &SpecialStartTime) -> Result<()> {
        create_special_start_time(&mut self.conn.borrow_mut(), special_start_time)
    }
    fn time_blocks_of_event(&self, event_id: &str) -> Result<Vec<TimeBlock>> {
        time_blocks_of_event(&mut self.conn.borrow_mut(), event_id)
    }
    fn special_start_times_of_event(&self, event_id: &str) -> Result<Vec<SpecialStartTime>> {
        special_start_times_of_event(&mut self.conn.borrow_mut(), event_id)
    }
}

impl TimeSlotRepo for DbReadOnly<'_> {
    fn create_time_block(&self, _time_block: &TimeBlock) -> Result<()> {
        unreachable!();
    }
    fn create_special_start_time(&self, _special_start_time: &SpecialStartTime) -> Result<()> {
        unreachable!();
    }
    fn time_blocks_of_event(&self, event_id: &str) -> Result<Vec<TimeBlock>> {
        time_blocks_of_event(&mut self.conn.borrow_mut(), event_id)
    }
    fn special_start_times_of_event(&self, event_id: &str) -> Result<Vec<SpecialStartTime>> {
        special_start_times_of_event(&mut self.conn.borrow_mut(), event_id)
    }
}

fn create_time_block(conn: &mut SqliteConnection, time_block: &TimeBlock) -> Result<()> {
    let new_time_block = models::NewTimeBlock {
        id: time_block.id.as_str(),
        event_id: time_block.event_id.as_str(),
        start_time: store_timestamp(time_block.start_time),
        end_time: store_timestamp(time_block.end_time),
    };
    diesel::insert_into(schema::time_blocks::table)
        .values(&new_time_block)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn time_blocks_of_event(conn: &mut SqliteConnection, event_id: &str) -> Result<Vec<TimeBlock>> {
    use schema::time_blocks::dsl;
    Ok(schema::time_blocks::table
        .filter(dsl::event_id.eq(event_id))
        .order_by((dsl::start_time, dsl::rowid))
        .load::<models::TimeBlock>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::TimeBlock {
                 rowid: _,
                 id,
                 event_id,
                 start_time,
                 end_time,
             }| TimeBlock {
                id: id.into(),
                event_id: event_id.into(),
                start_time: load_timestamp(start_time),
                end_time: load_timestamp(end_time),
            },
        )
        .collect())
}

fn create_special_start_time(
    conn: &mut SqliteConnection,
    special_start_time: &SpecialStartTime,
) -> Result<()> {
    let new_special_start_time = models::NewSpecialStartTime {
        id: special_start_time.id.as_str(),
        event_id: special_start_time.event_id.as_str(),
        start_time: store_timestamp(special_start_time.start_time),
    };
    // A unique violation is reported as `AlreadyExists`
    diesel::insert_into(schema::special_start_times::table)
        .values(&new_special_start_time)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn special_start_times_of_event(
    conn: &mut SqliteConnection,
    event_id: &str,
) -> Result<Vec<SpecialStartTime>> {
    use schema::special_start_times::dsl;
    Ok(schema::special_start_times::table
        .filter(dsl::event_id.eq(event_id))
        .order_by(dsl::start_time)
        .load::<models::SpecialStartTime>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(
            |models::SpecialStartTime {
                 rowid: _,
                 id,
                 event_id,
                 start_time,
             }| SpecialStartTime {
                id: id.into(),
                event_id: event_id.into(),
                start_time: load_timestamp(start_time),
            },
        )
        .collect())
}
