use super::prelude::*;
use crate::util::validate;

pub fn create_category<R>(repo: &R, event_id: &Id, title: &str) -> Result<Category>
where
    R: EventRepo + CategoryRepo,
{
    let title = title.trim();
    if !validate::is_valid_title(title) {
        return Err(Error::Title);
    }
    let event = repo.get_event(event_id.as_str())?;
    let category = Category {
        id: Id::new(),
        event_id: event.id,
        title: title.to_owned(),
    };
    repo.create_category(&category)?;
    Ok(category)
}

#[derive(Debug, Clone)]
pub struct NewProgramme {
    pub category_id: Id,
    pub title: String,
    pub room_id: Option<Id>,
    pub start_time: Option<Timestamp>,
    pub length: Option<Duration>,
    pub state: ProgrammeState,
}

// The room of a programme must belong to the event of its category.
fn check_programme<R>(repo: &R, programme: &Programme) -> Result<()>
where
    R: CategoryRepo + RoomRepo,
{
    if !validate::is_valid_title(&programme.title) {
        return Err(Error::Title);
    }
    let category = repo.get_category(programme.category_id.as_str())?;
    if let Some(room_id) = &programme.room_id {
        let room = repo.get_room(room_id.as_str())?;
        if !room.belongs_to(&category.event_id) {
            return Err(Error::RoomOfOtherEvent);
        }
    }
    Ok(())
}

pub fn create_programme<R>(repo: &R, new_programme: NewProgramme) -> Result<Programme>
where
    R: CategoryRepo + RoomRepo + ProgrammeRepo,
{
    let NewProgramme {
        category_id,
        title,
        room_id,
        start_time,
        length,
        state,
    } = new_programme;
    let programme = Programme {
        id: Id::new(),
        category_id,
        title: title.trim().to_owned(),
        room_id,
        start_time,
        length,
        state,
    };
    check_programme(repo, &programme)?;
    log::debug!("Creating programme {} ({})", programme.title, programme.id);
    repo.create_programme(&programme)?;
    Ok(programme)
}

pub fn update_programme<R>(repo: &R, programme: Programme) -> Result<Programme>
where
    R: CategoryRepo + RoomRepo + ProgrammeRepo,
{
    // Fails if the programme does not exist
    repo.get_programme(programme.id.as_str())?;
    check_programme(repo, &programme)?;
    repo.update_programme(&programme)?;
    Ok(programme)
}
