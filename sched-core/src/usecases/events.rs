use super::prelude::*;
use crate::{repositories::Error as RepoError, util::slug};

#[derive(Debug, Clone)]
pub struct NewEvent {
    pub slug: String,
    pub name: String,
}

pub fn create_event<R: EventRepo>(repo: &R, new_event: NewEvent) -> Result<Event> {
    let NewEvent { slug, name } = new_event;
    let name = name.trim().to_owned();
    if name.is_empty() {
        return Err(Error::EventName);
    }
    if !slug::is_valid_slug(&slug) {
        return Err(Error::Slug);
    }
    match repo.get_event_by_slug(&slug) {
        Ok(_) => return Err(Error::EventExists),
        Err(RepoError::NotFound) => {}
        Err(err) => return Err(err.into()),
    }
    let event = Event {
        id: Id::new(),
        slug,
        name,
    };
    log::debug!("Creating event {}", event.slug);
    repo.create_event(&event)?;
    Ok(event)
}

pub fn get_event_by_slug<R: EventRepo>(repo: &R, slug: &str) -> Result<Event> {
    Ok(repo.get_event_by_slug(slug)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    #[test]
    fn create_events_with_unique_slugs() {
        let db = MockDb::default();
        let event = create_event(
            &db,
            NewEvent {
                slug: "tracon-2026".into(),
                name: " Tracon 2026 ".into(),
            },
        )
        .unwrap();
        assert_eq!("Tracon 2026", event.name);
        assert_eq!(event, get_event_by_slug(&db, "tracon-2026").unwrap());
        assert!(matches!(
            create_event(
                &db,
                NewEvent {
                    slug: "tracon-2026".into(),
                    name: "Again".into(),
                }
            ),
            Err(Error::EventExists)
        ));
        assert!(matches!(
            create_event(
                &db,
                NewEvent {
                    slug: "Tracon 2026".into(),
                    name: "Tracon".into(),
                }
            ),
            Err(Error::Slug)
        ));
    }
}
