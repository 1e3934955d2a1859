use std::collections::HashSet;

use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone)]
pub struct NewView {
    pub event_id: Id,
    pub name: String,
    pub public: bool,
    pub order: i32,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
}

pub fn create_view<R>(repo: &R, new_view: NewView) -> Result<View>
where
    R: EventRepo + ViewRepo,
{
    let NewView {
        event_id,
        name,
        public,
        order,
        start_time,
        end_time,
    } = new_view;
    let name = name.trim().to_owned();
    if !validate::is_valid_view_name(&name) {
        return Err(Error::ViewName);
    }
    let event = repo.get_event(event_id.as_str())?;
    let view = View {
        id: Id::new(),
        event_id: event.id,
        name,
        public,
        order,
        start_time,
        end_time,
    };
    if view.window().is_inverted() {
        log::info!("View {} will not show any time slots", view.name);
    }
    log::debug!("Creating view {} ({})", view.name, view.id);
    repo.create_view(&view)?;
    Ok(view)
}

pub fn views_of_event<R: ViewRepo>(
    repo: &R,
    event_id: &Id,
    public_only: bool,
) -> Result<Vec<View>> {
    let mut views = repo.views_of_event(event_id.as_str())?;
    if public_only {
        views.retain(|v| v.public);
    }
    Ok(views)
}

pub fn load_view<R: ViewRepo>(repo: &R, view_id: &Id) -> Result<View> {
    Ok(repo.get_view(view_id.as_str())?)
}

pub fn view_rooms<R: ViewRepo>(repo: &R, view_id: &Id) -> Result<Vec<ViewRoom>> {
    Ok(repo.view_rooms(view_id.as_str())?)
}

pub fn rooms_of_view<R: ViewRepo>(repo: &R, view_id: &Id) -> Result<Vec<Room>> {
    Ok(repo.rooms_of_view(view_id.as_str())?)
}

fn load_rooms_of_event<R: RoomRepo>(
    repo: &R,
    event_id: &Id,
    room_ids: &[Id],
) -> Result<Vec<Room>> {
    room_ids
        .iter()
        .map(|id| {
            let room = repo.get_room(id.as_str())?;
            if !room.belongs_to(event_id) {
                return Err(Error::RoomOfOtherEvent);
            }
            Ok(room)
        })
        .collect()
}

/// Replaces all rooms of a view.
///
/// The rooms are ordered as given. Must be executed within
/// a transaction, otherwise readers might see a view without
/// any rooms.
pub fn replace_view_rooms<R>(repo: &R, view_id: &Id, room_ids: &[Id]) -> Result<Vec<ViewRoom>>
where
    R: RoomRepo + ViewRepo,
{
    let mut unique = HashSet::with_capacity(room_ids.len());
    if !room_ids.iter().all(|id| unique.insert(id)) {
        return Err(Error::DuplicateRoom);
    }
    let view = repo.get_view(view_id.as_str())?;
    let rooms = load_rooms_of_event(repo, &view.event_id, room_ids)?;
    let view_rooms: Vec<_> = rooms
        .into_iter()
        .zip(ViewRoom::sequential_orders(room_ids.len()))
        .map(|(room, order)| ViewRoom {
            view_id: view.id.clone(),
            room_id: room.id,
            order,
        })
        .collect();
    let deleted = repo.delete_view_rooms(view.id.as_str())?;
    repo.add_view_rooms(&view_rooms)?;
    log::info!(
        "Replaced {} room(s) of view {} by {} room(s)",
        deleted,
        view.name,
        view_rooms.len()
    );
    Ok(view_rooms)
}

/// Adds a room after all other rooms of the view.
pub fn append_room_to_view<R>(repo: &R, view_id: &Id, room_id: &Id) -> Result<ViewRoom>
where
    R: RoomRepo + ViewRepo,
{
    let view = repo.get_view(view_id.as_str())?;
    let room = repo.get_room(room_id.as_str())?;
    if !room.belongs_to(&view.event_id) {
        return Err(Error::RoomOfOtherEvent);
    }
    if repo
        .view_rooms(view.id.as_str())?
        .iter()
        .any(|vr| vr.room_id == room.id)
    {
        return Err(Error::RoomAlreadyInView);
    }
    let view_room = ViewRoom {
        order: ViewRoom::next_order(repo.max_view_room_order(view.id.as_str())?),
        view_id: view.id,
        room_id: room.id,
    };
    repo.add_view_rooms(std::slice::from_ref(&view_room))?;
    Ok(view_room)
}

/// The event of the view that the room is shown in.
pub fn event_of_view_room<R>(repo: &R, view_room: &ViewRoom) -> Result<Event>
where
    R: EventRepo + ViewRepo,
{
    let view = repo.get_view(view_room.view_id.as_str())?;
    Ok(repo.get_event(view.event_id.as_str())?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    fn new_view(event_id: &Id, name: &str) -> NewView {
        NewView {
            event_id: event_id.clone(),
            name: name.into(),
            public: true,
            order: 0,
            start_time: None,
            end_time: None,
        }
    }

    fn orders(db: &MockDb, view: &View) -> Vec<(String, i32)> {
        let rooms = db.rooms.borrow();
        view_rooms(db, &view.id)
            .unwrap()
            .into_iter()
            .map(|vr| {
                let room = rooms.iter().find(|r| r.id == vr.room_id).unwrap();
                (room.name.clone(), vr.order)
            })
            .collect()
    }

    #[test]
    fn create_views_and_list_them_in_order() {
        let db = MockDb::default();
        let event = db.add_event("tracon");
        let b = create_view(
            &db,
            NewView {
                order: 10,
                ..new_view(&event.id, "B")
            },
        )
        .unwrap();
        let a = create_view(&db, new_view(&event.id, " A ")).unwrap();
        let hidden = create_view(
            &db,
            NewView {
                public: false,
                order: 5,
                ..new_view(&event.id, "Hidden")
            },
        )
        .unwrap();
        assert_eq!("A", a.name);
        assert_eq!(
            vec![a.clone(), hidden, b.clone()],
            views_of_event(&db, &event.id, false).unwrap()
        );
        assert_eq!(vec![a, b], views_of_event(&db, &event.id, true).unwrap());
    }

    #[test]
    fn reject_invalid_view_names() {
        let db = MockDb::default();
        let event = db.add_event("tracon");
        assert!(matches!(
            create_view(&db, new_view(&event.id, "")),
            Err(Error::ViewName)
        ));
        assert!(matches!(
            create_view(&db, new_view(&event.id, &"x".repeat(33))),
            Err(Error::ViewName)
        ));
        assert!(create_view(&db, new_view(&event.id, &"x".repeat(32))).is_ok());
    }

    #[test]
    fn accept_inverted_windows() {
        let db = MockDb::default();
        let event = db.add_event("tracon");
        let view = create_view(
            &db,
            NewView {
                start_time: Some(at(12, 0)),
                end_time: Some(at(10, 0)),
                ..new_view(&event.id, "Inverted")
            },
        )
        .unwrap();
        assert!(view.window().is_inverted());
    }

    #[test]
    fn replace_rooms_of_a_view() {
        let db = MockDb::default();
        let event = db.add_event("tracon");
        let a = db.add_room(&event.id, "A", 0);
        let b = db.add_room(&event.id, "B", 0);
        let c = db.add_room(&event.id, "C", 0);
        let view = create_view(&db, new_view(&event.id, "Main")).unwrap();

        replace_view_rooms(&db, &view.id, &[a.id.clone(), b.id.clone(), c.id.clone()]).unwrap();
        assert_eq!(
            vec![
                ("A".to_string(), 10),
                ("B".to_string(), 20),
                ("C".to_string(), 30)
            ],
            orders(&db, &view)
        );

        replace_view_rooms(&db, &view.id, &[c.id.clone(), a.id.clone()]).unwrap();
        assert_eq!(
            vec![("C".to_string(), 10), ("A".to_string(), 20)],
            orders(&db, &view)
        );
        assert!(db.view_rooms.borrow().iter().all(|vr| vr.room_id != b.id));
        assert_eq!(vec![c, a], rooms_of_view(&db, &view.id).unwrap());

        replace_view_rooms(&db, &view.id, &[]).unwrap();
        assert!(view_rooms(&db, &view.id).unwrap().is_empty());
    }

    #[test]
    fn replacing_rooms_keeps_other_views_untouched() {
        let db = MockDb::default();
        let event = db.add_event("tracon");
        let a = db.add_room(&event.id, "A", 0);
        let first = create_view(&db, new_view(&event.id, "First")).unwrap();
        let second = create_view(&db, new_view(&event.id, "Second")).unwrap();
        replace_view_rooms(&db, &first.id, &[a.id.clone()]).unwrap();
        replace_view_rooms(&db, &second.id, &[a.id.clone()]).unwrap();
        replace_view_rooms(&db, &first.id, &[]).unwrap();
        assert_eq!(vec![("A".to_string(), 10)], orders(&db, &second));
    }

    #[test]
    fn reject_invalid_room_lists() {
        let db = MockDb::default();
        let tracon = db.add_event("tracon");
        let ropecon = db.add_event("ropecon");
        let a = db.add_room(&tracon.id, "A", 0);
        let foreign = db.add_room(&ropecon.id, "Foreign", 0);
        let template = db.add_template_room("Template", 0);
        let view = create_view(&db, new_view(&tracon.id, "Main")).unwrap();
        replace_view_rooms(&db, &view.id, &[a.id.clone()]).unwrap();

        assert!(matches!(
            replace_view_rooms(&db, &view.id, &[a.id.clone(), a.id.clone()]),
            Err(Error::DuplicateRoom)
        ));
        assert!(matches!(
            replace_view_rooms(&db, &view.id, &[a.id.clone(), foreign.id.clone()]),
            Err(Error::RoomOfOtherEvent)
        ));
        assert!(matches!(
            replace_view_rooms(&db, &view.id, &[template.id.clone()]),
            Err(Error::RoomOfOtherEvent)
        ));
        assert!(matches!(
            replace_view_rooms(&db, &view.id, &[Id::new()]),
            Err(Error::Repo(RepoError::NotFound))
        ));
        // The previous rooms are still there
        assert_eq!(vec![("A".to_string(), 10)], orders(&db, &view));
    }

    #[test]
    fn append_rooms_to_a_view() {
        let db = MockDb::default();
        let event = db.add_event("tracon");
        let a = db.add_room(&event.id, "A", 0);
        let b = db.add_room(&event.id, "B", 0);
        let view = create_view(&db, new_view(&event.id, "Main")).unwrap();

        assert_eq!(10, append_room_to_view(&db, &view.id, &a.id).unwrap().order);
        assert!(matches!(
            append_room_to_view(&db, &view.id, &a.id),
            Err(Error::RoomAlreadyInView)
        ));
        db.view_rooms.borrow_mut()[0].order = 55;
        assert_eq!(65, append_room_to_view(&db, &view.id, &b.id).unwrap().order);
        assert_eq!(
            vec![("A".to_string(), 55), ("B".to_string(), 65)],
            orders(&db, &view)
        );
    }

    #[test]
    fn view_rooms_belong_to_the_event_of_their_view() {
        let db = MockDb::default();
        let tracon = db.add_event("tracon");
        db.add_event("ropecon");
        let room = db.add_room(&tracon.id, "A", 0);
        let view = create_view(&db, new_view(&tracon.id, "Main")).unwrap();
        let view_room = append_room_to_view(&db, &view.id, &room.id).unwrap();
        assert_eq!(tracon, event_of_view_room(&db, &view_room).unwrap());
        let orphan = ViewRoom {
            view_id: Id::new(),
            ..view_room
        };
        assert!(matches!(
            event_of_view_room(&db, &orphan),
            Err(Error::Repo(RepoError::NotFound))
        ));
    }
}
