use std::collections::HashMap;

use super::*;
use sched_core::RepoError;

#[derive(Debug, Clone)]
pub struct RoomImport {
    pub name: String,
    pub slug: Option<String>,
    pub order: i32,
    pub notes: String,
}

#[derive(Debug, Clone)]
pub struct ViewImport {
    pub name: String,
    pub public: bool,
    pub order: i32,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    pub room_slugs: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ProgrammeImport {
    pub title: String,
    /// Title of the category
    pub category: String,
    pub room_slug: Option<String>,
    pub start_time: Option<Timestamp>,
    pub length: Option<Duration>,
    pub state: ProgrammeState,
}

/// A complete event with its rooms, time slots, views and programme.
#[derive(Debug, Clone)]
pub struct EventImport {
    pub slug: String,
    pub name: String,
    pub categories: Vec<String>,
    pub rooms: Vec<RoomImport>,
    pub time_blocks: Vec<(Timestamp, Timestamp)>,
    pub special_start_times: Vec<Timestamp>,
    pub views: Vec<ViewImport>,
    pub programmes: Vec<ProgrammeImport>,
}

/// Creates a new event from scratch.
///
/// Either everything is imported or nothing.
pub fn import_event(connections: &sqlite::Connections, import: EventImport) -> Result<Event> {
    let slug = import.slug.clone();
    Ok(connections.exclusive()?.transaction(|conn| {
        import_event_with(conn, import).map_err(|err| {
            warn!("Failed to import event {slug}: {err}");
            err
        })
    })?)
}

fn import_event_with<R>(
    repo: &R,
    import: EventImport,
) -> std::result::Result<Event, usecases::Error>
where
    R: EventRepo + CategoryRepo + RoomRepo + ViewRepo + TimeSlotRepo + ProgrammeRepo,
{
    let EventImport {
        slug,
        name,
        categories,
        rooms,
        time_blocks,
        special_start_times,
        views,
        programmes,
    } = import;
    let event = usecases::create_event(repo, usecases::NewEvent { slug, name })?;

    let mut category_ids = HashMap::with_capacity(categories.len());
    for title in categories {
        let category = usecases::create_category(repo, &event.id, &title)?;
        category_ids.insert(title, category.id);
    }

    for RoomImport {
        name,
        slug,
        order,
        notes,
    } in rooms
    {
        usecases::create_room(
            repo,
            usecases::NewRoom {
                event_id: Some(event.id.clone()),
                name,
                slug,
                order,
                notes,
            },
        )?;
    }

    for (start_time, end_time) in time_blocks {
        usecases::create_time_block(
            repo,
            usecases::NewTimeBlock {
                event_id: event.id.clone(),
                start_time,
                end_time,
            },
        )?;
    }
    for start_time in special_start_times {
        usecases::create_special_start_time(repo, &event.id, start_time)?;
    }

    for ViewImport {
        name,
        public,
        order,
        start_time,
        end_time,
        room_slugs,
    } in views
    {
        let view = usecases::create_view(
            repo,
            usecases::NewView {
                event_id: event.id.clone(),
                name,
                public,
                order,
                start_time,
                end_time,
            },
        )?;
        let room_ids = usecases::room_ids_by_slugs(repo, &event.id, &room_slugs)?;
        usecases::replace_view_rooms(repo, &view.id, &room_ids)?;
    }

    for ProgrammeImport {
        title,
        category,
        room_slug,
        start_time,
        length,
        state,
    } in programmes
    {
        let Some(category_id) = category_ids.get(&category) else {
            warn!("Programme {title} refers to the unknown category {category}");
            return Err(RepoError::NotFound.into());
        };
        let room_id = match room_slug {
            Some(room_slug) => usecases::room_ids_by_slugs(repo, &event.id, &[room_slug])?
                .into_iter()
                .next(),
            None => None,
        };
        usecases::create_programme(
            repo,
            usecases::NewProgramme {
                category_id: category_id.clone(),
                title,
                room_id,
                start_time,
                length,
                state,
            },
        )?;
    }

    info!("Imported event {}", event.slug);
    Ok(event)
}
