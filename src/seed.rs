use anyhow::{anyhow, Result};
use sched_application::prelude::{EventImport, ProgrammeImport, RoomImport, ViewImport};
use sched_boundary as json;
use sched_core::entities::{Duration, ProgrammeState, Timestamp};
use std::{fs, path::Path};

/// Imported programme items without an explicit state are published.
const DEFAULT_SEED_STATE: ProgrammeState = ProgrammeState::Published;

pub fn load_event_seed(file_path: &Path) -> Result<json::EventSeed> {
    let seed = fs::read_to_string(file_path)
        .map_err(|err| anyhow!("Unable to read {}: {err}", file_path.display()))?;
    Ok(serde_json::from_str(&seed)?)
}

pub fn event_import_from_seed(seed: json::EventSeed) -> Result<EventImport> {
    let json::EventSeed {
        slug,
        name,
        categories,
        rooms,
        time_blocks,
        special_start_times,
        views,
        programmes,
    } = seed;
    let rooms = rooms.into_iter().map(room_import_from_seed).collect();
    let time_blocks = time_blocks
        .into_iter()
        .map(|block| (Timestamp::from(block.start_time), Timestamp::from(block.end_time)))
        .collect();
    let special_start_times = special_start_times
        .into_iter()
        .map(Timestamp::from)
        .collect();
    let views = views.into_iter().map(view_import_from_seed).collect();
    let programmes = programmes
        .into_iter()
        .map(programme_import_from_seed)
        .collect::<Result<_>>()?;
    Ok(EventImport {
        slug,
        name,
        categories,
        rooms,
        time_blocks,
        special_start_times,
        views,
        programmes,
    })
}

fn room_import_from_seed(seed: json::RoomSeed) -> RoomImport {
    let json::RoomSeed {
        name,
        slug,
        order,
        notes,
    } = seed;
    RoomImport {
        name,
        slug,
        order,
        notes,
    }
}

fn view_import_from_seed(seed: json::ViewSeed) -> ViewImport {
    let json::ViewSeed {
        name,
        public,
        order,
        start_time,
        end_time,
        rooms,
    } = seed;
    ViewImport {
        name,
        public,
        order,
        start_time: start_time.map(Timestamp::from),
        end_time: end_time.map(Timestamp::from),
        room_slugs: rooms,
    }
}

fn programme_import_from_seed(seed: json::ProgrammeSeed) -> Result<ProgrammeImport> {
    let json::ProgrammeSeed {
        title,
        category,
        room,
        start_time,
        length_minutes,
        state,
    } = seed;
    let state = match state {
        Some(state) => state
            .parse::<ProgrammeState>()
            .map_err(|_| anyhow!("Invalid state '{state}' of programme '{title}'"))?,
        None => DEFAULT_SEED_STATE,
    };
    let length = length_minutes
        .map(|minutes| {
            i32::try_from(minutes)
                .ok()
                .filter(|minutes| *minutes > 0)
                .map(|minutes| Duration::minutes(minutes.into()))
                .ok_or_else(|| anyhow!("Invalid length of programme '{title}': {minutes}"))
        })
        .transpose()?;
    Ok(ProgrammeImport {
        title,
        category,
        room_slug: room,
        start_time: start_time.map(Timestamp::from),
        length,
        state,
    })
}
