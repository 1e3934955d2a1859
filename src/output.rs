use sched_application::prelude::Schedule;
use sched_boundary as json;
use sched_core::{
    entities::{Room, View},
    usecases::{ScheduleCell, ScheduleRow},
};
use time::UtcOffset;

const CONTINUED: &str = "|";
const GAP: &str = "...";

pub fn schedule_to_json(schedule: Schedule) -> json::Schedule {
    let Schedule {
        event,
        view_name,
        rooms,
        rows,
    } = schedule;
    json::Schedule {
        event: event.slug,
        view: view_name,
        rooms: rooms.into_iter().map(json::Room::from).collect(),
        rows: rows.into_iter().map(row_to_json).collect(),
    }
}

fn row_to_json(row: ScheduleRow) -> json::ScheduleRow {
    let ScheduleRow {
        start_time,
        incontinuity,
        cells,
    } = row;
    json::ScheduleRow {
        start_time: start_time.into(),
        incontinuity,
        cells: cells.into_iter().map(cell_to_json).collect(),
    }
}

fn cell_to_json(cell: ScheduleCell) -> json::ScheduleCell {
    match cell {
        ScheduleCell::Empty { room_id } => json::ScheduleCell::Empty {
            room_id: room_id.into(),
        },
        ScheduleCell::Programme {
            room_id,
            programme,
            rowspan,
        } => json::ScheduleCell::Programme {
            room_id: room_id.into(),
            programme: programme.into(),
            rowspan,
        },
    }
}

/// Renders the schedule as a plain text table with one column per room.
///
/// Rooms that are occupied by a programme of an earlier row are
/// marked as continued.
pub fn render_schedule_table(schedule: &Schedule, offset: UtcOffset) -> String {
    let header = std::iter::once("Time".to_string())
        .chain(schedule.rooms.iter().map(|r| r.name.clone()))
        .collect::<Vec<_>>();
    let mut lines = vec![(false, header)];
    for row in &schedule.rows {
        let mut columns = vec![row.start_time.format_with_offset(offset)];
        columns.extend(schedule.rooms.iter().map(|room| column_text(row, room)));
        lines.push((row.incontinuity, columns));
    }
    let widths = column_widths(lines.iter().map(|(_, columns)| columns));
    let mut table = String::new();
    for (incontinuity, columns) in lines {
        if incontinuity {
            table.push_str(GAP);
            table.push('\n');
        }
        let line = columns
            .iter()
            .zip(&widths)
            .map(|(text, width)| format!("{text:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ");
        table.push_str(line.trim_end());
        table.push('\n');
    }
    table
}

fn column_text(row: &ScheduleRow, room: &Room) -> String {
    match row.cells.iter().find(|cell| cell.room_id() == &room.id) {
        Some(ScheduleCell::Programme {
            programme, rowspan, ..
        }) if *rowspan > 1 => format!("{} ({rowspan})", programme.title),
        Some(ScheduleCell::Programme { programme, .. }) => programme.title.clone(),
        Some(ScheduleCell::Empty { .. }) => String::new(),
        None => CONTINUED.to_string(),
    }
}

fn column_widths<'a>(lines: impl Iterator<Item = &'a Vec<String>>) -> Vec<usize> {
    let mut widths = Vec::<usize>::new();
    for columns in lines {
        for (i, text) in columns.iter().enumerate() {
            let len = text.chars().count();
            match widths.get_mut(i) {
                Some(width) => *width = (*width).max(len),
                None => widths.push(len),
            }
        }
    }
    widths
}

pub fn render_views(views: &[View]) -> String {
    views
        .iter()
        .map(|view| {
            format!(
                "{}\t{}\t{}\n",
                view.id,
                view.name,
                if view.public { "public" } else { "private" }
            )
        })
        .collect()
}
