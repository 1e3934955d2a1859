use std::{cell::Cell, collections::HashMap};

use time::UtcOffset;

use super::{load_time_slot_calendar, prelude::*, ScheduleView, TimeSlotCalendar};
use crate::gateways::{admin::ProgrammeAdminCheck, logger::ScheduleLogger, messages::UserMessages};

/// Rows that are further apart are marked as incontinuous.
pub const MAX_CONTINUOUS_GAP: Duration = Duration::HOUR;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleCell {
    Empty {
        room_id: Id,
    },
    Programme {
        room_id: Id,
        programme: Programme,
        /// Number of rows the programme spans
        rowspan: usize,
    },
}

impl ScheduleCell {
    pub fn room_id(&self) -> &Id {
        match self {
            Self::Empty { room_id } | Self::Programme { room_id, .. } => room_id,
        }
    }

    pub fn programme(&self) -> Option<&Programme> {
        match self {
            Self::Empty { .. } => None,
            Self::Programme { programme, .. } => Some(programme),
        }
    }
}

/// A single time slot of the schedule.
///
/// Rooms that are occupied by a programme that started in
/// a previous row have no cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    pub start_time: Timestamp,
    /// There is a gap of more than an hour to the previous row.
    pub incontinuity: bool,
    pub cells: Vec<ScheduleCell>,
}

#[derive(Debug, Clone, Copy)]
pub struct ScheduleOptions {
    pub visibility: Visibility,
    /// Used for formatting times in messages.
    pub display_offset: UtcOffset,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            visibility: Visibility::PublishedOnly,
            display_offset: UtcOffset::UTC,
        }
    }
}

/// The user who requested the schedule.
pub struct Viewer<'a> {
    pub username: &'a str,
    pub admin_check: &'a dyn ProgrammeAdminCheck,
    pub messages: &'a dyn UserMessages,
}

impl std::fmt::Debug for Viewer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewer")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

// All scheduled programmes of a single room, ordered
// by start time and then by insertion.
#[derive(Default)]
struct RoomProgrammes<'a> {
    all: Vec<&'a Programme>,
    published: Vec<&'a Programme>,
}

impl<'a> RoomProgrammes<'a> {
    fn push(&mut self, programme: &'a Programme) {
        if programme.state.is_published() {
            self.published.push(programme);
        }
        self.all.push(programme);
    }

    fn starting_at(&self, t: Timestamp, visibility: Visibility) -> Vec<&'a Programme> {
        let first = self.all.partition_point(|p| p.start_time < Some(t));
        self.all[first..]
            .iter()
            .take_while(|p| p.start_time == Some(t))
            .filter(|p| visibility.admits(p.state))
            .copied()
            .collect()
    }

    // Only the latest published programme that started before `t`
    // is considered, even if an earlier one is still running.
    fn is_occupied_at(&self, t: Timestamp) -> bool {
        let before = self.published.partition_point(|p| p.start_time < Some(t));
        let Some(latest) = before.checked_sub(1).map(|i| self.published[i]) else {
            return false;
        };
        let first_of_latest = self
            .published
            .partition_point(|p| p.start_time < latest.start_time);
        self.published[first_of_latest].continues_at(t)
    }
}

struct ConflictReporter<'a> {
    event_id: &'a Id,
    display_offset: UtcOffset,
    logger: &'a dyn ScheduleLogger,
    viewer: Option<&'a Viewer<'a>>,
    is_admin: Cell<Option<bool>>,
}

impl ConflictReporter<'_> {
    fn report(&self, room: &Room, t: Timestamp, programmes: &[&Programme]) {
        let time = t.format_with_offset(self.display_offset);
        self.logger.warn(&format!(
            "Room {} has {} programmes starting at {}",
            room.name,
            programmes.len(),
            time
        ));
        let Some(viewer) = self.viewer else {
            return;
        };
        if self.viewer_is_admin(viewer) {
            let titles = programmes
                .iter()
                .map(|p| p.title.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            viewer.messages.warning(&format!(
                "Overlapping programmes in room {} at {}: {}",
                room.name, time, titles
            ));
        }
    }

    fn viewer_is_admin(&self, viewer: &Viewer) -> bool {
        if let Some(is_admin) = self.is_admin.get() {
            return is_admin;
        }
        let is_admin = viewer
            .admin_check
            .is_programme_admin(viewer.username, self.event_id);
        self.is_admin.set(Some(is_admin));
        is_admin
    }
}

/// Builds the rows of the schedule grid of a view.
///
/// Programmes of the view's rooms are loaded at once and
/// resolved in memory. Multiple programmes starting in the same
/// room at the same time are reported but never fail the build:
/// the first one (by start time and insertion) is shown.
pub fn build_schedule<R, V>(
    repo: &R,
    view: &V,
    options: &ScheduleOptions,
    viewer: Option<&Viewer>,
    logger: &dyn ScheduleLogger,
) -> Result<Vec<ScheduleRow>>
where
    R: TimeSlotRepo + ProgrammeRepo,
    V: ScheduleView + ?Sized,
{
    let event_id = view.event_id();
    let window = view.window();
    let calendar = load_time_slot_calendar(repo, event_id.as_str())?;
    let time_points = calendar.start_times(window);
    if time_points.is_empty() {
        log::debug!("No time slots to show for event {event_id}");
        return Ok(vec![]);
    }

    let rooms = view.rooms();
    let room_ids: Vec<_> = rooms.iter().map(|r| r.id.as_str()).collect();
    let programmes = if room_ids.is_empty() {
        vec![]
    } else {
        repo.scheduled_programmes_in_rooms(event_id.as_str(), &room_ids)?
    };
    log::debug!(
        "Building schedule of event {} with {} time slot(s), {} room(s) and {} programme(s)",
        event_id,
        time_points.len(),
        rooms.len(),
        programmes.len()
    );

    let mut programmes_by_room: HashMap<&str, RoomProgrammes> = HashMap::new();
    for programme in &programmes {
        if let (Some(room_id), Some(_)) = (&programme.room_id, programme.end_time()) {
            programmes_by_room
                .entry(room_id.as_str())
                .or_default()
                .push(programme);
        }
    }
    let no_programmes = RoomProgrammes::default();

    let reporter = ConflictReporter {
        event_id,
        display_offset: options.display_offset,
        logger,
        viewer,
        is_admin: Cell::new(None),
    };

    let mut rows = Vec::with_capacity(time_points.len());
    let mut previous_time: Option<Timestamp> = None;
    for t in time_points {
        let incontinuity = previous_time.is_some_and(|prev| t - prev > MAX_CONTINUOUS_GAP);
        previous_time = Some(t);
        let mut cells = Vec::with_capacity(rooms.len());
        for room in rooms {
            let room_programmes = programmes_by_room
                .get(room.id.as_str())
                .unwrap_or(&no_programmes);
            if let Some(cell) = resolve_cell(
                &calendar,
                window,
                room,
                t,
                room_programmes,
                options.visibility,
                &reporter,
            ) {
                cells.push(cell);
            }
        }
        rows.push(ScheduleRow {
            start_time: t,
            incontinuity,
            cells,
        });
    }
    Ok(rows)
}

fn resolve_cell(
    calendar: &TimeSlotCalendar,
    window: TimeWindow,
    room: &Room,
    t: Timestamp,
    room_programmes: &RoomProgrammes,
    visibility: Visibility,
    reporter: &ConflictReporter,
) -> Option<ScheduleCell> {
    let starting = room_programmes.starting_at(t, visibility);
    let programme = match starting.as_slice() {
        [] => {
            if room_programmes.is_occupied_at(t) {
                return None;
            }
            return Some(ScheduleCell::Empty {
                room_id: room.id.clone(),
            });
        }
        [programme] => *programme,
        [first, ..] => {
            reporter.report(room, t, &starting);
            *first
        }
    };
    Some(ScheduleCell::Programme {
        room_id: room.id.clone(),
        programme: programme.clone(),
        rowspan: calendar.rowspan(window, programme),
    })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};
    use crate::usecases::{all_rooms_pseudo_view, AllRoomsPseudoView, NamedView};

    struct Fixture {
        db: MockDb,
        event: Event,
        category: Category,
        hall: Room,
        sauna: Room,
    }

    impl Fixture {
        fn new() -> Self {
            let db = MockDb::default();
            let event = db.add_event("tracon");
            let category = db.add_category(&event.id);
            let hall = db.add_room(&event.id, "Hall", 10);
            let sauna = db.add_room(&event.id, "Sauna", 20);
            Self {
                db,
                event,
                category,
                hall,
                sauna,
            }
        }

        fn add_programme(&self, room: &Room, start: Timestamp, minutes: i64) -> Programme {
            self.add_programme_with_state(room, start, minutes, ProgrammeState::Published)
        }

        fn add_programme_with_state(
            &self,
            room: &Room,
            start: Timestamp,
            minutes: i64,
            state: ProgrammeState,
        ) -> Programme {
            let programme = Programme::build()
                .title(&format!("{} at {}", room.name, start))
                .category(&self.category.id)
                .room(&room.id)
                .start_time(start)
                .length_minutes(minutes)
                .state(state)
                .finish();
            self.db.programmes.borrow_mut().push(programme.clone());
            programme
        }

        fn view(&self) -> AllRoomsPseudoView {
            all_rooms_pseudo_view(&self.db, &self.event.id).unwrap()
        }

        fn build(&self, options: &ScheduleOptions) -> (Vec<ScheduleRow>, RecordingLogger) {
            let logger = RecordingLogger::default();
            let rows = build_schedule(&self.db, &self.view(), options, None, &logger).unwrap();
            (rows, logger)
        }
    }

    fn programme_cell<'a>(row: &'a ScheduleRow, room: &Room) -> Option<(&'a Programme, usize)> {
        row.cells.iter().find_map(|c| match c {
            ScheduleCell::Programme {
                room_id,
                programme,
                rowspan,
            } if room_id == &room.id => Some((programme, *rowspan)),
            _ => None,
        })
    }

    fn has_cell(row: &ScheduleRow, room: &Room) -> bool {
        row.cells.iter().any(|c| c.room_id() == &room.id)
    }

    #[test]
    fn empty_event_has_an_empty_schedule() {
        let f = Fixture::new();
        let (rows, logger) = f.build(&ScheduleOptions::default());
        assert!(rows.is_empty());
        assert!(logger.warnings().is_empty());
    }

    #[test]
    fn rooms_without_programmes_have_empty_cells() {
        let f = Fixture::new();
        f.db.add_time_block(&f.event.id, at(10, 0), at(12, 0));
        let (rows, _) = f.build(&ScheduleOptions::default());
        assert_eq!(3, rows.len());
        for row in &rows {
            assert_eq!(
                vec![
                    ScheduleCell::Empty {
                        room_id: f.hall.id.clone()
                    },
                    ScheduleCell::Empty {
                        room_id: f.sauna.id.clone()
                    },
                ],
                row.cells
            );
        }
    }

    #[test]
    fn continuing_programme_spans_multiple_rows() {
        let f = Fixture::new();
        f.db.add_time_block(&f.event.id, at(10, 0), at(12, 0));
        let p = f.add_programme(&f.hall, at(10, 0), 90);
        let (rows, _) = f.build(&ScheduleOptions::default());

        assert_eq!(Some((&p, 2)), programme_cell(&rows[0], &f.hall));
        assert!(!has_cell(&rows[1], &f.hall));
        assert!(has_cell(&rows[1], &f.sauna));
        assert_eq!(
            Some(&ScheduleCell::Empty {
                room_id: f.hall.id.clone()
            }),
            rows[2].cells.first()
        );
    }

    #[test]
    fn continuing_programme_spans_time_block_boundaries() {
        let f = Fixture::new();
        f.db.add_time_block(&f.event.id, at(10, 0), at(11, 0));
        f.db.add_time_block(&f.event.id, at(12, 0), at(13, 0));
        let p = f.add_programme(&f.hall, at(11, 0), 90);
        let (rows, _) = f.build(&ScheduleOptions::default());
        let times: Vec<_> = rows.iter().map(|r| r.start_time).collect();
        assert_eq!(vec![at(10, 0), at(11, 0), at(12, 0), at(13, 0)], times);
        assert_eq!(Some((&p, 2)), programme_cell(&rows[1], &f.hall));
        assert!(!has_cell(&rows[2], &f.hall));
        assert!(has_cell(&rows[3], &f.hall));
    }

    #[test]
    fn multiple_programmes_at_the_same_time_are_reported() {
        let f = Fixture::new();
        f.db.add_time_block(&f.event.id, at(10, 0), at(12, 0));
        let first = f.add_programme(&f.hall, at(10, 0), 60);
        f.add_programme(&f.hall, at(10, 0), 60);
        let (rows, logger) = f.build(&ScheduleOptions::default());

        assert_eq!(1, logger.warnings().len());
        assert!(logger.warnings()[0].contains("Hall"));
        assert!(logger.warnings()[0].contains("10:00"));
        let programmes: Vec<_> = rows[0]
            .cells
            .iter()
            .filter_map(ScheduleCell::programme)
            .collect();
        assert_eq!(vec![&first], programmes);
    }

    #[test]
    fn only_programme_admins_are_told_about_conflicts() {
        let f = Fixture::new();
        f.db.add_time_block(&f.event.id, at(10, 0), at(12, 0));
        f.add_programme(&f.hall, at(10, 0), 60);
        f.add_programme(&f.hall, at(10, 0), 60);
        f.add_programme(&f.sauna, at(11, 0), 60);
        f.add_programme(&f.sauna, at(11, 0), 60);
        let admins = FixedAdmins::new(&["alice"], &f.event.id);
        let view = f.view();
        let options = ScheduleOptions {
            display_offset: UtcOffset::from_hms(3, 0, 0).unwrap(),
            ..Default::default()
        };

        let messages = RecordingMessages::default();
        let viewer = Viewer {
            username: "alice",
            admin_check: &admins,
            messages: &messages,
        };
        let logger = RecordingLogger::default();
        build_schedule(&f.db, &view, &options, Some(&viewer), &logger).unwrap();
        assert_eq!(2, logger.warnings().len());
        assert_eq!(2, messages.warnings().len());
        assert!(messages.warnings()[0].contains("13:00"));
        assert_eq!(1, admins.calls.get());

        let messages = RecordingMessages::default();
        let viewer = Viewer {
            username: "bob",
            admin_check: &admins,
            messages: &messages,
        };
        build_schedule(&f.db, &view, &options, Some(&viewer), &logger).unwrap();
        assert!(messages.warnings().is_empty());
    }

    #[test]
    fn unscheduled_programmes_are_ignored() {
        let f = Fixture::new();
        f.db.add_time_block(&f.event.id, at(10, 0), at(12, 0));
        let unscheduled = Programme {
            length: None,
            ..f.add_programme(&f.hall, at(10, 0), 60)
        };
        f.db.programmes.borrow_mut()[0] = unscheduled;
        let p = f.add_programme(&f.hall, at(11, 0), 60);
        let (rows, logger) = f.build(&ScheduleOptions::default());
        assert!(logger.warnings().is_empty());
        assert!(programme_cell(&rows[0], &f.hall).is_none());
        assert!(has_cell(&rows[0], &f.hall));
        assert_eq!(Some((&p, 1)), programme_cell(&rows[1], &f.hall));
    }

    #[test]
    fn unpublished_programmes_are_hidden_by_default() {
        let f = Fixture::new();
        f.db.add_time_block(&f.event.id, at(10, 0), at(12, 0));
        let p = f.add_programme_with_state(&f.hall, at(10, 0), 60, ProgrammeState::Accepted);

        let (rows, _) = f.build(&ScheduleOptions::default());
        assert!(programme_cell(&rows[0], &f.hall).is_none());

        let options = ScheduleOptions {
            visibility: Visibility::IncludeUnpublished,
            ..Default::default()
        };
        let (rows, _) = f.build(&options);
        assert_eq!(Some((&p, 1)), programme_cell(&rows[0], &f.hall));
    }

    #[test]
    fn continuation_only_considers_published_programmes() {
        let f = Fixture::new();
        f.db.add_time_block(&f.event.id, at(10, 0), at(12, 0));
        f.add_programme_with_state(&f.hall, at(10, 0), 120, ProgrammeState::Offered);
        let options = ScheduleOptions {
            visibility: Visibility::IncludeUnpublished,
            ..Default::default()
        };
        let (rows, _) = f.build(&options);
        assert!(programme_cell(&rows[0], &f.hall).is_some());
        // The unpublished programme does not block the following slot
        assert_eq!(
            Some(&ScheduleCell::Empty {
                room_id: f.hall.id.clone()
            }),
            rows[1].cells.first()
        );
    }

    #[test]
    fn continuation_only_considers_the_latest_programme() {
        let f = Fixture::new();
        f.db.add_time_block(&f.event.id, at(10, 0), at(13, 0));
        f.add_programme(&f.hall, at(10, 0), 180);
        f.add_programme(&f.hall, at(11, 0), 30);
        let (rows, _) = f.build(&ScheduleOptions::default());
        assert!(programme_cell(&rows[0], &f.hall).is_some());
        assert!(programme_cell(&rows[1], &f.hall).is_some());
        assert!(has_cell(&rows[2], &f.hall));
    }

    #[test]
    fn incontinuity_after_gaps_of_more_than_an_hour() {
        let f = Fixture::new();
        f.db.add_time_block(&f.event.id, at(10, 0), at(11, 0));
        f.db.add_time_block(&f.event.id, at(14, 0), at(15, 0));
        f.db.add_special_start_time(&f.event.id, at(16, 0));
        f.db.add_special_start_time(&f.event.id, at(17, 1));
        let (rows, _) = f.build(&ScheduleOptions::default());
        let flags: Vec<_> = rows.iter().map(|r| r.incontinuity).collect();
        assert_eq!(vec![false, false, true, false, false, true], flags);
    }

    #[test]
    fn view_window_restricts_rows_and_rowspans() {
        let f = Fixture::new();
        f.db.add_time_block(&f.event.id, at(10, 0), at(14, 0));
        let p = f.add_programme(&f.sauna, at(11, 0), 180);
        let view = NamedView {
            view: View::build()
                .event(&f.event.id)
                .start_time(at(11, 0))
                .end_time(at(13, 0))
                .finish(),
            rooms: vec![f.sauna.clone()],
        };
        let logger = RecordingLogger::default();
        let rows =
            build_schedule(&f.db, &view, &ScheduleOptions::default(), None, &logger).unwrap();
        let times: Vec<_> = rows.iter().map(|r| r.start_time).collect();
        assert_eq!(vec![at(11, 0), at(12, 0)], times);
        assert_eq!(Some((&p, 2)), programme_cell(&rows[0], &f.sauna));
        assert!(rows[1].cells.is_empty());
    }

    #[test]
    fn inverted_view_window_yields_an_empty_schedule() {
        let f = Fixture::new();
        f.db.add_time_block(&f.event.id, at(10, 0), at(14, 0));
        let view = NamedView {
            view: View::build()
                .event(&f.event.id)
                .start_time(at(13, 0))
                .end_time(at(11, 0))
                .finish(),
            rooms: vec![f.hall.clone()],
        };
        let logger = RecordingLogger::default();
        let rows =
            build_schedule(&f.db, &view, &ScheduleOptions::default(), None, &logger).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn programmes_of_rooms_outside_the_view_are_ignored() {
        let f = Fixture::new();
        f.db.add_time_block(&f.event.id, at(10, 0), at(11, 0));
        f.add_programme(&f.hall, at(10, 0), 60);
        f.add_programme(&f.hall, at(10, 0), 60);
        let view = NamedView {
            view: View::build().event(&f.event.id).finish(),
            rooms: vec![f.sauna.clone()],
        };
        let logger = RecordingLogger::default();
        let rows =
            build_schedule(&f.db, &view, &ScheduleOptions::default(), None, &logger).unwrap();
        assert_eq!(2, rows.len());
        assert!(logger.warnings().is_empty());
        assert!(rows.iter().all(|r| r.cells.len() == 1));
    }
}
