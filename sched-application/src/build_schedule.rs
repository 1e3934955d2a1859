use super::*;
use sched_core::gateways::logger::ScheduleLogger;

#[derive(Debug, Clone)]
pub struct ScheduleRequest<'a> {
    pub event_slug: &'a str,
    /// Show all rooms of the event if missing
    pub view_id: Option<&'a Id>,
    pub options: usecases::ScheduleOptions,
}

#[derive(Debug, Clone)]
pub struct Schedule {
    pub event: Event,
    pub view_name: String,
    pub rooms: Vec<Room>,
    pub rows: Vec<usecases::ScheduleRow>,
}

pub fn build_schedule(
    connections: &sqlite::Connections,
    request: ScheduleRequest,
    viewer: Option<&usecases::Viewer>,
    logger: &dyn ScheduleLogger,
) -> Result<Schedule> {
    let ScheduleRequest {
        event_slug,
        view_id,
        options,
    } = request;
    let db = connections.shared()?;
    let event = db.get_event_by_slug(event_slug)?;
    let (view_name, rooms, rows) = match view_id {
        Some(view_id) => {
            let view = usecases::load_named_view(&db, &event.id, view_id)?;
            let rows = usecases::build_schedule(&db, &view, &options, viewer, logger)?;
            (view.view.name, view.rooms, rows)
        }
        None => {
            let view = usecases::all_rooms_pseudo_view(&db, &event.id)?;
            let rows = usecases::build_schedule(&db, &view, &options, viewer, logger)?;
            (view.name().to_owned(), view.rooms, rows)
        }
    };
    debug!(
        "Built schedule of event {} with {} row(s) for view {}",
        event.slug,
        rows.len(),
        view_name
    );
    Ok(Schedule {
        event,
        view_name,
        rooms,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use sched_core::gateways::logger::LogScheduleLogger;

    fn build(
        fixture: &BackendFixture,
        view_id: Option<&Id>,
        visibility: Visibility,
    ) -> flows::Schedule {
        flows::build_schedule(
            &fixture.db_connections,
            flows::ScheduleRequest {
                event_slug: "tracon",
                view_id,
                options: usecases::ScheduleOptions {
                    visibility,
                    ..Default::default()
                },
            },
            None,
            &LogScheduleLogger,
        )
        .unwrap()
    }

    #[test]
    fn schedule_of_all_rooms() {
        let fixture = BackendFixture::new();
        let (event, hall, sauna) = fixture.create_sample_event();
        let category = fixture.create_category(&event.id);
        let talk = fixture.create_programme(
            Programme::build()
                .title("Talk")
                .category(&category.id)
                .room(&hall.id)
                .start_time(at(10, 0))
                .length_minutes(90)
                .finish(),
        );
        fixture.create_programme(
            Programme::build()
                .title("Draft")
                .category(&category.id)
                .room(&sauna.id)
                .start_time(at(10, 0))
                .state(ProgrammeState::Idea)
                .finish(),
        );

        let schedule = build(&fixture, None, Visibility::PublishedOnly);
        assert_eq!("All rooms", schedule.view_name);
        assert_eq!(vec![hall.clone(), sauna.clone()], schedule.rooms);
        let times: Vec<_> = schedule.rows.iter().map(|r| r.start_time).collect();
        assert_eq!(vec![at(10, 0), at(11, 0), at(12, 0)], times);
        assert_eq!(
            vec![
                usecases::ScheduleCell::Programme {
                    room_id: hall.id.clone(),
                    programme: talk,
                    rowspan: 2,
                },
                usecases::ScheduleCell::Empty {
                    room_id: sauna.id.clone()
                },
            ],
            schedule.rows[0].cells
        );
        assert_eq!(
            vec![usecases::ScheduleCell::Empty {
                room_id: sauna.id.clone()
            }],
            schedule.rows[1].cells
        );
        assert_eq!(2, schedule.rows[2].cells.len());

        let schedule = build(&fixture, None, Visibility::IncludeUnpublished);
        assert!(schedule.rows[0]
            .cells
            .iter()
            .all(|c| c.programme().is_some()));
    }

    #[test]
    fn schedule_of_a_named_view() {
        let fixture = BackendFixture::new();
        let (event, hall, sauna) = fixture.create_sample_event();
        let view = fixture.create_view(&event.id, "Sauna only");
        flows::replace_view_rooms(&fixture.db_connections, &view.id, &[sauna.id.clone()]).unwrap();

        let schedule = build(&fixture, Some(&view.id), Visibility::PublishedOnly);
        assert_eq!("Sauna only", schedule.view_name);
        assert_eq!(vec![sauna], schedule.rooms);
        assert!(schedule
            .rows
            .iter()
            .all(|r| r.cells.len() == 1 && r.cells[0].room_id() != &hall.id));
    }

    #[test]
    fn schedule_of_unknown_event_or_view() {
        let fixture = BackendFixture::new();
        fixture.create_sample_event();
        let other = fixture.create_event("ropecon");
        let foreign_view = fixture.create_view(&other.id, "Elsewhere");
        let request = |view_id| flows::ScheduleRequest {
            event_slug: "tracon",
            view_id,
            options: Default::default(),
        };

        let err = flows::build_schedule(
            &fixture.db_connections,
            request(Some(&foreign_view.id)),
            None,
            &LogScheduleLogger,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::ViewOfOtherEvent))
        ));

        let unknown = Id::new();
        let err = flows::build_schedule(
            &fixture.db_connections,
            request(Some(&unknown)),
            None,
            &LogScheduleLogger,
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
