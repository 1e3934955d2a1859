pub mod prelude {

    use time::macros::datetime;

    pub use sched_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };
    pub use sched_entities::builders::*;

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    /// Minutes after midnight of the first day of the test event.
    pub fn at(hours: i64, minutes: i64) -> Timestamp {
        Timestamp::from(datetime!(2026-07-03 0:00 UTC) + Duration::minutes(hours * 60 + minutes))
    }

    pub fn sample_import() -> flows::EventImport {
        flows::EventImport {
            slug: "tracon".into(),
            name: "Tracon".into(),
            categories: vec!["Talks".into(), "Games".into()],
            rooms: vec![
                flows::RoomImport {
                    name: "Main hall".into(),
                    slug: None,
                    order: 10,
                    notes: "Seats 400".into(),
                },
                flows::RoomImport {
                    name: "Sauna".into(),
                    slug: None,
                    order: 20,
                    notes: String::new(),
                },
            ],
            time_blocks: vec![(at(10, 0), at(18, 0))],
            special_start_times: vec![at(10, 30)],
            views: vec![flows::ViewImport {
                name: "Evening".into(),
                public: true,
                order: 0,
                start_time: Some(at(16, 0)),
                end_time: None,
                room_slugs: vec!["sauna".into(), "main-hall".into()],
            }],
            programmes: vec![
                flows::ProgrammeImport {
                    title: "Opening".into(),
                    category: "Talks".into(),
                    room_slug: Some("main-hall".into()),
                    start_time: Some(at(10, 0)),
                    length: Some(Duration::minutes(30)),
                    state: ProgrammeState::Published,
                },
                flows::ProgrammeImport {
                    title: "Sauna party".into(),
                    category: "Games".into(),
                    room_slug: Some("sauna".into()),
                    start_time: Some(at(16, 0)),
                    length: Some(Duration::hours(2)),
                    state: ProgrammeState::Published,
                },
                flows::ProgrammeImport {
                    title: "Not yet scheduled".into(),
                    category: "Games".into(),
                    room_slug: None,
                    start_time: None,
                    length: None,
                    state: ProgrammeState::Idea,
                },
            ],
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            sched_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            Self { db_connections }
        }

        pub fn create_event(&self, slug: &str) -> Event {
            flows::create_event(
                &self.db_connections,
                usecases::NewEvent {
                    slug: slug.into(),
                    name: slug.to_uppercase(),
                },
            )
            .unwrap()
        }

        pub fn create_room(&self, event_id: &Id, name: &str, order: i32) -> Room {
            flows::create_room(
                &self.db_connections,
                usecases::NewRoom {
                    event_id: Some(event_id.clone()),
                    name: name.into(),
                    slug: None,
                    order,
                    notes: String::new(),
                },
            )
            .unwrap()
        }

        pub fn create_template_room(&self, name: &str, order: i32) -> Room {
            let room = Room::build()
                .name(name)
                .slug(&name.to_lowercase())
                .order(order)
                .finish();
            let db = self.db_connections.exclusive().unwrap();
            db.create_room(&room).unwrap();
            room
        }

        pub fn create_view(&self, event_id: &Id, name: &str) -> View {
            flows::create_view(
                &self.db_connections,
                usecases::NewView {
                    event_id: event_id.clone(),
                    name: name.into(),
                    public: true,
                    order: 0,
                    start_time: None,
                    end_time: None,
                },
            )
            .unwrap()
        }

        pub fn create_category(&self, event_id: &Id) -> Category {
            let db = self.db_connections.exclusive().unwrap();
            usecases::create_category(&db, event_id, "Talks").unwrap()
        }

        pub fn create_programme(&self, programme: Programme) -> Programme {
            let db = self.db_connections.exclusive().unwrap();
            db.create_programme(&programme).unwrap();
            programme
        }

        /// Event `tracon` from 10:00 to 12:00 with the rooms `Hall` and `Sauna`.
        pub fn create_sample_event(&self) -> (Event, Room, Room) {
            let event = self.create_event("tracon");
            let hall = self.create_room(&event.id, "Hall", 10);
            let sauna = self.create_room(&event.id, "Sauna", 20);
            let db = self.db_connections.exclusive().unwrap();
            usecases::create_time_block(
                &db,
                usecases::NewTimeBlock {
                    event_id: event.id.clone(),
                    start_time: at(10, 0),
                    end_time: at(12, 0),
                },
            )
            .unwrap();
            (event, hall, sauna)
        }
    }
}
