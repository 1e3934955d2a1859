pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{programme_builder::*, room_builder::*, view_builder::*};

pub mod room_builder {

    use super::*;
    use crate::{id::*, room::*};

    #[derive(Debug)]
    pub struct RoomBuild {
        room: Room,
    }

    impl RoomBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.room.id = id.into();
            self
        }
        pub fn event(mut self, event_id: &Id) -> Self {
            self.room.event_id = Some(event_id.clone());
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.room.name = name.into();
            self
        }
        pub fn slug(mut self, slug: &str) -> Self {
            self.room.slug = slug.into();
            self
        }
        pub fn order(mut self, order: i32) -> Self {
            self.room.order = order;
            self
        }
        pub fn inactive(mut self) -> Self {
            self.room.active = false;
            self
        }
        pub fn finish(self) -> Room {
            self.room
        }
    }

    impl Builder for Room {
        type Build = RoomBuild;
        fn build() -> RoomBuild {
            RoomBuild {
                room: Room {
                    id: Id::new(),
                    event_id: None,
                    name: "".into(),
                    order: 0,
                    notes: "".into(),
                    slug: "".into(),
                    active: true,
                },
            }
        }
    }
}

pub mod programme_builder {

    use super::*;
    use crate::{id::*, programme::*, time::*};

    #[derive(Debug)]
    pub struct ProgrammeBuild {
        programme: Programme,
    }

    impl ProgrammeBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.programme.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.programme.title = title.into();
            self
        }
        pub fn category(mut self, category_id: &Id) -> Self {
            self.programme.category_id = category_id.clone();
            self
        }
        pub fn room(mut self, room_id: &Id) -> Self {
            self.programme.room_id = Some(room_id.clone());
            self
        }
        pub fn start_time(mut self, start_time: Timestamp) -> Self {
            self.programme.start_time = Some(start_time);
            self
        }
        pub fn length_minutes(mut self, minutes: i64) -> Self {
            self.programme.length = Some(Duration::minutes(minutes));
            self
        }
        pub fn unscheduled(mut self) -> Self {
            self.programme.length = None;
            self
        }
        pub fn state(mut self, state: ProgrammeState) -> Self {
            self.programme.state = state;
            self
        }
        pub fn finish(self) -> Programme {
            self.programme
        }
    }

    impl Builder for Programme {
        type Build = ProgrammeBuild;
        fn build() -> ProgrammeBuild {
            ProgrammeBuild {
                programme: Programme {
                    id: Id::new(),
                    category_id: Id::new(),
                    title: "".into(),
                    room_id: None,
                    start_time: None,
                    length: Some(Duration::HOUR),
                    state: ProgrammeState::Published,
                },
            }
        }
    }
}

pub mod view_builder {

    use super::*;
    use crate::{id::*, time::*, view::*};

    #[derive(Debug)]
    pub struct ViewBuild {
        view: View,
    }

    impl ViewBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.view.id = id.into();
            self
        }
        pub fn event(mut self, event_id: &Id) -> Self {
            self.view.event_id = event_id.clone();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.view.name = name.into();
            self
        }
        pub fn private(mut self) -> Self {
            self.view.public = false;
            self
        }
        pub fn order(mut self, order: i32) -> Self {
            self.view.order = order;
            self
        }
        pub fn start_time(mut self, start_time: Timestamp) -> Self {
            self.view.start_time = Some(start_time);
            self
        }
        pub fn end_time(mut self, end_time: Timestamp) -> Self {
            self.view.end_time = Some(end_time);
            self
        }
        pub fn finish(self) -> View {
            self.view
        }
    }

    impl Builder for View {
        type Build = ViewBuild;
        fn build() -> ViewBuild {
            ViewBuild {
                view: View {
                    id: Id::new(),
                    event_id: Id::default(),
                    name: "".into(),
                    public: true,
                    order: 0,
                    start_time: None,
                    end_time: None,
                },
            }
        }
    }

    #[test]
    fn default_view_is_public_and_unbounded() {
        let view = View::build().name("Main stage").finish();
        assert!(view.public);
        assert_eq!(TimeWindow::unbounded(), view.window());
    }
}
