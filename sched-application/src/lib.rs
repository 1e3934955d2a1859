#[macro_use]
extern crate log;

mod append_room_to_view;
mod build_schedule;
mod create_event;
mod create_room;
mod create_view;
mod import_event;
mod instantiate_rooms;
mod list_views;
mod replace_view_rooms;

pub mod prelude {
    pub use super::{
        append_room_to_view::*, build_schedule::*, create_event::*, create_room::*,
        create_view::*, import_event::*, instantiate_rooms::*, list_views::*,
        replace_view_rooms::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use sched_core::{entities::*, repositories::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use sched_db_sqlite::Connections;
}
