mod build_schedule;
mod error;
mod events;
mod instantiate_rooms;
mod programmes;
mod rooms;
mod schedule_view;
mod time_slots;
mod views;


pub use self::{
    build_schedule::*, error::Error, events::*, instantiate_rooms::*, programmes::*, rooms::*,
    schedule_view::*, time_slots::*, views::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
