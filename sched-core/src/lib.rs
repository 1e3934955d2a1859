//! # sched-core
//!
//! Use cases for laying out the programme of an event as a grid of
//! time slots and rooms. Storage is only accessed through the
//! repository traits.

pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use sched_entities::{
        event::*, id::*, programme::*, room::*, time::*, time_slot::*, view::*,
    };
}

pub use repositories::Error as RepoError;
