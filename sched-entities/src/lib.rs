#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # sched-entities
//!
//! Reusable, agnostic domain entities for scheduling the programme of
//! an event across rooms and time slots.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod event;
pub mod id;
pub mod programme;
pub mod room;
pub mod time;
pub mod time_slot;
pub mod view;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
