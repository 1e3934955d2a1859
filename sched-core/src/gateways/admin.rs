use sched_entities::id::Id;

/// Decides whether a user administrates the programme of an event.
///
/// Only programme admins receive in-band warnings about
/// inconsistent schedules.
pub trait ProgrammeAdminCheck {
    fn is_programme_admin(&self, username: &str, event_id: &Id) -> bool;
}
