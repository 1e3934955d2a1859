use std::collections::HashSet;

use sched_core::{
    entities::Id,
    gateways::{admin::ProgrammeAdminCheck, messages::UserMessages},
};

/// Programme admins from the configuration file.
///
/// The configured users administrate the programme of all events.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredProgrammeAdmins {
    usernames: HashSet<String>,
}

impl ConfiguredProgrammeAdmins {
    pub const fn new(usernames: HashSet<String>) -> Self {
        Self { usernames }
    }
}

impl ProgrammeAdminCheck for ConfiguredProgrammeAdmins {
    fn is_programme_admin(&self, username: &str, _: &Id) -> bool {
        self.usernames.contains(username)
    }
}

const USER_MESSAGES_TARGET: &str = "schedgrid::user";

/// Shows messages to the user of the command line
/// through the logger with a dedicated target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogUserMessages;

impl UserMessages for LogUserMessages {
    fn warning(&self, message: &str) {
        log::warn!(target: USER_MESSAGES_TARGET, "{message}");
    }
}
