/// Receives warnings about inconsistent schedule data.
pub trait ScheduleLogger {
    fn warn(&self, message: &str);
}

/// Forwards all warnings to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogScheduleLogger;

impl ScheduleLogger for LogScheduleLogger {
    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }
}
