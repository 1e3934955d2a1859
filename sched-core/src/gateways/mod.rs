pub mod admin;
pub mod logger;
pub mod messages;
