use serde::Deserialize;
use std::collections::HashSet;

const DEFAULT_CONFIG_FILE: &str = include_str!("schedgrid.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub schedule: Option<Schedule>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Schedule {
    pub display_utc_offset_hours: Option<i8>,
    #[serde(default)]
    pub programme_admins: HashSet<String>,
}

impl Default for Schedule {
    fn default() -> Self {
        Config::default()
            .schedule
            .expect("Schedule configuration")
    }
}
