use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

// All timestamps are unix timestamps in seconds.

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Room {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub order: i32,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub notes: String,
    pub active: bool,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct View {
    pub id         : String,
    pub name       : String,
    pub public     : bool,
    pub order      : i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time : Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time   : Option<i64>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Programme {
    pub id             : String,
    pub title          : String,
    pub category_id    : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id        : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time     : Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time       : Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_minutes : Option<i64>,
    pub state          : String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScheduleCell {
    Empty {
        room_id: String,
    },
    Programme {
        room_id: String,
        programme: Programme,
        rowspan: usize,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScheduleRow {
    pub start_time: i64,
    pub incontinuity: bool,
    pub cells: Vec<ScheduleCell>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Schedule {
    pub event: String,
    pub view: String,
    pub rooms: Vec<Room>,
    pub rows: Vec<ScheduleRow>,
}

// Event data for importing

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoomSeed {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub notes: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimeBlockSeed {
    pub start_time: i64,
    pub end_time: i64,
}

fn default_true() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ViewSeed {
    pub name: String,
    #[serde(default = "default_true")]
    pub public: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub start_time: Option<i64>,
    #[serde(default)]
    pub end_time: Option<i64>,
    /// Slugs of the rooms in display order
    #[serde(default)]
    pub rooms: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProgrammeSeed {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub start_time: Option<i64>,
    #[serde(default)]
    pub length_minutes: Option<i64>,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EventSeed {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub rooms: Vec<RoomSeed>,
    #[serde(default)]
    pub time_blocks: Vec<TimeBlockSeed>,
    #[serde(default)]
    pub special_start_times: Vec<i64>,
    #[serde(default)]
    pub views: Vec<ViewSeed>,
    #[serde(default)]
    pub programmes: Vec<ProgrammeSeed>,
}
