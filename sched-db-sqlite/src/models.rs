#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All `*_time` columns are stored as unix timestamp in seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = events)]
pub struct NewEvent<'a> {
    pub id: &'a str,
    pub slug: &'a str,
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct Event {
    pub rowid: i64,
    pub id: String,
    pub slug: String,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = categories)]
pub struct NewCategory<'a> {
    pub id: &'a str,
    pub event_id: &'a str,
    pub title: &'a str,
}

#[derive(Queryable)]
pub struct Category {
    pub rowid: i64,
    pub id: String,
    pub event_id: String,
    pub title: String,
}

#[derive(Insertable)]
#[diesel(table_name = rooms)]
pub struct NewRoom<'a> {
    pub id: &'a str,
    pub event_id: Option<&'a str>,
    pub name: &'a str,
    pub sort_order: i32,
    pub notes: &'a str,
    pub slug: &'a str,
    pub active: bool,
}

#[derive(Queryable)]
pub struct Room {
    pub rowid: i64,
    pub id: String,
    pub event_id: Option<String>,
    pub name: String,
    pub sort_order: i32,
    pub notes: String,
    pub slug: String,
    pub active: bool,
}

#[derive(Insertable)]
#[diesel(table_name = views)]
pub struct NewView<'a> {
    pub id: &'a str,
    pub event_id: &'a str,
    pub name: &'a str,
    pub public: bool,
    pub sort_order: i32,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
}

#[derive(Queryable)]
pub struct View {
    pub rowid: i64,
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub public: bool,
    pub sort_order: i32,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
}

#[derive(Insertable)]
#[diesel(table_name = view_rooms)]
pub struct NewViewRoom<'a> {
    pub view_id: &'a str,
    pub room_id: &'a str,
    pub sort_order: i32,
}

#[derive(Queryable)]
pub struct ViewRoom {
    pub rowid: i64,
    pub view_id: String,
    pub room_id: String,
    pub sort_order: i32,
}

#[derive(Insertable)]
#[diesel(table_name = time_blocks)]
pub struct NewTimeBlock<'a> {
    pub id: &'a str,
    pub event_id: &'a str,
    pub start_time: i64,
    pub end_time: i64,
}

#[derive(Queryable)]
pub struct TimeBlock {
    pub rowid: i64,
    pub id: String,
    pub event_id: String,
    pub start_time: i64,
    pub end_time: i64,
}

#[derive(Insertable)]
#[diesel(table_name = special_start_times)]
pub struct NewSpecialStartTime<'a> {
    pub id: &'a str,
    pub event_id: &'a str,
    pub start_time: i64,
}

#[derive(Queryable)]
pub struct SpecialStartTime {
    pub rowid: i64,
    pub id: String,
    pub event_id: String,
    pub start_time: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = programmes)]
#[diesel(treat_none_as_null = true)]
pub struct NewProgramme<'a> {
    pub id: &'a str,
    pub category_id: &'a str,
    pub title: &'a str,
    pub room_id: Option<&'a str>,
    pub start_time: Option<i64>,
    pub length_minutes: Option<i32>,
    pub state: &'a str,
}

#[derive(Queryable)]
pub struct Programme {
    pub rowid: i64,
    pub id: String,
    pub category_id: String,
    pub title: String,
    pub room_id: Option<String>,
    pub start_time: Option<i64>,
    pub length_minutes: Option<i32>,
    pub state: String,
}
