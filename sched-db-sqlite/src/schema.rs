///////////////////////////////////////////////////////////////////////
// Events
///////////////////////////////////////////////////////////////////////

table! {
    events (rowid) {
        rowid -> BigInt,
        id -> Text,
        slug -> Text,
        name -> Text,
    }
}

table! {
    categories (rowid) {
        rowid -> BigInt,
        id -> Text,
        event_id -> Text,
        title -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Rooms & views
///////////////////////////////////////////////////////////////////////

table! {
    rooms (rowid) {
        rowid -> BigInt,
        id -> Text,
        event_id -> Nullable<Text>,
        name -> Text,
        sort_order -> Integer,
        notes -> Text,
        slug -> Text,
        active -> Bool,
    }
}

table! {
    views (rowid) {
        rowid -> BigInt,
        id -> Text,
        event_id -> Text,
        name -> Text,
        public -> Bool,
        sort_order -> Integer,
        start_time -> Nullable<BigInt>,
        end_time -> Nullable<BigInt>,
    }
}

table! {
    view_rooms (rowid) {
        rowid -> BigInt,
        view_id -> Text,
        room_id -> Text,
        sort_order -> Integer,
    }
}

///////////////////////////////////////////////////////////////////////
// Time slots
///////////////////////////////////////////////////////////////////////

table! {
    time_blocks (rowid) {
        rowid -> BigInt,
        id -> Text,
        event_id -> Text,
        start_time -> BigInt,
        end_time -> BigInt,
    }
}

table! {
    special_start_times (rowid) {
        rowid -> BigInt,
        id -> Text,
        event_id -> Text,
        start_time -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Programmes
///////////////////////////////////////////////////////////////////////

table! {
    programmes (rowid) {
        rowid -> BigInt,
        id -> Text,
        category_id -> Text,
        title -> Text,
        room_id -> Nullable<Text>,
        start_time -> Nullable<BigInt>,
        length_minutes -> Nullable<Integer>,
        state -> Text,
    }
}

allow_tables_to_appear_in_same_query!(
    events,
    categories,
    rooms,
    views,
    view_rooms,
    time_blocks,
    special_start_times,
    programmes,
);
