use sched_entities::view::View;

pub const MAX_ROOM_NAME_LEN: usize = 1023;

pub fn is_valid_room_name(name: &str) -> bool {
    !name.is_empty() && name.chars().count() <= MAX_ROOM_NAME_LEN
}

pub fn is_valid_view_name(name: &str) -> bool {
    !name.is_empty() && name.chars().count() <= View::MAX_NAME_LEN
}

pub fn is_valid_title(title: &str) -> bool {
    !title.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_names_are_limited() {
        assert!(is_valid_view_name("Main stage"));
        assert!(is_valid_view_name(&"x".repeat(32)));
        assert!(!is_valid_view_name(&"x".repeat(33)));
        assert!(!is_valid_view_name(""));
    }

    #[test]
    fn room_names_must_not_be_empty() {
        assert!(is_valid_room_name("Sali"));
        assert!(!is_valid_room_name(""));
    }
}
