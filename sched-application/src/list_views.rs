use super::*;

/// All views of an event, optionally only the public ones.
pub fn views_of_event(
    connections: &sqlite::Connections,
    event_slug: &str,
    public_only: bool,
) -> Result<(Event, Vec<View>)> {
    let db = connections.shared()?;
    let event = db.get_event_by_slug(event_slug)?;
    let views = usecases::views_of_event(&db, &event.id, public_only)?;
    Ok((event, views))
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn list_public_and_private_views() {
        let fixture = BackendFixture::new();
        let event = fixture.create_event("tracon");
        let main = fixture.create_view(&event.id, "Main");
        let hidden = flows::create_view(
            &fixture.db_connections,
            usecases::NewView {
                event_id: event.id.clone(),
                name: "Hidden".into(),
                public: false,
                order: 0,
                start_time: None,
                end_time: None,
            },
        )
        .unwrap();

        let (_, views) = flows::views_of_event(&fixture.db_connections, "tracon", false).unwrap();
        assert_eq!(vec![main.clone(), hidden], views);
        let (_, views) = flows::views_of_event(&fixture.db_connections, "tracon", true).unwrap();
        assert_eq!(vec![main], views);
        assert!(flows::views_of_event(&fixture.db_connections, "ropecon", true)
            .unwrap_err()
            .is_not_found());
    }
}
