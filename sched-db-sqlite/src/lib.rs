#[macro_use]
extern crate diesel;

use anyhow::{anyhow, Result as Fallible};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

mod connections;
mod models;
mod repo_impl;
mod schema;

pub use self::connections::{Connections, DbConnection, DbReadOnly, DbReadWrite};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub fn run_embedded_database_migrations(mut conn: DbReadWrite<'_>) -> Fallible<()> {
    let applied = conn
        .sqlite_conn()
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow!("Failed to run database migrations: {err}"))?
        .len();
    if applied > 0 {
        log::info!("Applied {applied} pending database migration(s)");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sched_core::{entities::*, repositories::*, usecases as uc, RepoError};

    fn connections() -> Connections {
        let connections = Connections::init(":memory:", 4).unwrap();
        run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
        connections
    }

    fn event(slug: &str) -> Event {
        Event {
            id: Id::new(),
            slug: slug.into(),
            name: slug.to_uppercase(),
        }
    }

    #[test]
    fn migrations_are_applied_only_once() {
        let connections = connections();
        run_embedded_database_migrations(connections.exclusive().unwrap()).unwrap();
        let db = connections.exclusive().unwrap();
        db.create_event(&event("tracon")).unwrap();
        assert_eq!("TRACON", db.get_event_by_slug("tracon").unwrap().name);
    }

    #[test]
    fn reject_references_to_missing_rows() {
        let connections = connections();
        let db = connections.exclusive().unwrap();
        let category = Category {
            id: Id::new(),
            event_id: Id::new(),
            title: "Talks".into(),
        };
        assert!(db.create_category(&category).is_err());
    }

    #[test]
    fn roll_back_failed_transactions() {
        let connections = connections();
        let tracon = event("tracon");
        let result = connections.exclusive().unwrap().transaction(|conn| {
            conn.create_event(&tracon)?;
            Err::<(), _>(uc::Error::EventName)
        });
        assert!(matches!(result, Err(uc::Error::EventName)));
        let db = connections.shared().unwrap();
        assert!(matches!(
            db.get_event_by_slug("tracon"),
            Err(RepoError::NotFound)
        ));
    }

    #[test]
    fn map_unique_violations() {
        let connections = connections();
        let db = connections.exclusive().unwrap();
        db.create_event(&event("tracon")).unwrap();
        assert!(matches!(
            db.create_event(&event("tracon")),
            Err(RepoError::AlreadyExists)
        ));
    }
}
