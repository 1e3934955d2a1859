use anyhow::Result as Fallible;
use diesel::{
    connection::SimpleConnection as _,
    r2d2::{self, CustomizeConnection},
    sqlite::SqliteConnection,
    Connection as _,
};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use sched_core::usecases as uc;
use std::{cell::RefCell, sync::Arc};

use crate::repo_impl::from_diesel_err;

type ConnectionManager = r2d2::ConnectionManager<SqliteConnection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

const BUSY_TIMEOUT_MILLIS: u32 = 5_000;

/// Settings that SQLite keeps per connection and that must
/// be applied whenever the pool opens a new one.
#[derive(Debug, Clone, Copy)]
struct ConnectionSettings;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionSettings {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = ON; \
             PRAGMA synchronous = NORMAL; \
             PRAGMA busy_timeout = {BUSY_TIMEOUT_MILLIS};"
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Shared read access or exclusive write access to the database.
///
/// Readers and the single writer are serialized by a lock in front of
/// the pool, so SQLite never reports a locked database.
#[derive(Clone)]
pub struct Connections {
    pool: ConnectionPool,
    access: Arc<RwLock<()>>,
}

impl Connections {
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        // Fail early on inaccessible files instead of letting r2d2 retry.
        let mut conn = SqliteConnection::establish(url)?;
        let builder = ConnectionPool::builder().connection_customizer(Box::new(ConnectionSettings));
        let builder = if is_in_memory(url) {
            // Every connection opens its own database that vanishes
            // together with the connection.
            if pool_size > 1 {
                log::info!("Using a single connection for the in-memory database");
            }
            builder.max_size(1).max_lifetime(None).idle_timeout(None)
        } else {
            conn.batch_execute("PRAGMA journal_mode = WAL;")?;
            builder.max_size(pool_size)
        };
        drop(conn);
        let pool = builder.build(ConnectionManager::new(url))?;
        Ok(Self {
            pool,
            access: Arc::new(RwLock::new(())),
        })
    }

    pub fn shared(&self) -> Fallible<DbReadOnly> {
        let guard = self.access.read();
        let conn = self.pool.get().inspect_err(|err| {
            log::error!("No database connection available for reading: {err}");
        })?;
        Ok(DbReadOnly {
            _guard: guard,
            conn: RefCell::new(conn),
        })
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        let guard = self.access.write();
        let conn = self.pool.get().inspect_err(|err| {
            log::error!("No database connection available for writing: {err}");
        })?;
        Ok(DbReadWrite {
            _guard: guard,
            conn: RefCell::new(conn),
        })
    }
}

pub struct DbReadOnly<'a> {
    _guard: RwLockReadGuard<'a, ()>,
    pub(crate) conn: RefCell<PooledConnection>,
}

pub struct DbReadWrite<'a> {
    _guard: RwLockWriteGuard<'a, ()>,
    pub(crate) conn: RefCell<PooledConnection>,
}

impl DbReadWrite<'_> {
    /// Executes all use cases of `f` atomically.
    ///
    /// Any error returned by `f` rolls back the whole transaction.
    pub fn transaction<T, E, F>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        // diesel only rolls back on its own error type
        let mut failed = None;
        let conn: &mut SqliteConnection = self.conn.get_mut();
        let result = conn.transaction(|conn| {
            f(&DbConnection::new(conn)).map_err(|err| {
                failed = Some(err.into());
                diesel::result::Error::RollbackTransaction
            })
        });
        match (result, failed) {
            (Ok(value), _) => Ok(value),
            (Err(_), Some(err)) => Err(err),
            (Err(err), None) => Err(from_diesel_err(err).into()),
        }
    }

    pub(crate) fn sqlite_conn(&mut self) -> &mut SqliteConnection {
        self.conn.get_mut()
    }
}

/// A connection that is only valid within a transaction.
pub struct DbConnection<'a> {
    pub(crate) conn: RefCell<&'a mut SqliteConnection>,
}

impl<'a> DbConnection<'a> {
    fn new(conn: &'a mut SqliteConnection) -> Self {
        Self {
            conn: RefCell::new(conn),
        }
    }
}
