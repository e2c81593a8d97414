use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use domain::DomainError;
use tracing::info;

pub mod schema;
pub use schema::*;

pub type SqlitePool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Per-connection pragmas. SQLite leaves foreign keys off unless asked.
#[derive(Debug)]
struct ConnectionOptions;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(r2d2::Error::QueryError)
    }
}

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens (or creates) the SQLite file and applies pending migrations.
    pub fn new(database_path: &str) -> Result<Self, DomainError> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_path);
        let pool = r2d2::Pool::builder()
            .connection_customizer(Box::new(ConnectionOptions))
            .build(manager)
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;
        let database = Database { pool };
        database.run_migrations()?;
        info!(database_path, "database ready");
        Ok(database)
    }

    /// A private in-memory database. The pool is pinned to one connection
    /// because every SQLite `:memory:` connection is a separate database.
    pub fn in_memory() -> Result<Self, DomainError> {
        let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
        let pool = r2d2::Pool::builder()
            .max_size(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connection_customizer(Box::new(ConnectionOptions))
            .build(manager)
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;
        let database = Database { pool };
        database.run_migrations()?;
        Ok(database)
    }

    fn run_migrations(&self) -> Result<(), DomainError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;
        if !applied.is_empty() {
            info!(count = applied.len(), "applied migrations");
        }
        Ok(())
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Runs a diesel query on the blocking pool with a pooled connection.
pub(crate) async fn run_blocking<T, F>(pool: &SqlitePool, query: F) -> Result<T, DomainError>
where
    F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut conn = pool
            .get()
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;
        query(&mut conn).map_err(|e| DomainError::RepositoryError(e.to_string()))
    })
    .await
    .map_err(|e| DomainError::RepositoryError(e.to_string()))?
}

/// Row id of the last insert on this connection.
pub(crate) fn last_insert_rowid(conn: &mut SqliteConnection) -> QueryResult<i32> {
    diesel::select(diesel::dsl::sql::<diesel::sql_types::Integer>("last_insert_rowid()"))
        .get_result(conn)
}
