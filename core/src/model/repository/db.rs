use camino::Utf8Path as Path;
use deadpool_diesel::sqlite::{Hook, Manager, Object};
use deadpool_diesel::Pool;
use diesel::connection::SimpleConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use eyre::{eyre, Context, Result};

use crate::interact;

pub(super) const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub const DB_FILE_NAME: &str = "vidqueue.db";

pub fn open_db_pool(sqlite_url: &str) -> Result<DbPool> {
    let manager = Manager::new(sqlite_url, deadpool_diesel::Runtime::Tokio1);
    let pool = Pool::builder(manager)
        .max_size(8)
        .post_create(Hook::sync_fn(|conn, _| {
            let mut conn = match conn.lock() {
                Ok(conn) => conn,
                Err(_) => {
                    return Err(deadpool::managed::HookError::StaticMessage(
                        "database connection mutex poisoned",
                    ))
                }
            };
            match connection_setup(&mut conn) {
                Ok(_) => Ok(()),
                Err(_err) => Err(deadpool::managed::HookError::StaticMessage(
                    "error configuring database connection",
                )),
            }
        }))
        .build()
        .wrap_err("error creating database pool")?;
    Ok(DbPool::new(pool))
}

/// Opens the database in `data_dir`, creating it if necessary, and runs pending migrations.
#[tracing::instrument]
pub async fn open_data_dir_db(data_dir: &Path) -> Result<DbPool> {
    tokio::fs::create_dir_all(data_dir)
        .await
        .wrap_err_with(|| format!("could not create data directory {}", data_dir))?;
    let db_url = data_dir.join(DB_FILE_NAME).to_string();
    let pool = open_db_pool(&db_url)?;
    let conn = pool.get().await?;
    interact!(conn, migrate).await??;
    Ok(pool)
}

#[cfg(test)]
pub fn open_in_memory_and_migrate() -> diesel::sqlite::SqliteConnection {
    use diesel::Connection;
    let mut conn = diesel::sqlite::SqliteConnection::establish(":memory:")
        .expect("error opening in memory db");
    connection_setup(&mut conn).expect("error configuring in memory db connection");
    migrate(&mut conn).expect("error running migrations on in memory connection");
    conn
}

/// Every pooled connection to `:memory:` would get its own database, so tests going
/// through the pool use a file in a temporary directory instead.
#[cfg(test)]
pub async fn open_temp_db_pool() -> (tempfile::TempDir, DbPool) {
    let dir = tempfile::tempdir().expect("error creating temp dir");
    let dir_path = Path::from_path(dir.path()).expect("temp dir path is not UTF-8");
    let pool = open_data_dir_db(dir_path)
        .await
        .expect("error opening temp db");
    (dir, pool)
}

pub fn migrate(conn: &mut diesel::SqliteConnection) -> Result<()> {
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| eyre!("error running migrations: {}", err))?;
    Ok(())
}

fn connection_setup(conn: &mut diesel::SqliteConnection) -> Result<()> {
    conn.batch_execute(
        r#"
PRAGMA journal_mode = wal;
PRAGMA busy_timeout = 5000;
    "#,
    )?;
    Ok(())
}

type SqlitePool = Pool<Manager>;

pub type DbConn = diesel::SqliteConnection;

#[derive(Clone)]
pub struct DbPool {
    pool: SqlitePool,
}

impl std::fmt::Debug for DbPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbPool")
            .field("status", &self.pool.status())
            .finish()
    }
}

impl DbPool {
    pub(self) fn new(pool: SqlitePool) -> Self {
        DbPool { pool }
    }

    pub async fn get(&self) -> Result<Object> {
        self.pool
            .get()
            .await
            .wrap_err("could not acquire db connection")
    }
}
