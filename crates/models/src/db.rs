use std::{env, time::Duration};

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::sync::OnceCell;
use tracing::info;

/// Open a pool sized and timed by `cfg`.
///
/// In-memory SQLite is pinned to a single connection so every query sees
/// the same database.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let in_memory = cfg.is_sqlite() && cfg.url.contains(":memory:");
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if in_memory {
        // the database lives only as long as its one connection: no idle
        // timeout or max lifetime (sea-orm setters cannot unset them, so
        // they are simply never set)
        opts.max_connections(1).min_connections(1);
    } else {
        opts.idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }
    let db = Database::connect(opts).await?;
    Ok(db)
}

/// Apply every pending migration.
pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
    migration::Migrator::up(db, None).await?;
    info!(event = "migrations_applied", "database schema is up to date");
    Ok(())
}

// Shared databases are migrated once per test process
static TEST_MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Connection for tests: `TEST_DATABASE_URL` when set, otherwise a fresh
/// in-memory SQLite database. The schema is migrated before returning.
pub async fn connect_test() -> anyhow::Result<DatabaseConnection> {
    match env::var("TEST_DATABASE_URL") {
        Ok(url) => {
            let cfg = DatabaseConfig { url, max_connections: 20, min_connections: 1, acquire_timeout_secs: 10, ..Default::default() };
            TEST_MIGRATED
                .get_or_try_init(|| async {
                    let db = connect_with_config(&cfg).await?;
                    migrate(&db).await?;
                    Ok::<(), anyhow::Error>(())
                })
                .await?;
            connect_with_config(&cfg).await
        }
        Err(_) => {
            let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
            let db = connect_with_config(&cfg).await?;
            migrate(&db).await?;
            Ok(db)
        }
    }
}
