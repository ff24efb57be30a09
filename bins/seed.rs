//! Populate the configured database with demo data.
//! Run: cargo run --bin seed
use configs::AppConfig;
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = AppConfig::load_and_validate()?;
    common::utils::logging::init_logging(cfg.server.log_json);

    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::migrate(&db).await?;

    let summary = service::seed::seed_demo(&db).await?;
    if summary.skipped {
        info!(service = "seed", event = "noop", "demo data already present");
    } else {
        info!(service = "seed", event = "done", ?summary, "seeded demo data");
    }
    Ok(())
}
