mod db;
mod logging;
mod models;
mod run;
mod settings;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let settings = settings::load()?;
    logging::init(&settings.log_file, &settings.log_level)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        database = %settings.database_path.display(),
        "starting"
    );

    let db = db::Database::open(&settings.database_path)?;
    let result = run::as_tui(&db);

    match &result {
        Ok(()) => tracing::info!("exiting"),
        Err(e) => tracing::error!("exiting with error: {e:#}"),
    }
    result
}
