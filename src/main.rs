mod config;

use crate::config::AppConfig;
use database::WorkoutStore;
use env_logger::Env;
use log::info;
use web::{WorkoutAppData, WorkoutTrackerServer};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let config = AppConfig::from_env()?;

    let host = hostname::get()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "unknown".to_string());

    info!("starting on host {}", host);
    info!("workouts stored in {}", config.data_file.display());

    let data = WorkoutAppData::new(WorkoutStore::new(config.data_file));

    WorkoutTrackerServer::new(data).run(config.addr).await?;

    Ok(())
}
