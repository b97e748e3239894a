mod charts;
mod config;
mod plant_db;
mod summary;

use tracing_subscriber::EnvFilter;

use crate::config::{load_config, Config};
use crate::plant_db::DbError;

fn init_json_logging() {
    if let Err(error) = tracing_log::LogTracer::init() {
        eprintln!(
            "logging bridge initialization failed (continuing with existing logger): {}",
            error
        );
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .with_current_span(false)
        .with_span_list(false)
        .finish();

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("global logger initialization failed: {}", error);
    }
}

const CONFIG_PATH: &str = "report.toml";

fn main() {
    init_json_logging();

    let config: Config = match load_config(CONFIG_PATH) {
        Ok(config) => config,
        Err(error) => {
            log::error!("Configuration error: {}", error);
            return;
        }
    };

    log::info!(
        "report_start db_path={} output_dir={}",
        config.database.path,
        config.charts.output_dir
    );

    let aggregates = match plant_db::fetch_aggregates(&config.database) {
        Ok(aggregates) => aggregates,
        Err(error @ DbError::Open { .. }) => {
            log::error!("Error connecting to database: {}", error);
            return;
        }
        Err(error) => {
            log::error!("aggregation query failed: {}", error);
            std::process::exit(1);
        }
    };

    let written = match charts::render_all(&config.charts, &aggregates) {
        Ok(written) => written,
        Err(error) => {
            log::error!("chart rendering failed: {}", error);
            std::process::exit(1);
        }
    };

    summary::print_summary(&aggregates);

    log::info!("report_complete charts_written={}", written.len());
}
