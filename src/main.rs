use showcase::config::env_loader::load_config;
use showcase::site::build_site;
use showcase::tracing::setup_tracing;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let loki = setup_tracing().await;
    let config = load_config();

    info!("Building site into {}", config.output_dir.display());

    let result = build_site(&config).await;

    let exit_code = match result {
        Ok(report) => {
            info!(
                "Done: {} pages, {} calendar files (events: {:?}, projects: {:?})",
                report.pages.len(),
                report.calendar_files.len(),
                report.events_origin,
                report.projects_origin
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Site build failed: {}", e);
            ExitCode::FAILURE
        }
    };

    if let Some(loki) = loki {
        loki.shutdown().await;
    }

    exit_code
}
