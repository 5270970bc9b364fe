use clap::Parser;
use tracing_subscriber::EnvFilter;

use memory_box_lib::{AppConfig, Cli};

fn main() -> anyhow::Result<()> {
    // .env first: it may carry RUST_LOG and the clap env fallbacks
    let dotenv = memory_box_lib::load_dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match &dotenv {
        Some(path) => tracing::info!("Loaded .env from: {}", path.display()),
        None => tracing::debug!("No .env file found, using system environment variables"),
    }

    let config = AppConfig::load(Cli::parse())?;

    let report = memory_box_lib::run(&config)?;
    tracing::info!(
        width = report.width,
        height = report.height,
        print_sheet = report.print_sheet.is_some(),
        "Capture complete"
    );
    Ok(())
}
