use anyhow::Result;
use clap::Parser;
use fleetdeck::app::App;
use fleetdeck::cli::{Cli, CliHandler};
use fleetdeck::config::DashboardConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle CLI commands before any terminal setup
    if let Some(command) = cli.command {
        let handler = CliHandler::new(cli.config_dir);
        return handler.handle_command(command).await;
    }

    // Initialize tracing for logging - write to file to avoid interfering with TUI
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("fleetdeck.log")?;

    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_max_level(log_level)
        .init();

    if cli.debug {
        tracing::info!("Debug mode enabled - verbose logging active");
    }

    let config = DashboardConfig::load_or_default(cli.config_dir.as_deref());
    let mut app = App::new(config);
    app.run().await?;

    Ok(())
}
