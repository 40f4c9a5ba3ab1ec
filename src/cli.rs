use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DashboardConfig;
use crate::diagnostics::{FaultAnalyzer, FaultReport};

/// Fleetdeck - Terminal maintenance dashboard for heavy equipment fleets
#[derive(Parser)]
#[command(name = "fleetdeck")]
#[command(about = "A TUI maintenance dashboard for heavy-equipment fleets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Configuration directory path
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a fault code without starting the dashboard
    Fault(FaultArgs),

    /// Show configuration information
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct FaultArgs {
    /// Fault code to analyze (e.g. "EID 0126-3", "E360", "70-2")
    pub code: String,

    /// Output format (table, json)
    #[arg(long, default_value = "table")]
    pub format: String,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Show current configuration
    #[arg(long)]
    pub show: bool,

    /// Show configuration file locations
    #[arg(long)]
    pub paths: bool,
}

/// Command-line interface handler
pub struct CliHandler {
    config: DashboardConfig,
    config_dir: Option<PathBuf>,
}

impl CliHandler {
    /// Create a new CLI handler
    pub fn new(config_dir: Option<PathBuf>) -> Self {
        let config = DashboardConfig::load_or_default(config_dir.as_deref());
        Self { config, config_dir }
    }

    /// Handle CLI commands
    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Fault(args) => self.handle_fault(args).await,
            Commands::Config(args) => self.handle_config(args),
        }
    }

    /// Handle fault analysis
    async fn handle_fault(&self, args: FaultArgs) -> Result<()> {
        let analyzer = FaultAnalyzer::new();
        let report = analyzer.analyze(&args.code).await;

        match args.format.as_str() {
            "json" => {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            "table" => {
                Self::print_report(&report);
            }
            other => {
                return Err(anyhow!(
                    "Unknown output format '{}'. Supported formats: table, json",
                    other
                ));
            }
        }

        Ok(())
    }

    fn print_report(report: &FaultReport) {
        println!("🔍 Fleetdeck Fault Code Analysis");
        println!("================================\n");
        println!("   Code: {}", report.code);

        match &report.entry {
            Some(entry) => {
                println!("   Brand: {}", entry.brand.label());
                println!("   Problem: {}", entry.problem);
                println!("   Severity: {}", entry.severity.label());
                println!("   Action: {}", entry.action);
                println!("   Estimated effort: {} cost units", entry.cost_units);
            }
            None => {
                println!("\n⚠️  Code not found in the local catalog");
                if let Some(brand) = report.shape.brand_hint() {
                    println!("   Code shape suggests: {}", brand.label());
                }
                println!("   Refer to the OEM service manual for this code.");
            }
        }
    }

    /// Handle config commands
    fn handle_config(&self, args: ConfigArgs) -> Result<()> {
        println!("⚙️  Fleetdeck Configuration");
        println!("===========================\n");

        if args.paths {
            let config_path = DashboardConfig::config_file_path(self.config_dir.as_deref())?;
            println!("   Config file: {}", config_path.display());
            if !config_path.exists() {
                println!("   (not created yet; defaults are in effect)");
            }
        }

        if args.show || !args.paths {
            let content = toml::to_string_pretty(&self.config)?;
            println!("{}", content);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses_fault_command() {
        let cli = Cli::parse_from(["fleetdeck", "fault", "E360", "--format", "json"]);
        match cli.command {
            Some(Commands::Fault(args)) => {
                assert_eq!(args.code, "E360");
                assert_eq!(args.format, "json");
            }
            _ => panic!("expected fault subcommand"),
        }
    }

    #[test]
    fn test_cli_defaults_to_dashboard() {
        let cli = Cli::parse_from(["fleetdeck"]);
        assert!(cli.command.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::parse_from([
            "fleetdeck",
            "--debug",
            "--config-dir",
            "/tmp/fd",
            "config",
            "--paths",
        ]);
        assert!(cli.debug);
        assert_eq!(
            cli.config_dir.as_deref(),
            Some(std::path::Path::new("/tmp/fd"))
        );
        assert!(matches!(cli.command, Some(Commands::Config(_))));
    }

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let handler = CliHandler::new(None);
        let result = tokio_test::block_on(handler.handle_command(Commands::Fault(FaultArgs {
            code: "E360".to_string(),
            format: "yaml".to_string(),
        })));
        assert!(result.is_err());
    }
}
