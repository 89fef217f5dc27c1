//! CLI binary entry point for roam-alma

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use roam_alma_sdk::cli::CliError;
#[cfg(feature = "cli")]
use roam_alma_sdk::cli::commands::convert::{ConvertArgs, handle_convert};
#[cfg(feature = "cli")]
use roam_alma_sdk::cli::commands::init::handle_init;
#[cfg(feature = "cli")]
use roam_alma_sdk::cli::commands::validate::handle_validate;
#[cfg(feature = "cli")]
use roam_alma_sdk::cli::logging::open_log_file;
#[cfg(feature = "cli")]
use roam_alma_sdk::config::{MigrationConfig, Settings};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "roam-alma")]
#[command(about = "Migrate ROAM license exports to Alma license XML")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Convert ROAM license and license-term exports into Alma XML files
    Convert {
        /// License export (.xlsx, .csv or .json)
        #[arg(short, long)]
        licenses: Option<PathBuf>,
        /// License-term export (.xlsx, .csv or .json)
        #[arg(short = 't', long)]
        license_terms: Option<PathBuf>,
        /// Output folder for the XML files
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Configuration file (defaults to $ROAM_ALMA_CONFIG or ./roam-alma.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Write the log to this file (truncated) instead of stderr
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
    /// Validate Alma license XML files
    Validate {
        /// Files to validate
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Write a sample configuration file
    Init {
        /// Target path (defaults to ./roam-alma.toml)
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(feature = "cli")]
fn init_logging(settings: &Settings, log_file: Option<PathBuf>) -> Result<(), CliError> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.as_str()));

    match log_file.or_else(|| settings.log_file.as_ref().map(PathBuf::from)) {
        Some(path) => {
            let file = open_log_file(&path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Convert {
            licenses,
            license_terms,
            output,
            config,
            log_file,
        } => {
            let source = MigrationConfig::locate(config.as_deref());
            let config = MigrationConfig::load(config.as_deref())?;
            // The subscriber depends on the loaded settings, so the config source
            // is reported once it is installed.
            init_logging(&config.settings, log_file)?;
            tracing::info!("roam-alma v{}", env!("CARGO_PKG_VERSION"));
            match &source {
                Some(path) => tracing::info!("Loaded configuration from {}", path.display()),
                None => tracing::info!("Using built-in default configuration"),
            }

            let args = ConvertArgs {
                licenses,
                license_terms,
                output,
            };
            handle_convert(&args, config)
        }
        Commands::Validate { files } => handle_validate(&files),
        Commands::Init { path, force } => handle_init(path.as_deref(), force),
    }
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature is not enabled. Build with --features cli");
    std::process::exit(1);
}
