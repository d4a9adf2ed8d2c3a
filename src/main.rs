//! Daytona Motos - terminal showroom for the dealership catalog
//!
//! Without a subcommand this launches the interactive showroom. The
//! subcommands run the same catalog operations headless.
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively using ./data/motos.json
//! daytona
//!
//! # Serve a different site root
//! daytona --root /srv/daytona
//!
//! # Scriptable access
//! daytona brands --json
//! daytona browse honda --cc 150
//! daytona lead honda "CB 190R" --name Ana --contact partner
//! ```

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use daytona::app::launch_showroom;
use daytona::branding::{APP_BINARY_NAME, APP_DESCRIPTION, LOG_FILE};
use daytona::cli::{
    BrandsArgs, BrowseArgs, CliContext, CliResult, ExitCode, LeadArgs, SearchArgs, ThemeArgs,
};
use daytona::config::Config;

/// Daytona Motos - terminal showroom for the dealership catalog
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about = APP_DESCRIPTION, long_about = None)]
struct Cli {
    /// Site root holding data/ and the image assets
    #[arg(long, value_name = "DIR", global = true)]
    root: Option<PathBuf>,

    /// Catalog file (overrides the one under --root)
    #[arg(long, value_name = "FILE", global = true)]
    catalog: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List catalog brands
    Brands(BrandsArgs),
    /// Show a brand's displacement filters and models
    Browse(BrowseArgs),
    /// Search brands and models
    Search(SearchArgs),
    /// Build a WhatsApp advice request
    Lead(LeadArgs),
    /// Show or change the theme preference
    Theme(ThemeArgs),
}

fn env_filter(verbose: bool) -> EnvFilter {
    let filter = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into())
}

/// Logs to stderr; subcommands own stdout.
fn init_cli_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Logs to the log file in the config dir; the terminal UI owns the screen.
fn init_tui_logging(verbose: bool) {
    let file = Config::config_dir().ok().and_then(|dir| {
        std::fs::create_dir_all(&dir).ok()?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE))
            .ok()
    });

    let registry = tracing_subscriber::registry().with(env_filter(verbose));
    match file {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::sink))
            .init(),
    }
}

fn run_command(command: &Commands, ctx: &CliContext) -> CliResult<()> {
    match command {
        Commands::Brands(args) => args.execute(ctx),
        Commands::Browse(args) => args.execute(ctx),
        Commands::Search(args) => args.execute(ctx),
        Commands::Lead(args) => args.execute(ctx),
        Commands::Theme(args) => args.execute(ctx),
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.command.is_some() {
        init_cli_logging(cli.verbose);
    } else {
        init_tui_logging(cli.verbose);
    }

    let config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {e:#}");
        Config::default()
    });
    let ctx = CliContext {
        config,
        root: cli.root,
        catalog: cli.catalog,
    };

    let code = match &cli.command {
        Some(command) => match run_command(command, &ctx) {
            Ok(()) => ExitCode::Success,
            Err(e) => {
                eprintln!("Error: {e}");
                e.exit_code()
            }
        },
        None => match launch_showroom(&ctx.config, &ctx.paths()) {
            Ok(()) => ExitCode::Success,
            Err(e) => {
                eprintln!("Error: {e:#}");
                ExitCode::IoError
            }
        },
    };

    std::process::exit(code.code());
}
