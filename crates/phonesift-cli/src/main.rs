mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use phonesift_config::{self as config, Overrides};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{check, extract, Context};
use crate::error::{exit_code_for, report_error};

#[derive(Debug, Parser)]
#[command(
    name = "phonesift",
    version,
    about = "Extract, normalize and batch phone numbers from contact spreadsheets"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read every sheet, normalize phones and write deduplicated CSV batches
    Extract(extract::ExtractArgs),
    /// Show how individual values would be normalized
    Check(check::CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    let overrides = match &command {
        Command::Extract(args) => args.overrides(),
        Command::Check(_) => Overrides::default(),
    };
    let app_config =
        config::load_with(config_path.clone(), overrides).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
        debug!(
            batch_size = app_config.batch_size.get(),
            columns = ?app_config.columns,
            order = ?app_config.order,
            "settings"
        );
    }

    let ctx = Context {
        json,
        config: &app_config,
    };

    match command {
        Command::Extract(_) => extract::extract(&ctx),
        Command::Check(args) => check::check(&ctx, args),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
