//! fixerset CLI entry point

use clap::Parser;
use fixerset::cli::common::{CONFIG_FILE, EXIT_ERROR, EXIT_SUCCESS};
use fixerset::cli::init::InitResult;
use fixerset::cli::run::RunMode;
use fixerset::cli::{Cli, Command};
use std::path::Path;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing on stderr so stdout stays clean for command output
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "fixerset=debug"
    } else {
        "fixerset=warn"
    };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("FIXERSET_LOG").unwrap_or_else(|_| default.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    let exit_code = match cli.command {
        Command::Init { force } => {
            let path = config.unwrap_or(Path::new(CONFIG_FILE));
            match fixerset::cli::init::run_init(path, force) {
                Ok(InitResult::Created) => {
                    println!("Created {}.", path.display());
                    EXIT_SUCCESS
                }
                Ok(InitResult::Overwritten) => {
                    println!("Overwrote {}.", path.display());
                    EXIT_SUCCESS
                }
                Ok(InitResult::Skipped) => {
                    println!(
                        "{} already exists. Use --force to overwrite.",
                        path.display()
                    );
                    EXIT_SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    EXIT_ERROR
                }
            }
        }
        Command::Run { check, dry_run } => {
            let mode = if check {
                RunMode::Check
            } else if dry_run {
                RunMode::DryRun
            } else {
                RunMode::Write
            };
            fixerset::cli::run::run(config, mode)
        }
        Command::List { format } => {
            fixerset::cli::list::run_list(config, format, cli.color.into())
        }
    };

    process::exit(exit_code);
}
