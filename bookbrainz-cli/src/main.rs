mod args;
mod commands;
mod error;
mod paths;
mod settings;

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use args::{Cli, Commands};
use error::CliError;
use settings::Settings;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = Settings::load(cli.config.as_deref())?;
    let level = settings::log_level(cli.log_level.as_deref(), &settings)?;
    init_logging(level)?;
    log::debug!("settings: {:?}", settings);

    match cli.command {
        Commands::Publishers(args) => {
            let output = commands::publishers(&args, &settings)?;
            if !args.toggle.is_empty() {
                eprintln!("selected: {}", output.selected.join(", "));
            }
            write_output(args.output.as_deref(), &output.rendered)
        }
    }
}

/// Log to `latest.log` in the cache dir, rotating the previous run's log.
/// Without a home directory there is nowhere to log, so logging stays off.
fn init_logging(level: LevelFilter) -> Result<(), CliError> {
    if level == LevelFilter::Off {
        return Ok(());
    }
    let Some(path) = paths::log_file() else {
        return Ok(());
    };

    paths::rotate_logs();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&path)?;
    WriteLogger::init(level, Config::default(), log_file)?;
    log::info!("logging to {}", path.display());
    Ok(())
}

fn write_output(path: Option<&Path>, rendered: &str) -> Result<(), CliError> {
    match path {
        Some(path) => {
            fs::write(path, rendered)?;
            log::info!("wrote {}", path.display());
        }
        None => io::stdout().write_all(rendered.as_bytes())?,
    }
    Ok(())
}
