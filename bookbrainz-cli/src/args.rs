use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;

#[derive(Parser)]
#[command(name = "bookbrainz")]
#[command(about = "Render BookBrainz entity tables", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to config.toml in the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// off, error, warn, info, debug or trace
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a publisher table from a JSON list of publishers
    Publishers(PublishersArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct PublishersArgs {
    /// JSON file: an array of publishers or {"publishers": [...]}
    #[arg(short, long)]
    pub input: PathBuf,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Render as a collection table with an "Added at" column
    #[arg(long)]
    pub collection: bool,

    /// Show a selection checkbox on every row
    #[arg(long)]
    pub checkboxes: bool,

    /// Initially selected BBIDs
    #[arg(long = "select", value_name = "BBID")]
    pub select: Vec<String>,

    /// Activate the checkbox of these rows, in order (implies --checkboxes)
    #[arg(long = "toggle", value_name = "BBID")]
    pub toggle: Vec<String>,

    /// Indent HTML output
    #[arg(long)]
    pub pretty: bool,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Text,
}
