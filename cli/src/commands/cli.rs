use std::path::PathBuf;

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{ArgGroup, Parser};
use daily_tasks_core::OutputFormat;

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "daily-tasks", about = "A script to manage daily tasks.")]
#[command(group(ArgGroup::new("source").required(true).args(["file", "tasks"])))]
pub struct Args {
    /// Start time in format HH:MM (defaults to config, then 9:00)
    #[arg(short, long)]
    pub start: Option<String>,

    /// End time in format HH:MM (defaults to config, then 21:00)
    #[arg(short, long)]
    pub end: Option<String>,

    /// A file with tasks, one task per line
    #[arg(short, long, value_parser = OsStringValueParser::new().map(PathBuf::from))]
    pub file: Option<PathBuf>,

    /// A string with tasks, delimited by commas or semicolons
    #[arg(short, long)]
    pub tasks: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Read configuration from this file instead of the default locations.
    #[arg(long)]
    pub config: Option<PathBuf>,
}
