use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "gigaport")]
#[command(about = "Extract port inventory from Gigamon 'show diag' output")]
#[command(version, disable_version_flag = true)]
pub struct Cli {
    /// Path to the captured "show diag" file.
    pub file: PathBuf,
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
    /// Hide the summary counts.
    #[arg(long)]
    pub no_summary: bool,
    /// Optional media-rules TOML file overriding the embedded SFP rules.
    #[arg(long)]
    pub media_rules: Option<PathBuf>,
    /// Print version.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}
