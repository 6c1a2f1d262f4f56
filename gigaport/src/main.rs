use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use showdiag_core::{format_csv, format_json, format_table, parse_with_options, ParseOptions};

mod cli;
mod media_rules;
mod report;

use cli::{Cli, OutputFormat};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;

    let (rules, rules_source) = media_rules::resolve_media_rules(cli.media_rules.as_deref());
    log::debug!("using media rules: {rules_source}");

    let options = ParseOptions {
        media_rules: rules,
        ..ParseOptions::default()
    };
    let outcome = parse_with_options(&raw, &options)
        .with_context(|| format!("failed to parse {}", cli.file.display()))?;

    if outcome.skipped_blocks > 0 {
        eprintln!(
            "warning: skipped {} malformed parameter block(s)",
            outcome.skipped_blocks
        );
    }

    let summary = (!cli.no_summary).then_some(&outcome.summary);
    match cli.format {
        OutputFormat::Table => println!(
            "{}",
            report::render_table(&format_table(&outcome.records, summary))
        ),
        OutputFormat::Csv => print!("{}", format_csv(&outcome.records)),
        OutputFormat::Json => println!("{}", format_json(&outcome.records)),
    }

    Ok(())
}
