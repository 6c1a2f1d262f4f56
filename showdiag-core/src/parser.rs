use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::alias::{build_alias_map, AliasPreference, PreferLonger};
use crate::assemble::assemble;
use crate::extract::extract_blocks;
use crate::line::classify;
use crate::media::{default_media_rules, MediaRule};
use crate::record::{PortRecord, Summary};

/// Errors that abort a parse run outright.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input held no text at all.
    #[error("input is empty")]
    EmptyInput,
    /// Failed to read the input file.
    #[error("failed to read diagnostic file: {0}")]
    Io(#[from] std::io::Error),
}

/// Knobs for a parse run; `Default` matches the stock dump format.
pub struct ParseOptions {
    /// SFP-token classification rules, checked in order.
    pub media_rules: Vec<MediaRule>,
    /// Strategy for choosing between competing alias values.
    pub alias_preference: Box<dyn AliasPreference>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            media_rules: default_media_rules(),
            alias_preference: Box::new(PreferLonger),
        }
    }
}

/// Result of one parse run.
#[derive(Debug)]
pub struct ParseOutcome {
    /// Assembled records in natural port order.
    pub records: Vec<PortRecord>,
    /// Status counts over `records`.
    pub summary: Summary,
    /// Parameter blocks dropped for malformed port identifiers.
    pub skipped_blocks: usize,
}

/// Parse dump text with default options.
pub fn parse(raw: &str) -> Result<ParseOutcome, ParseError> {
    parse_with_options(raw, &ParseOptions::default())
}

/// Parse dump text into ordered port records and status counts.
///
/// Only empty input is fatal; malformed blocks degrade to skips and
/// unrecognized field values pass through verbatim, so one bad block never
/// loses the rest of the file's data.
pub fn parse_with_options(raw: &str, options: &ParseOptions) -> Result<ParseOutcome, ParseError> {
    if raw.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let events = classify(raw);
    let aliases = build_alias_map(&events, options.alias_preference.as_ref());
    let extraction = extract_blocks(&events, &options.media_rules);
    let (records, summary) = assemble(
        extraction.blocks,
        &aliases,
        options.alias_preference.as_ref(),
    );

    Ok(ParseOutcome {
        records,
        summary,
        skipped_blocks: extraction.skipped,
    })
}

/// Read and parse a diagnostic dump file.
pub fn parse_file(path: &Path) -> Result<ParseOutcome, ParseError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{parse, ParseError};

    #[test]
    fn empty_input_is_fatal() {
        assert!(matches!(parse(""), Err(ParseError::EmptyInput)));
        assert!(matches!(parse("   \n\t\n"), Err(ParseError::EmptyInput)));
    }

    #[test]
    fn text_with_no_ports_yields_an_empty_outcome() {
        let outcome = parse("just some notes\nnothing port shaped here\n").expect("parse");
        assert_eq!(outcome.records.len(), 0);
        assert_eq!(outcome.summary.total, 0);
        assert_eq!(outcome.skipped_blocks, 0);
    }
}
