use std::collections::{BTreeMap, HashMap};

use log::warn;

use crate::line::{is_port_id, split_columns, LineEvent};
use crate::media::{classify_media, MediaRule};
use crate::record::UNKNOWN;

/// Speed values reported in Mbps by the dump, mapped to the display vocabulary.
const SPEED_MBPS: &[(&str, &str)] = &[
    ("1000", "1Gb"),
    ("10000", "10Gb"),
    ("40000", "40Gb"),
    ("100000", "100Gb"),
];

const SPEED_VOCAB: &[&str] = &["1Gb", "10Gb", "40Gb", "100Gb"];

/// Fields captured from one per-port parameter block. Absent fields stay
/// `None`; the assembler applies the display defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortBlock {
    pub port: String,
    pub port_type: Option<String>,
    pub status: Option<String>,
    pub speed: Option<String>,
    pub media: Option<String>,
    /// Raw alias from the block itself; may be truncated by the dump.
    pub primary_alias: Option<String>,
    /// Labels the extractor does not recognize, kept for diagnostics.
    pub extras: BTreeMap<String, String>,
}

impl PortBlock {
    fn new(port: String) -> Self {
        Self {
            port,
            port_type: None,
            status: None,
            speed: None,
            media: None,
            primary_alias: None,
            extras: BTreeMap::new(),
        }
    }
}

/// Extraction result: blocks in encounter order plus a malformed-header count.
#[derive(Debug, Default)]
pub struct Extraction {
    pub blocks: Vec<PortBlock>,
    pub skipped: usize,
}

/// Walk the classified line stream and accumulate per-port field blocks.
///
/// Each `PortHeader` opens one block per column; field rows fan their values
/// across those columns until the next header, section banner, or end of
/// input. Columns with malformed identifiers are dropped (counted, not
/// fatal) while their neighbors keep their alignment; a repeated header for
/// the same port replaces the earlier fields wholesale, with a warning.
pub fn extract_blocks(events: &[LineEvent], media_rules: &[MediaRule]) -> Extraction {
    let mut extraction = Extraction::default();
    let mut index: HashMap<String, usize> = HashMap::new();
    // One slot per header column; None marks a malformed identifier whose
    // values must still be consumed positionally.
    let mut columns: Vec<Option<usize>> = Vec::new();

    for event in events {
        match event {
            LineEvent::PortHeader(tokens) => {
                columns.clear();
                for token in tokens {
                    if !is_port_id(token) {
                        warn!("skipping column with malformed port identifier {token:?}");
                        extraction.skipped += 1;
                        columns.push(None);
                        continue;
                    }
                    let idx = if let Some(&existing) = index.get(token) {
                        warn!("duplicate parameter block for port {token}; later fields win");
                        extraction.blocks[existing] = PortBlock::new(token.clone());
                        existing
                    } else {
                        index.insert(token.clone(), extraction.blocks.len());
                        extraction.blocks.push(PortBlock::new(token.clone()));
                        extraction.blocks.len() - 1
                    };
                    columns.push(Some(idx));
                }
            }
            LineEvent::SectionStart(_) => columns.clear(),
            LineEvent::FieldLine { key, value } => {
                if columns.len() == 1 {
                    // Single-column blocks keep the whole remainder, so
                    // values may contain wide gaps.
                    if let Some(idx) = columns[0] {
                        apply_field(&mut extraction.blocks[idx], key, value, media_rules);
                    }
                } else {
                    for (column, part) in split_columns(value).iter().enumerate() {
                        if let Some(&Some(idx)) = columns.get(column) {
                            apply_field(&mut extraction.blocks[idx], key, part, media_rules);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    extraction
}

fn apply_field(block: &mut PortBlock, key: &str, value: &str, media_rules: &[MediaRule]) {
    match key.to_lowercase().as_str() {
        "type" => block.port_type = Some(normalize_type(value)),
        "admin" | "status" => block.status = Some(normalize_status(value)),
        "speed (mbps)" | "speed" => block.speed = Some(normalize_speed(value)),
        "sfp type" | "media" => block.media = Some(classify_media(value, media_rules)),
        "alias" => block.primary_alias = Some(value.to_string()),
        _ => {
            block.extras.insert(key.to_string(), value.to_string());
        }
    }
}

/// Strip the transceiver marker the dump appends to some type values.
fn normalize_type(value: &str) -> String {
    value.replace("(T)", "").trim().to_string()
}

fn normalize_status(value: &str) -> String {
    if value.eq_ignore_ascii_case("enabled") {
        "Enabled".to_string()
    } else if value.eq_ignore_ascii_case("disabled") {
        "Disabled".to_string()
    } else {
        value.to_string()
    }
}

fn normalize_speed(value: &str) -> String {
    if let Some((_, display)) = SPEED_MBPS.iter().find(|(mbps, _)| *mbps == value) {
        return (*display).to_string();
    }
    if let Some(known) = SPEED_VOCAB.iter().find(|known| known.eq_ignore_ascii_case(value)) {
        return (*known).to_string();
    }
    // Unrecognized but numeric-looking speeds pass through verbatim.
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        return value.to_string();
    }
    UNKNOWN.to_string()
}
