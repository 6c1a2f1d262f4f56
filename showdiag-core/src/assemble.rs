use std::collections::HashMap;

use crate::alias::AliasPreference;
use crate::extract::PortBlock;
use crate::record::{PortRecord, Summary, MEDIA_UNKNOWN, UNKNOWN};

/// One alternating run of a natural-sort key. Digit runs compare as integers,
/// everything else lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeySegment {
    Number(u64),
    Text(String),
}

/// Split an identifier into segments that compare numerically where digits
/// occur, so `1/1/x10` sorts after `1/1/x2`.
pub fn natural_key(id: &str) -> Vec<KeySegment> {
    let mut key = Vec::new();
    let mut chars = id.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            let mut n: u64 = 0;
            while let Some(digit) = chars.peek().and_then(|d| d.to_digit(10)) {
                n = n * 10 + u64::from(digit);
                chars.next();
            }
            key.push(KeySegment::Number(n));
        } else {
            let mut text = String::new();
            while let Some(&d) = chars.peek() {
                if d.is_ascii_digit() {
                    break;
                }
                text.push(d);
                chars.next();
            }
            key.push(KeySegment::Text(text));
        }
    }

    key
}

/// Merge extracted blocks with running-config aliases into final records,
/// in natural port order, with status counts.
pub fn assemble(
    blocks: Vec<PortBlock>,
    aliases: &HashMap<String, String>,
    preference: &dyn AliasPreference,
) -> (Vec<PortRecord>, Summary) {
    let mut records: Vec<PortRecord> = blocks
        .into_iter()
        .map(|block| {
            let alias = resolve_alias(
                block.primary_alias.as_deref(),
                aliases.get(&block.port).map(String::as_str),
                preference,
            );
            PortRecord {
                port: block.port,
                port_type: block.port_type.unwrap_or_else(|| UNKNOWN.to_string()),
                alias,
                status: block.status.unwrap_or_else(|| UNKNOWN.to_string()),
                speed: block.speed.unwrap_or_else(|| UNKNOWN.to_string()),
                media: block.media.unwrap_or_else(|| MEDIA_UNKNOWN.to_string()),
            }
        })
        .collect();

    records.sort_by_cached_key(|record| natural_key(&record.port));

    let mut summary = Summary {
        total: records.len(),
        ..Summary::default()
    };
    for record in &records {
        match record.status.as_str() {
            "Enabled" => summary.enabled += 1,
            "Disabled" => summary.disabled += 1,
            _ => summary.other += 1,
        }
    }

    (records, summary)
}

/// The running-config value only replaces a non-empty primary alias when it
/// is strictly preferable (longer, under the default heuristic); a full
/// primary alias is never downgraded.
fn resolve_alias(
    primary: Option<&str>,
    resolved: Option<&str>,
    preference: &dyn AliasPreference,
) -> String {
    match (primary.filter(|p| !p.is_empty()), resolved) {
        (Some(primary), Some(full)) => {
            if preference.prefer(full, primary) {
                full.to_string()
            } else {
                primary.to_string()
            }
        }
        (Some(primary), None) => primary.to_string(),
        (None, Some(full)) => full.to_string(),
        (None, None) => String::new(),
    }
}
