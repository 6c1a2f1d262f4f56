use crate::record::PortRecord;

/// Render records as a pretty-printed JSON array with lower-case keys.
pub fn format_json(records: &[PortRecord]) -> String {
    serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
}
