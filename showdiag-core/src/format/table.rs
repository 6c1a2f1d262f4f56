use crate::record::{PortRecord, Summary};

/// Render records as a fixed-width terminal table, with an optional summary
/// block. An empty alias shows as `-` in this format only.
pub fn format_table(records: &[PortRecord], summary: Option<&Summary>) -> String {
    let mut lines = Vec::with_capacity(records.len() + 2);
    let header = row(["Port", "Type", "Alias", "Status", "Speed", "Media"]);
    let rule = "-".repeat(header.len().max(81));
    lines.push(header);
    lines.push(rule);

    for record in records {
        let alias = if record.alias.is_empty() {
            "-"
        } else {
            record.alias.as_str()
        };
        lines.push(row([
            &record.port,
            &record.port_type,
            alias,
            &record.status,
            &record.speed,
            &record.media,
        ]));
    }

    if let Some(summary) = summary {
        lines.push(String::new());
        lines.push("--- Summary ---".to_string());
        lines.push(format!("Total Ports Found: {}", summary.total));
        lines.push(format!("Enabled: {}", summary.enabled));
        lines.push(format!("Disabled: {}", summary.disabled));
        if summary.other > 0 {
            lines.push(format!("Other: {}", summary.other));
        }
    }

    lines.join("\n")
}

fn row(cells: [&str; 6]) -> String {
    format!(
        "{:<10} {:<12} {:<30} {:<8} {:<6} {:<10}",
        cells[0], cells[1], cells[2], cells[3], cells[4], cells[5]
    )
    .trim_end()
    .to_string()
}
