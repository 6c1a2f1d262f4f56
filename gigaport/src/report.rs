use colored::Colorize;

/// Tint rendered table lines for terminal output: enabled rows green,
/// disabled rows red, the summary block cyan.
pub fn render_table(raw: &str) -> String {
    let mut out = Vec::new();
    let mut in_summary = false;

    for line in raw.lines() {
        let colored = if line.starts_with("--- Summary ---") {
            in_summary = true;
            line.cyan().to_string()
        } else if in_summary {
            line.cyan().to_string()
        } else if line.contains(" Enabled") {
            line.green().to_string()
        } else if line.contains(" Disabled") {
            line.red().to_string()
        } else {
            line.to_string()
        };
        out.push(colored);
    }

    out.join("\n")
}
