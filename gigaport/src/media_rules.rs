use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use showdiag_core::{default_media_rules, MediaRule};

#[derive(Debug, Deserialize)]
struct MediaRulesFile {
    #[serde(default)]
    rule: Vec<MediaRule>,
}

/// Load media rules from a TOML file of `[[rule]]` tables.
pub fn load_media_rules(path: &Path) -> Result<Vec<MediaRule>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read media rules {}", path.display()))?;
    let file: MediaRulesFile = toml::from_str(&text)
        .with_context(|| format!("failed to parse media rules {}", path.display()))?;
    Ok(file.rule)
}

/// Resolve rules from an optional override path, falling back to the
/// embedded defaults with a warning instead of aborting.
pub fn resolve_media_rules(path: Option<&Path>) -> (Vec<MediaRule>, String) {
    let Some(path) = path else {
        return (default_media_rules(), "embedded".to_string());
    };

    match load_media_rules(path) {
        Ok(rules) if !rules.is_empty() => (rules, format!("file:{}", path.display())),
        Ok(_) => {
            eprintln!(
                "warning: no rules found in {}; using embedded defaults",
                path.display()
            );
            (default_media_rules(), "embedded".to_string())
        }
        Err(err) => {
            eprintln!(
                "warning: failed to load media rules from {} ({err:#}); using embedded defaults",
                path.display()
            );
            (default_media_rules(), "embedded".to_string())
        }
    }
}
