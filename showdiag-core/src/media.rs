use serde::{Deserialize, Serialize};

/// One substring rule mapping an SFP/module description onto a media class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRule {
    /// Lower-case substrings, any of which selects this rule.
    pub contains: Vec<String>,
    /// Media class emitted when the rule matches.
    pub media: String,
}

impl MediaRule {
    fn matches(&self, lower: &str) -> bool {
        self.contains.iter().any(|needle| lower.contains(needle.as_str()))
    }
}

/// Embedded default SFP-token rules, checked in order.
///
/// Copper tokens are checked before fiber ones so descriptions like
/// `sfp cu` classify as copper even though they contain no fiber token.
pub fn default_media_rules() -> Vec<MediaRule> {
    vec![
        MediaRule {
            contains: vec!["cu".to_string(), "copper".to_string()],
            media: "Copper".to_string(),
        },
        MediaRule {
            contains: vec![
                "sx".to_string(),
                "lx".to_string(),
                "sr".to_string(),
                "lr".to_string(),
                "er".to_string(),
                "zr".to_string(),
                "qsfp".to_string(),
            ],
            media: "Fiber".to_string(),
        },
    ]
}

/// Classify a raw SFP/module description against the rule list.
///
/// Exact vocabulary matches and module-absent markers are handled before the
/// substring rules; anything no rule claims passes through verbatim so the
/// raw diagnostic text stays visible downstream.
pub fn classify_media(value: &str, rules: &[MediaRule]) -> String {
    let lower = value.trim().to_lowercase();
    match lower.as_str() {
        "fiber" => return "Fiber".to_string(),
        "copper" => return "Copper".to_string(),
        "" | "none" | "n/a" | "(unsupported)" | "no module" => return "No Module".to_string(),
        _ => {}
    }

    for rule in rules {
        if rule.matches(&lower) {
            return rule.media.clone();
        }
    }

    value.trim().to_string()
}
