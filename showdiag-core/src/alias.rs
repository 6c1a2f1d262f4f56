use std::collections::HashMap;

use crate::line::LineEvent;

/// Strategy deciding whether one alias value should replace another.
pub trait AliasPreference {
    /// True when `candidate` should be preferred over `incumbent`.
    fn prefer(&self, candidate: &str, incumbent: &str) -> bool;
}

/// Prefer the strictly longer alias, a heuristic for truncated names.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferLonger;

impl AliasPreference for PreferLonger {
    fn prefer(&self, candidate: &str, incumbent: &str) -> bool {
        candidate.len() > incumbent.len()
    }
}

/// Collect running-configuration alias bindings keyed by port identifier.
///
/// Only bindings after the running-configuration section header count. When a
/// port is bound more than once the later value wins, unless the earlier one
/// is strictly preferable under `preference`; that keeps untruncated names
/// over the comment echoes some configurations carry. Ports without a binding
/// simply have no entry.
pub fn build_alias_map(
    events: &[LineEvent],
    preference: &dyn AliasPreference,
) -> HashMap<String, String> {
    let mut aliases: HashMap<String, String> = HashMap::new();
    let mut in_running_config = false;

    for event in events {
        match event {
            LineEvent::SectionStart(name) if name.contains("Running Configuration") => {
                in_running_config = true;
            }
            LineEvent::ConfigAliasLine { port, alias } if in_running_config => {
                match aliases.get_mut(port) {
                    Some(existing) => {
                        if !preference.prefer(existing, alias) {
                            *existing = alias.clone();
                        }
                    }
                    None => {
                        aliases.insert(port.clone(), alias.clone());
                    }
                }
            }
            _ => {}
        }
    }

    aliases
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{build_alias_map, PreferLonger};
    use crate::line::classify;

    #[test]
    fn only_bindings_after_the_section_header_count() {
        let events = classify(
            "port 1/1/x1 alias Too_Early\n\
             Running Configuration\n\
             port 1/1/x2 alias In_Section\n",
        );
        let aliases = build_alias_map(&events, &PreferLonger);

        assert_eq!(aliases.get("1/1/x1"), None);
        assert_eq!(aliases.get("1/1/x2"), Some(&"In_Section".to_string()));
    }

    #[test]
    fn later_binding_wins_unless_earlier_is_strictly_longer() {
        let events = classify(
            "Running Configuration\n\
             port 1/1/x1 alias Uplink_To_Core_Switch\n\
             port 1/1/x1 alias Uplink\n\
             port 1/1/x2 alias Short\n\
             port 1/1/x2 alias Much_Longer_Name\n",
        );
        let aliases = build_alias_map(&events, &PreferLonger);

        assert_eq!(aliases.get("1/1/x1"), Some(&"Uplink_To_Core_Switch".to_string()));
        assert_eq!(aliases.get("1/1/x2"), Some(&"Much_Longer_Name".to_string()));
    }

    #[test]
    fn equal_length_rebinding_takes_the_later_value() {
        let events = classify(
            "Running Configuration\n\
             port 1/1/x1 alias AAAA\n\
             port 1/1/x1 alias BBBB\n",
        );
        let aliases = build_alias_map(&events, &PreferLonger);

        assert_eq!(aliases.get("1/1/x1"), Some(&"BBBB".to_string()));
    }
}
