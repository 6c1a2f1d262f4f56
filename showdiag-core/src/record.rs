use serde::{Deserialize, Serialize};

/// Sentinel for absent type/status/speed fields.
pub const UNKNOWN: &str = "unknown";
/// Sentinel for an absent media field, matching the capitalized media vocabulary.
pub const MEDIA_UNKNOWN: &str = "Unknown";

/// One physical port's inventory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRecord {
    /// Identifier in `<chassis>/<slot>/<designator><number>` form, preserved verbatim.
    pub port: String,
    /// Free-form category such as `network` or `tool`; `unknown` when absent.
    #[serde(rename = "type")]
    pub port_type: String,
    /// Resolved alias; empty when none is known, never null.
    pub alias: String,
    /// `Enabled`/`Disabled`, or the raw status text when unrecognized.
    pub status: String,
    /// `1Gb`/`10Gb`/`40Gb`/`100Gb`, a raw numeric value, or `unknown`.
    pub speed: String,
    /// `Fiber`/`Copper`/`No Module`, a raw module description, or `Unknown`.
    pub media: String,
}

/// Status counts over an assembled record list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub enabled: usize,
    pub disabled: usize,
    /// Statuses that are neither `Enabled` nor `Disabled`.
    pub other: usize,
}
