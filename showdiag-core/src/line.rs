use once_cell::sync::Lazy;
use regex::Regex;

/// Shape a valid port identifier must take: chassis/slot/designator+number.
static PORT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+/\d+/[a-z]+\d+$").expect("port id pattern"));

/// `Parameter 1/1/x1` or `Port 1/1/x1` opens a block; wide dumps list
/// several identifiers on one header line, one column each.
static PORT_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:Parameter|Port):?\s+(\S.*?)\s*$").expect("port header pattern")
});

/// Columnar layouts separate values with runs of two or more spaces.
static COLUMN_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("column split pattern"));

/// Banner lines such as `### Port Parameters ###`.
static SECTION_BANNER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*#+\s*([^#]+?)\s*#+\s*$").expect("section banner pattern"));

/// `port <id> alias <name>` bindings from the running configuration.
static CONFIG_ALIAS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*port\s+([0-9]+/[0-9]+/[a-z0-9]+)\s+alias\s+(.+)$")
        .expect("config alias pattern")
});

/// `Label: value` field line.
static FIELD_COLON_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Za-z][A-Za-z0-9 ()/+-]*?)\s*:\s+(\S.*?)\s*$").expect("colon field pattern")
});

/// `Label  value` field line with a wide-column gap instead of a colon.
static FIELD_WIDE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Za-z][A-Za-z0-9 ()/+-]*?)\s{2,}(\S.*?)\s*$").expect("wide field pattern")
});

/// A classified input line, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// Opens a group of per-port parameter blocks, one column per token.
    /// Tokens that fail the identifier pattern are kept in place so field
    /// values still line up with their columns; the extractor skips them.
    PortHeader(Vec<String>),
    /// A `label: value` (or wide-column) line inside a block.
    FieldLine { key: String, value: String },
    /// A section banner, for example the running-configuration header.
    SectionStart(String),
    /// A `port <id> alias <name>` binding.
    ConfigAliasLine { port: String, alias: String },
    /// Anything that matches no known pattern; ignored downstream.
    Other,
}

/// Classify raw dump text into line events in a single forward pass.
///
/// Classification never reorders lines; every input line yields exactly one
/// event, with unmatched lines becoming [`LineEvent::Other`].
pub fn classify(raw: &str) -> Vec<LineEvent> {
    raw.lines().map(classify_line).collect()
}

/// Classify one line of dump text.
pub fn classify_line(line: &str) -> LineEvent {
    if let Some(caps) = PORT_HEADER_RE.captures(line) {
        let tokens = split_columns(&caps[1]);
        // A lone token after the keyword is always a header attempt, valid
        // id or not. Multi-token remainders only count as headers when at
        // least one column is a real identifier; otherwise the line is a
        // field whose label happens to start with the keyword.
        if tokens.len() == 1 || tokens.iter().any(|token| is_port_id(token)) {
            return LineEvent::PortHeader(tokens);
        }
    }

    if line.contains("Running Configuration") {
        return LineEvent::SectionStart("Running Configuration".to_string());
    }
    if let Some(caps) = SECTION_BANNER_RE.captures(line) {
        return LineEvent::SectionStart(caps[1].to_string());
    }

    if let Some(caps) = CONFIG_ALIAS_RE.captures(line) {
        return LineEvent::ConfigAliasLine {
            port: caps[1].to_string(),
            // Aliases may be quoted in the running configuration.
            alias: caps[2].trim().replace('"', ""),
        };
    }

    if let Some((key, value)) = split_field(line) {
        return LineEvent::FieldLine { key, value };
    }

    LineEvent::Other
}

/// Whether a token is a well-formed port identifier such as `1/1/x1`.
pub fn is_port_id(token: &str) -> bool {
    PORT_ID_RE.is_match(token)
}

/// Split a header or value remainder into its wide-column parts.
pub fn split_columns(text: &str) -> Vec<String> {
    COLUMN_SPLIT_RE
        .split(text.trim())
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_field(line: &str) -> Option<(String, String)> {
    for re in [&*FIELD_COLON_RE, &*FIELD_WIDE_RE] {
        if let Some(caps) = re.captures(line) {
            return Some((caps[1].trim().to_string(), caps[2].trim().to_string()));
        }
    }
    None
}
