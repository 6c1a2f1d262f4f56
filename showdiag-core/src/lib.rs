//! Parsing primitives for vendor "show diag" port-inventory dumps.

pub mod alias;
pub mod assemble;
pub mod extract;
pub mod format;
pub mod line;
pub mod media;
pub mod parser;
pub mod record;

pub use alias::{build_alias_map, AliasPreference, PreferLonger};
pub use assemble::{assemble, natural_key};
pub use extract::{extract_blocks, Extraction, PortBlock};
pub use format::{format_csv, format_json, format_table};
pub use line::{classify, is_port_id, split_columns, LineEvent};
pub use media::{classify_media, default_media_rules, MediaRule};
pub use parser::{parse, parse_file, parse_with_options, ParseError, ParseOptions, ParseOutcome};
pub use record::{PortRecord, Summary};
