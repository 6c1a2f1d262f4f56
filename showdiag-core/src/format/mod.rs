//! Record-list output formatters.

pub mod csv;
pub mod json;
pub mod table;

pub use csv::format_csv;
pub use json::format_json;
pub use table::format_table;
