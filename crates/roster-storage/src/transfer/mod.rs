//! Tab-separated bulk transfer: import with conflict-skip, export in
//! table-declaration column order.

pub mod export;
pub mod import;

pub use export::{export_tsv, write_tsv};
pub use import::{import_tsv, parse_tsv, ImportSummary, ParsedTsv};
