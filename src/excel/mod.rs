//! Excel workbook import
//!
//! Reads named worksheets into `RawTable`s for the normalizer.

mod importer;

pub use importer::{dedupe_headers, range_to_table, to_raw_cell, WorkbookImporter};
