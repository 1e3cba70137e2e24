//! lcs-convert - route data workbook/CSV to JSON asset converter
//!
//! Reads the `LCS` and `TS` sheets of the chainage workbook and the
//! hand-extracted platform/track-section CSV, normalizes their headers
//! through ordered rule tables, coerces every cell to its declared kind
//! (falling back to the field default) and writes uniform JSON arrays.
//!
//! # Example
//!
//! ```no_run
//! use lcs_convert::normalize::{assemble, lcs_schema};
//! use lcs_convert::excel::WorkbookImporter;
//! use lcs_convert::writer::write_json;
//! use std::path::Path;
//!
//! let mut importer = WorkbookImporter::open("assets/extra/lcschainage1.xlsm")?;
//! let table = importer.read_sheet("LCS")?;
//! let records = assemble(&table, &lcs_schema());
//! write_json(Path::new("assets/data/lcs.json"), &records)?;
//! # Ok::<(), lcs_convert::error::ConvertError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod normalize;
pub mod platform;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use config::ProjectLayout;
pub use error::{ConvertError, ConvertResult};
pub use types::{
    CanonicalRecord, ColumnSchema, FieldKind, FieldSpec, FieldValue, RawCell, RawTable,
};
