//! Tabular normalizer
//!
//! Header matching, per-cell coercion and record assembly shared by the
//! workbook and CSV conversions:
//! - `matcher`: noisy header -> canonical field, via ordered rule tables
//! - `coerce`: raw cell -> declared kind, default on failure
//! - `assembler`: raw table -> uniform records
//! - `schemas`: the LCS, TS and platform schemas

pub mod assembler;
pub mod coerce;
pub mod matcher;
pub mod schemas;

pub use assembler::assemble;
pub use coerce::{coerce, parse_int_list};
pub use matcher::{clean_header, match_header, match_headers, HeaderPattern, HeaderRule};
pub use schemas::{lcs_schema, platform_schema, ts_schema};
