//! CLI command handlers

pub mod commands;

pub use commands::{all, convert_platform_csv, convert_workbook, excel, platform, WorkbookRecords};
