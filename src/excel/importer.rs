//! Workbook importer - one named sheet -> RawTable

use crate::error::{ConvertError, ConvertResult};
use crate::types::{RawCell, RawTable};
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads named sheets of an .xlsx / .xlsm / .xls / .ods workbook
pub struct WorkbookImporter {
    path: PathBuf,
    workbook: Sheets<BufReader<File>>,
}

impl WorkbookImporter {
    /// Open a workbook; fails with `MissingInput` if the file does not exist
    pub fn open<P: AsRef<Path>>(path: P) -> ConvertResult<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(ConvertError::MissingInput(path));
        }
        let workbook = open_workbook_auto(&path)?;
        Ok(Self { path, workbook })
    }

    /// Read a sheet; the first row is the header row
    pub fn read_sheet(&mut self, sheet: &str) -> ConvertResult<RawTable> {
        if !self.workbook.sheet_names().iter().any(|s| s == sheet) {
            return Err(ConvertError::MissingSheet {
                sheet: sheet.to_string(),
                path: self.path.clone(),
            });
        }
        let range = self.workbook.worksheet_range(sheet)?;
        let table = range_to_table(&range);
        debug!(
            sheet,
            columns = table.headers.len(),
            rows = table.row_count(),
            "sheet loaded"
        );
        Ok(table)
    }
}

/// Convert a cell range to a RawTable: header row, then data rows with
/// trailing blank rows trimmed
pub fn range_to_table(range: &Range<Data>) -> RawTable {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return RawTable::default();
    };

    let headers = header_row
        .iter()
        .enumerate()
        .map(|(idx, cell)| header_name(idx, cell))
        .collect::<Vec<_>>();
    let mut table = RawTable::new(dedupe_headers(headers));

    for row in rows {
        table.push_row(row.iter().map(to_raw_cell).collect());
    }

    while table
        .rows
        .last()
        .is_some_and(|row| row.iter().all(RawCell::is_empty))
    {
        table.rows.pop();
    }

    table
}

fn header_name(idx: usize, cell: &Data) -> String {
    match cell {
        Data::Empty => format!("Unnamed: {}", idx),
        Data::String(s) if s.trim().is_empty() => format!("Unnamed: {}", idx),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        other => other.to_string(),
    }
}

/// Suffix repeated headers with `.1`, `.2`, ... in order of appearance,
/// skipping suffixes that collide with an existing header
pub fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<String> = Vec::with_capacity(headers.len());

    for header in headers {
        let mut name = header.clone();
        while out.contains(&name) {
            let count = seen.entry(header.clone()).or_insert(0);
            *count += 1;
            name = format!("{}.{}", header, count);
        }
        out.push(name);
    }

    out
}

/// Map a calamine cell to a RawCell. Dates become their serial number.
pub fn to_raw_cell(cell: &Data) -> RawCell {
    match cell {
        Data::Empty => RawCell::Empty,
        Data::String(s) => RawCell::Text(s.clone()),
        Data::Int(i) => RawCell::Int(*i),
        Data::Float(f) => RawCell::Float(*f),
        Data::Bool(b) => RawCell::Bool(*b),
        Data::DateTime(dt) => RawCell::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => RawCell::Text(s.clone()),
        Data::Error(_) => RawCell::Empty,
    }
}
