//! Platform -> track sections CSV import
//!
//! The CSV is produced by hand from the platform PDF and must carry a header
//! row with `Platform` and `TrackSectionsRaw` columns. A UTF-8 byte-order
//! mark at the start of the file is tolerated.

use crate::error::{ConvertError, ConvertResult};
use crate::types::{RawCell, RawTable};
use std::io::Read;
use std::path::Path;
use tracing::debug;

const BOM: char = '\u{feff}';

/// Read the CSV at `path` into a RawTable of text cells
pub fn read_platform_csv(path: &Path) -> ConvertResult<RawTable> {
    if !path.exists() {
        return Err(ConvertError::MissingInput(path.to_path_buf()));
    }
    let file = std::fs::File::open(path)?;
    let table = read_csv(file)?;
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.row_count(),
        "platform csv loaded"
    );
    Ok(table)
}

/// Read CSV from any reader. Rows may be shorter or longer than the header.
pub fn read_csv<R: Read>(reader: R) -> ConvertResult<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .enumerate()
        .map(|(idx, h)| match idx {
            0 => h.trim_start_matches(BOM).trim().to_string(),
            _ => h.trim().to_string(),
        })
        .collect();
    let mut table = RawTable::new(headers);

    for record in rdr.records() {
        let record = record?;
        let row = record
            .iter()
            .map(|field| match field {
                "" => RawCell::Empty,
                text => RawCell::Text(text.to_string()),
            })
            .collect();
        table.push_row(row);
    }

    Ok(table)
}
