use crate::config::{ProjectLayout, LCS_SHEET, PLATFORM_CSV_FILE, TS_SHEET};
use crate::error::ConvertResult;
use crate::excel::WorkbookImporter;
use crate::normalize::{assemble, lcs_schema, platform_schema, ts_schema};
use crate::platform::read_platform_csv;
use crate::types::{CanonicalRecord, ColumnSchema, RawTable};
use crate::writer::write_json;
use colored::Colorize;
use std::path::Path;

/// Records produced by the workbook conversion
#[derive(Debug, Clone, PartialEq)]
pub struct WorkbookRecords {
    pub lcs: Vec<CanonicalRecord>,
    pub ts: Vec<CanonicalRecord>,
}

/// Read and normalize the LCS and TS sheets without writing anything
pub fn convert_workbook(path: &Path, verbose: bool) -> ConvertResult<WorkbookRecords> {
    let mut importer = WorkbookImporter::open(path)?;

    if verbose {
        println!("{}", format!("📖 Reading {} sheet...", LCS_SHEET).cyan());
    }
    let lcs_table = importer.read_sheet(LCS_SHEET)?;

    if verbose {
        println!("{}", format!("📖 Reading {} sheet...", TS_SHEET).cyan());
    }
    let ts_table = importer.read_sheet(TS_SHEET)?;

    Ok(WorkbookRecords {
        lcs: normalize_table(&lcs_table, &lcs_schema(), verbose),
        ts: normalize_table(&ts_table, &ts_schema(), verbose),
    })
}

/// Read and normalize the platform CSV without writing anything
pub fn convert_platform_csv(path: &Path, verbose: bool) -> ConvertResult<Vec<CanonicalRecord>> {
    if verbose {
        println!("{}", "📖 Reading platform CSV...".cyan());
    }
    let table = read_platform_csv(path)?;
    Ok(normalize_table(&table, &platform_schema(), verbose))
}

fn normalize_table(
    table: &RawTable,
    schema: &ColumnSchema,
    verbose: bool,
) -> Vec<CanonicalRecord> {
    let records = assemble(table, schema);
    if verbose {
        println!(
            "   {}: {} columns, {} rows -> {} records",
            schema.name.bright_blue(),
            table.headers.len(),
            table.row_count(),
            records.len()
        );
    }
    records
}

/// Execute the excel command: LCS + TS sheets -> lcs.json + ts.json
pub fn excel(layout: &ProjectLayout, verbose: bool) -> ConvertResult<()> {
    let input = layout.workbook_path();
    println!("{}", "🔄 Converting workbook to JSON".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", layout.output_dir().display());

    // Both sheets are read before anything is written
    let records = convert_workbook(&input, verbose)?;

    let lcs_output = layout.lcs_output();
    let ts_output = layout.ts_output();
    write_json(&lcs_output, &records.lcs)?;
    write_json(&ts_output, &records.ts)?;

    println!(
        "{} Saved {} LCS records to {}",
        "✓".green(),
        records.lcs.len(),
        lcs_output.display()
    );
    println!(
        "{} Saved {} TS records to {}",
        "✓".green(),
        records.ts.len(),
        ts_output.display()
    );
    println!("\n{}", "✅ Conversion complete!".bold().green());

    pdf_note();
    Ok(())
}

/// Execute the platform command: platform CSV -> platform_ts.json
pub fn platform(layout: &ProjectLayout, verbose: bool) -> ConvertResult<()> {
    let input = layout.platform_csv_path();
    println!("{}", "🔄 Converting platform CSV to JSON".bold().green());
    println!("   Input:  {}", input.display());
    println!("   Output: {}\n", layout.platform_output().display());

    let records = match convert_platform_csv(&input, verbose) {
        Ok(records) => records,
        Err(e) => {
            if !input.exists() {
                pdf_instructions();
            }
            return Err(e);
        }
    };

    let output = layout.platform_output();
    write_json(&output, &records)?;

    println!(
        "{} Saved {} platform records to {}",
        "✓".green(),
        records.len(),
        output.display()
    );
    println!("\n{}", "✅ Conversion complete!".bold().green());
    Ok(())
}

/// Execute the all command: workbook first, then platform CSV
pub fn all(layout: &ProjectLayout, verbose: bool) -> ConvertResult<()> {
    excel(layout, verbose)?;
    println!();
    platform(layout, verbose)
}

const PLATFORM_PDF: &str = "plat_TS.pdf";

/// The platform table lives in a PDF and is extracted by hand
fn pdf_note() {
    println!(
        "\n{}",
        "Note: Platform data conversion from PDF requires manual extraction.".yellow()
    );
    pdf_instructions();
}

fn pdf_instructions() {
    println!(
        "Please extract the Platform/Track Sections table from {}",
        PLATFORM_PDF
    );
    println!(
        "and save it as {} with columns: Platform, TrackSectionsRaw",
        PLATFORM_CSV_FILE
    );
    println!("Then run `lcs-convert platform`");
}
