//! Record assembler - RawTable + ColumnSchema -> ordered canonical records

use crate::normalize::coerce::coerce;
use crate::normalize::matcher::match_headers;
use crate::types::{CanonicalRecord, ColumnSchema, RawCell, RawTable};
use tracing::warn;

/// Build one record per source row, in source order.
///
/// Every record carries exactly the schema's fields in declaration order.
/// Fields with no matching column are backfilled with their default; rows
/// whose required fields come out blank are dropped.
pub fn assemble(table: &RawTable, schema: &ColumnSchema) -> Vec<CanonicalRecord> {
    let mapping = match_headers(schema.rules, &table.headers);

    // field index -> source column index
    let sources: Vec<Option<usize>> = schema
        .fields
        .iter()
        .map(|field| mapping.iter().position(|m| *m == Some(field.name)))
        .collect();

    for (field, source) in schema.fields.iter().zip(&sources) {
        if source.is_none() {
            warn!(
                schema = schema.name,
                field = field.name,
                "no source column matched, backfilling default"
            );
        }
    }

    let mut records = Vec::with_capacity(table.row_count());
    for row in 0..table.row_count() {
        let mut record = CanonicalRecord::with_capacity(schema.fields.len());
        let mut keep = true;

        for (field, source) in schema.fields.iter().zip(&sources) {
            let value = match source {
                Some(col) => coerce(table.cell(row, *col), field),
                None => coerce(&RawCell::Empty, field),
            };
            if field.required && value.is_blank() {
                keep = false;
                break;
            }
            record.push(field.name, value);
        }

        if keep {
            records.push(record);
        } else {
            warn!(schema = schema.name, row, "required field blank, dropped");
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::schemas::{lcs_schema, platform_schema, ts_schema};
    use serde_json::json;

    fn table(headers: &[&str], rows: Vec<Vec<RawCell>>) -> RawTable {
        let mut t = RawTable::new(headers.iter().map(|h| h.to_string()).collect());
        for row in rows {
            t.push_row(row);
        }
        t
    }

    fn to_json(records: &[CanonicalRecord]) -> serde_json::Value {
        serde_json::to_value(records).unwrap()
    }

    #[test]
    fn test_lcs_record_has_all_fields_in_order() {
        let t = table(
            &["Current LCS", "VCC", "Chainage", "Chainage.1", "Notes"],
            vec![vec![
                "L100".into(),
                RawCell::Float(3.0),
                RawCell::Float(10.5),
                "11.25".into(),
                "ignored".into(),
            ]],
        );
        let records = assemble(&t, &lcs_schema());

        let keys: Vec<_> = records[0].keys().collect();
        assert_eq!(keys, lcs_schema().field_names());
        assert_eq!(
            to_json(&records),
            json!([{
                "currentLcsCode": "L100",
                "legacyLcsCode": "",
                "vcc": 3.0,
                "chainageStart": 10.5,
                "chainageEnd": 11.25,
                "lcsLength": 0.0,
                "shortDescription": ""
            }])
        );
    }

    #[test]
    fn test_short_rows_default_missing_cells() {
        let t = table(&["TS", "Segment", "VCC"], vec![vec![RawCell::Int(7)]]);
        let records = assemble(&t, &ts_schema());
        assert_eq!(
            to_json(&records),
            json!([{
                "tsId": 7,
                "segment": "",
                "chainageStart": 0.0,
                "vcc": 0.0
            }])
        );
    }

    #[test]
    fn test_no_matching_columns_still_emits_rows() {
        let t = table(&["foo"], vec![vec!["x".into()], vec![RawCell::Empty]]);
        let records = assemble(&t, &ts_schema());
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.len() == 4));
    }

    #[test]
    fn test_platform_rows_filtered_and_order_kept() {
        let t = table(
            &["Platform", "TrackSectionsRaw"],
            vec![
                vec!["P2".into(), "9".into()],
                vec!["   ".into(), "1,2".into()],
                vec!["P1".into(), "5,6".into()],
                vec![RawCell::Empty, "3".into()],
            ],
        );
        let records = assemble(&t, &platform_schema());
        assert_eq!(
            to_json(&records),
            json!([
                {"platform": "P2", "trackSections": [9]},
                {"platform": "P1", "trackSections": [5, 6]}
            ])
        );
    }

    #[test]
    fn test_missing_required_column_drops_everything() {
        let t = table(&["TrackSectionsRaw"], vec![vec!["1".into()]]);
        assert!(assemble(&t, &platform_schema()).is_empty());
    }
}
