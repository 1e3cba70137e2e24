//! Field coercer - raw cell -> declared kind, falling back to the default

use crate::types::{FieldKind, FieldSpec, FieldValue, RawCell};

/// Coerce a raw cell for `spec`. Never fails: any cell that cannot be
/// represented as the declared kind yields the declared default.
pub fn coerce(cell: &RawCell, spec: &FieldSpec) -> FieldValue {
    match spec.kind {
        FieldKind::Text => match cell {
            RawCell::Empty => spec.default.clone(),
            other => {
                let text = cell_text(other);
                if spec.trim {
                    FieldValue::Text(text.trim().to_string())
                } else {
                    FieldValue::Text(text)
                }
            }
        },
        FieldKind::Float => match to_number(cell) {
            Some(n) => FieldValue::Float(n),
            None => spec.default.clone(),
        },
        FieldKind::Integer => match to_number(cell) {
            // `as` truncates toward zero and saturates at the i64 bounds
            Some(n) => FieldValue::Integer(n as i64),
            None => spec.default.clone(),
        },
        FieldKind::IntegerList => match cell {
            RawCell::Empty => spec.default.clone(),
            RawCell::Text(s) => FieldValue::IntegerList(parse_int_list(s)),
            other => match to_number(other) {
                Some(n) if n.fract() == 0.0 => FieldValue::IntegerList(vec![n as i64]),
                _ => spec.default.clone(),
            },
        },
    }
}

/// Parse comma-separated integers, skipping blank or non-integer segments
pub fn parse_int_list(raw: &str) -> Vec<i64> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| part.parse::<i64>().ok())
        .collect()
}

/// Numeric view of a cell; `None` for empty, non-numeric or non-finite
pub fn to_number(cell: &RawCell) -> Option<f64> {
    let n = match cell {
        RawCell::Empty => return None,
        RawCell::Int(i) => *i as f64,
        RawCell::Float(f) => *f,
        RawCell::Bool(b) => f64::from(u8::from(*b)),
        RawCell::Text(s) => s.trim().parse::<f64>().ok()?,
    };
    n.is_finite().then_some(n)
}

/// Text rendering of a non-empty cell
fn cell_text(cell: &RawCell) -> String {
    match cell {
        RawCell::Empty => String::new(),
        RawCell::Text(s) => s.clone(),
        RawCell::Int(i) => i.to_string(),
        RawCell::Float(f) => format_number(*f),
        RawCell::Bool(b) => b.to_string(),
    }
}

/// Format a number for a text field, dropping a trailing `.0` on integral values
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
