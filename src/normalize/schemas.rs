//! Concrete output schemas and their header rule tables

use crate::normalize::matcher::{HeaderPattern, HeaderRule};
use crate::types::{ColumnSchema, FieldSpec};

use HeaderPattern::{ContainsAll, ContainsAny, Exact};

/// LCS sheet rules, evaluated top to bottom
pub static LCS_RULES: &[HeaderRule] = &[
    HeaderRule::new(ContainsAll(&["CURRENT", "LCS"]), "currentLcsCode"),
    HeaderRule::new(ContainsAll(&["LEGACY", "LCS"]), "legacyLcsCode"),
    HeaderRule::new(Exact(&["VCC"]), "vcc"),
    HeaderRule::new(Exact(&["CHAINAGE.1", "CHAINAGE END"]), "chainageEnd"),
    HeaderRule::new(ContainsAll(&["CHAINAGE"]), "chainageStart"),
    HeaderRule::new(ContainsAll(&["LENGTH"]), "lcsLength"),
    HeaderRule::new(ContainsAny(&["DESCRIPTION", "SHORT"]), "shortDescription"),
];

/// TS sheet rules, evaluated top to bottom
pub static TS_RULES: &[HeaderRule] = &[
    HeaderRule::new(ContainsAll(&["TS"]), "tsId"),
    HeaderRule::new(ContainsAll(&["SEGMENT"]), "segment"),
    HeaderRule::new(ContainsAll(&["CHAINAGE", "START"]), "chainageStart"),
    HeaderRule::new(Exact(&["VCC"]), "vcc"),
];

pub static PLATFORM_RULES: &[HeaderRule] = &[
    HeaderRule::new(Exact(&["PLATFORM"]), "platform"),
    HeaderRule::new(Exact(&["TRACKSECTIONSRAW"]), "trackSections"),
];

/// Schema for the `LCS` sheet
pub fn lcs_schema() -> ColumnSchema {
    ColumnSchema::new(
        "LCS",
        vec![
            FieldSpec::text("currentLcsCode"),
            FieldSpec::text("legacyLcsCode"),
            FieldSpec::float("vcc"),
            FieldSpec::float("chainageStart"),
            FieldSpec::float("chainageEnd"),
            FieldSpec::float("lcsLength"),
            FieldSpec::text("shortDescription"),
        ],
        LCS_RULES,
    )
}

/// Schema for the `TS` sheet
pub fn ts_schema() -> ColumnSchema {
    ColumnSchema::new(
        "TS",
        vec![
            FieldSpec::integer("tsId"),
            FieldSpec::text("segment"),
            FieldSpec::float("chainageStart"),
            FieldSpec::float("vcc"),
        ],
        TS_RULES,
    )
}

/// Schema for the platform -> track sections CSV.
/// Rows without a platform name are dropped.
pub fn platform_schema() -> ColumnSchema {
    ColumnSchema::new(
        "platform",
        vec![
            FieldSpec::text("platform").trimmed().required(),
            FieldSpec::integer_list("trackSections"),
        ],
        PLATFORM_RULES,
    )
}
