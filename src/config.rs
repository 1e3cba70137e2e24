//! Project layout - every input and output path, resolved from one root

use std::path::{Path, PathBuf};

pub const WORKBOOK_FILE: &str = "assets/extra/lcschainage1.xlsm";
pub const PLATFORM_CSV_FILE: &str = "assets/extra/platform_ts.csv";
pub const OUTPUT_DIR: &str = "assets/data";

pub const LCS_SHEET: &str = "LCS";
pub const TS_SHEET: &str = "TS";

pub const LCS_JSON: &str = "lcs.json";
pub const TS_JSON: &str = "ts.json";
pub const PLATFORM_JSON: &str = "platform_ts.json";

/// Fixed file layout under an explicit project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

impl ProjectLayout {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn workbook_path(&self) -> PathBuf {
        self.root.join(WORKBOOK_FILE)
    }

    pub fn platform_csv_path(&self) -> PathBuf {
        self.root.join(PLATFORM_CSV_FILE)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(OUTPUT_DIR)
    }

    pub fn lcs_output(&self) -> PathBuf {
        self.output_dir().join(LCS_JSON)
    }

    pub fn ts_output(&self) -> PathBuf {
        self.output_dir().join(TS_JSON)
    }

    pub fn platform_output(&self) -> PathBuf {
        self.output_dir().join(PLATFORM_JSON)
    }
}
