use serde::Serialize;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

pub const BACKUP_SUFFIX: &str = ".bak";
pub const TEMP_SUFFIX: &str = ".temp";

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: String,
}

/// The three files a run touches, all derived from the input path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessPaths {
    pub input: PathBuf,
    pub backup: PathBuf,
    pub temp: PathBuf,
}

impl ProcessPaths {
    pub fn for_input(input: &Path) -> Self {
        Self {
            input: input.to_path_buf(),
            backup: with_suffix(input, BACKUP_SUFFIX),
            temp: with_suffix(input, TEMP_SUFFIX),
        }
    }
}

// Appends to the full file name; `Path::with_extension` would replace `.conf`.
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut raw: OsString = path.as_os_str().to_owned();
    raw.push(suffix);
    PathBuf::from(raw)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    BackingUp,
    Filtering,
    Committing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::BackingUp => "backup",
            Stage::Filtering => "filter",
            Stage::Committing => "commit",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    pub lines_read: u64,
    pub lines_kept: u64,
    pub lines_removed: u64,
    pub bytes_written: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessReport {
    pub input: String,
    pub backup: String,
    /// Hex SHA-256 of the bytes copied into the backup.
    pub backup_sha256: String,
    pub backup_bytes: u64,
    #[serde(flatten)]
    pub stats: FilterStats,
}
