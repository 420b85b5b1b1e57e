use crate::domain::errors::ProcessError;
use std::path::Path;

/// Renames `temp` over `target` in a single filesystem operation.
///
/// Both paths must be on the same filesystem; a cross-device rename fails and
/// leaves `temp` and `target` as they were.
pub fn replace_original(temp: &Path, target: &Path) -> Result<(), ProcessError> {
    std::fs::rename(temp, target).map_err(ProcessError::Replace)
}
