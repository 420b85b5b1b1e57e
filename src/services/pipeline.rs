use crate::domain::errors::ProcessError;
use crate::domain::models::{ProcessPaths, ProcessReport, Stage};
use crate::services::backup::create_backup;
use crate::services::commit::replace_original;
use crate::services::filter::filter_to_temp;
use std::path::Path;

/// Backs up, filters and replaces `input`, stopping at the first failing stage.
///
/// Nothing is rolled back: the `.bak` always survives, and a `.temp` written
/// before a failure stays on disk.
pub fn process_file(input: &Path) -> Result<ProcessReport, ProcessError> {
    run_stages(input, replace_original)
}

fn run_stages<C>(input: &Path, commit: C) -> Result<ProcessReport, ProcessError>
where
    C: FnOnce(&Path, &Path) -> Result<(), ProcessError>,
{
    let paths = ProcessPaths::for_input(input);

    log::info!(
        "{}: {} -> {}",
        Stage::BackingUp,
        paths.input.display(),
        paths.backup.display()
    );
    let backup = create_backup(&paths.input, &paths.backup)?;
    log::debug!("backup holds {} bytes, sha256 {}", backup.bytes, backup.sha256);

    log::info!(
        "{}: {} -> {}",
        Stage::Filtering,
        paths.input.display(),
        paths.temp.display()
    );
    let stats = filter_to_temp(&paths.input, &paths.temp)?;
    log::info!(
        "kept {} of {} lines ({} removed)",
        stats.lines_kept,
        stats.lines_read,
        stats.lines_removed
    );

    log::info!(
        "{}: {} -> {}",
        Stage::Committing,
        paths.temp.display(),
        paths.input.display()
    );
    commit(&paths.temp, &paths.input)?;

    Ok(ProcessReport {
        input: paths.input.display().to_string(),
        backup: paths.backup.display().to_string(),
        backup_sha256: backup.sha256,
        backup_bytes: backup.bytes,
        stats,
    })
}
