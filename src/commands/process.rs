use crate::cli::Cli;
use crate::services::output::{print_err, print_one};
use crate::services::pipeline::process_file;
use std::path::Path;

/// Runs the pipeline on `input` and prints the outcome.
///
/// Returns `Ok(true)` on success and `Ok(false)` when processing failed and
/// the failure has already been reported.
pub fn handle_process(cli: &Cli, input: &Path) -> anyhow::Result<bool> {
    match process_file(input) {
        Ok(report) => {
            print_one(cli.json, report, |_| "File processed successfully".to_string())?;
            Ok(true)
        }
        Err(err) => {
            log::error!("{} stage failed for {}: {}", err.stage(), input.display(), err);
            print_err(cli.json, &err.to_string(), |m| {
                format!("Error processing file: {}", m)
            })?;
            Ok(false)
        }
    }
}
