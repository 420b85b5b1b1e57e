use super::models::Stage;

/// Every way a run can fail once a path has been supplied.
///
/// Each variant names the step that failed and wraps the underlying I/O error.
#[derive(thiserror::Error, Debug)]
pub enum ProcessError {
    #[error("failed to create backup: {0}")]
    Backup(#[source] std::io::Error),
    #[error("failed to open input file: {0}")]
    OpenInput(#[source] std::io::Error),
    #[error("failed to create temporary file: {0}")]
    CreateTemp(#[source] std::io::Error),
    #[error("failed to write to temporary file: {0}")]
    WriteTemp(#[source] std::io::Error),
    #[error("error reading input file: {0}")]
    ReadInput(#[source] std::io::Error),
    #[error("failed to replace original file: {0}")]
    Replace(#[source] std::io::Error),
}

impl ProcessError {
    pub fn stage(&self) -> Stage {
        match self {
            ProcessError::Backup(_) => Stage::BackingUp,
            ProcessError::OpenInput(_)
            | ProcessError::CreateTemp(_)
            | ProcessError::WriteTemp(_)
            | ProcessError::ReadInput(_) => Stage::Filtering,
            ProcessError::Replace(_) => Stage::Committing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProcessError;
    use crate::domain::models::Stage;
    use std::io;

    #[test]
    fn messages_name_the_failing_step() {
        let err = ProcessError::Backup(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.to_string(), "failed to create backup: gone");
        assert_eq!(err.stage(), Stage::BackingUp);

        let err = ProcessError::Replace(io::Error::new(io::ErrorKind::Other, "xdev"));
        assert_eq!(err.to_string(), "failed to replace original file: xdev");
        assert_eq!(err.stage(), Stage::Committing);
    }

    #[test]
    fn filter_errors_belong_to_filter_stage() {
        let err = ProcessError::WriteTemp(io::Error::new(io::ErrorKind::Other, "full"));
        assert_eq!(err.stage(), Stage::Filtering);
        assert!(err.to_string().starts_with("failed to write to temporary file"));
    }
}
