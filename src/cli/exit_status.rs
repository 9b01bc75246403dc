use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Every file was processed
/// - `Error` (2): The build step failed (missing catalog, unwritable output, bad config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command failed; outputs of this run should not be trusted.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
