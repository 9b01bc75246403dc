pub mod compile;
pub mod convert;
pub mod init;
pub mod make;

use std::path::PathBuf;

use crate::catalog::UpdateStats;

#[derive(Debug)]
pub enum CommandSummary {
    Make(MakeSummary),
    Compile(CompileSummary),
    Convert(Conversion),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct MakeSummary {
    pub files_scanned: usize,
    /// Files that went through marker extraction.
    pub template_files: usize,
    pub skipped_files: Vec<PathBuf>,
    pub message_count: usize,
    pub template_path: PathBuf,
    pub catalogs: Vec<(PathBuf, UpdateStats)>,
}

/// One `.mo` catalog written out as JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub catalog: PathBuf,
    pub output: PathBuf,
    pub message_count: usize,
}

#[derive(Debug)]
pub struct CompileSummary {
    pub conversions: Vec<Conversion>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running glotmark commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl From<CommandSummary> for CommandResult {
    fn from(summary: CommandSummary) -> Self {
        Self { summary }
    }
}
