use crate::issues::DetectedCall;

/// Result of running the check command.
#[derive(Debug)]
pub struct CommandResult {
    /// Calls to report, grouped by file in path order, each file in document order.
    /// Valid calls are only present when requested with `--all`.
    pub calls: Vec<DetectedCall>,
    /// Number of reported calls that are violations.
    pub violation_count: usize,
    /// Number of source files analyzed.
    pub files_checked: usize,
    /// Number of files that could not be read.
    pub unreadable_count: usize,
    /// Number of directory entries that could not be accessed while scanning.
    pub skipped_count: usize,
}
