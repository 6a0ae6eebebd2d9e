use styleguard_types::{FileResult, RepoPath, ScanStatus, SeverityCounts, Violation};

/// The complete output of one scan invocation.
///
/// Violations are ordered rule-major (rule id ascending), then by line and column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanResult {
    pub path: RepoPath,
    pub status: ScanStatus,
    pub violations: Vec<Violation>,
    pub counts: SeverityCounts,
    pub lines_scanned: u32,
    pub suppressed: u32,
}

impl ScanResult {
    pub fn is_pass(&self) -> bool {
        self.status == ScanStatus::Pass
    }

    pub fn into_file_result(self) -> FileResult {
        FileResult {
            path: self.path,
            status: self.status,
            lines_scanned: self.lines_scanned,
            suppressed: self.suppressed,
            violations: self.violations,
        }
    }
}
