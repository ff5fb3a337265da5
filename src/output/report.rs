use std::path::PathBuf;

/// Per-file outcome of a count run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub code_lines: usize,
}

/// Aggregate of all per-file counts from one run.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub files: Vec<FileReport>,
    pub total_files: usize,
    pub total_code_lines: usize,
    /// Paths that could not be read. They are excluded from the totals.
    pub unreadable: Vec<PathBuf>,
}

impl ScanReport {
    #[must_use]
    pub fn new(files: Vec<FileReport>, unreadable: Vec<PathBuf>) -> Self {
        let total_files = files.len();
        let total_code_lines = files.iter().map(|f| f.code_lines).sum();

        Self {
            files,
            total_files,
            total_code_lines,
            unreadable,
        }
    }

    #[must_use]
    pub fn has_read_errors(&self) -> bool {
        !self.unreadable.is_empty()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
