use serde::Serialize;

use crate::error::Result;

use super::{ReportFormatter, ScanReport};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    files: Vec<FileEntry>,
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    total_code_lines: usize,
    unreadable_files: usize,
}

#[derive(Serialize)]
struct FileEntry {
    path: String,
    code_lines: usize,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                total_files: report.total_files,
                total_code_lines: report.total_code_lines,
                unreadable_files: report.unreadable.len(),
            },
            files: report
                .files
                .iter()
                .map(|f| FileEntry {
                    path: f.path.display().to_string(),
                    code_lines: f.code_lines,
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
