use std::io::Write;

use crate::error::Result;

use super::{ReportFormatter, ScanReport};

pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let mut output = Vec::new();

        for file in &report.files {
            writeln!(
                output,
                "{}: {} lines of code",
                file.path.display(),
                file.code_lines
            )
            .ok();
        }

        if !report.files.is_empty() {
            writeln!(output).ok();
        }

        writeln!(output, "Summary:").ok();
        writeln!(output, "  Files: {}", report.total_files).ok();
        writeln!(output, "  Lines of code: {}", report.total_code_lines).ok();

        if report.has_read_errors() {
            writeln!(output, "  Unreadable files: {}", report.unreadable.len()).ok();
        }

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
