use std::io::BufRead;

use super::classify;

/// Count the lines of code in an in-memory source text.
///
/// A pure fold over the lines: the block-comment flag starts false, is
/// threaded through [`classify`] line by line, and is discarded at the end.
/// Nothing persists across calls, so independent scans never interfere.
#[must_use]
pub fn count_source(source: &str) -> usize {
    let mut count = 0;
    let mut in_block_comment = false;

    for line in source.lines() {
        let result = classify(line, in_block_comment);
        if result.has_code {
            count += 1;
        }
        in_block_comment = result.ends_in_block_comment;
    }

    count
}

/// Count lines of code from a buffered reader (streaming, memory-efficient
/// for large files).
///
/// # Errors
/// Returns an I/O error if reading from the reader fails. A failed read
/// aborts this scan only; no state leaks into other scans.
pub fn count_reader<R: BufRead>(reader: R) -> std::io::Result<usize> {
    let mut count = 0;
    let mut in_block_comment = false;

    for line_result in reader.lines() {
        let line = line_result?;
        let result = classify(&line, in_block_comment);
        if result.has_code {
            count += 1;
        }
        in_block_comment = result.ends_in_block_comment;
    }

    Ok(count)
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
