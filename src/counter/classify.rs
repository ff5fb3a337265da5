/// Outcome of classifying a single line.
///
/// `ends_in_block_comment` reflects the scanner state at the end of the line,
/// independent of whether code was found on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineResult {
    pub has_code: bool,
    pub ends_in_block_comment: bool,
}

/// Classify one line of source text.
///
/// `entering_block_comment` carries the block-comment state left by the
/// previous line. The scan is a single left-to-right pass with two
/// one-character lookback flags (`saw_slash`, `saw_star`); there is no
/// backtracking.
///
/// Known limitations, kept deliberately:
/// - String tracking only suppresses `/*` openings. A `//` or `*/` inside a
///   string literal is still honored as a comment marker.
/// - Escape sequences are not handled, so `\"` toggles the in-string flag.
/// - Block comments do not nest.
#[must_use]
pub fn classify(line: &str, entering_block_comment: bool) -> LineResult {
    let mut in_block = entering_block_comment;
    let mut in_string = false;
    let mut found_code = false;
    let mut saw_slash = false;
    let mut saw_star = false;

    for c in line.chars() {
        if in_block {
            // Inside a block comment nothing counts as code and strings are
            // not tracked; only a `*/` pair matters.
            if c == '/' && saw_star {
                in_block = false;
            }
            saw_star = c == '*';
            continue;
        }

        match c {
            '/' => {
                if saw_slash {
                    // `//` found: the rest of the line is discarded. A line
                    // comment never opens a block, so finalize immediately.
                    return LineResult {
                        has_code: found_code,
                        ends_in_block_comment: in_block,
                    };
                } else if saw_star {
                    // A stray `*/` with no open block resolves to "closed".
                    in_block = false;
                } else {
                    saw_slash = true;
                }
            }
            '*' => {
                if saw_slash && !in_string {
                    in_block = true;
                } else {
                    saw_star = true;
                }
            }
            '"' => in_string = !in_string,
            _ => {
                // Only an immediately adjacent `/` or `*` keeps a pending
                // two-character sequence alive; everything else, whitespace
                // included, breaks it.
                if u32::from(c) > 32 {
                    found_code = true;
                }
                saw_slash = false;
                saw_star = false;
            }
        }
    }

    LineResult {
        has_code: found_code,
        ends_in_block_comment: in_block,
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
