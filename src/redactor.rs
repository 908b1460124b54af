use crate::substring::Substring;
use thiserror::Error;
use tracing::debug;

/// Internal consistency failures: the substrings handed to the redactor no
/// longer describe the line sequence. These indicate a scanner/selector
/// defect, not bad user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RedactionError {
    #[error("substring {substring} references a line beyond the {line_count} available lines")]
    LineOutOfRange {
        substring: Substring,
        line_count: usize,
    },
    #[error("line {line_number} holds \"{actual}\" at columns {start_index}..={end_index}, expected \"{expected}\"")]
    TextMismatch {
        line_number: usize,
        start_index: usize,
        end_index: usize,
        expected: String,
        actual: String,
    },
}

/// Overwrites each substring's span with underscores, leaving every other
/// character untouched.
///
/// Each substring's text is verified against the current line content before
/// anything is rewritten; a mismatch aborts the whole operation. Inputs are
/// expected to be pairwise non-overlapping, which makes the result
/// independent of application order.
pub fn redact_substrings(
    lines: &mut [String],
    substrings: &[Substring],
) -> Result<(), RedactionError> {
    let line_count = lines.len();
    for substring in substrings {
        let line = lines.get_mut(substring.line_number).ok_or_else(|| {
            RedactionError::LineOutOfRange {
                substring: substring.clone(),
                line_count,
            }
        })?;
        redact_one(line, substring)?;
        debug!("Redacted {}", substring);
    }
    Ok(())
}

fn redact_one(line: &mut String, substring: &Substring) -> Result<(), RedactionError> {
    let chars: Vec<char> = line.chars().collect();
    let start = substring.start_index;
    let end = substring.end_index();

    let actual: String = chars
        .get(start..=end)
        .map(|window| window.iter().collect())
        .unwrap_or_default();
    if actual != substring.text {
        return Err(RedactionError::TextMismatch {
            line_number: substring.line_number,
            start_index: start,
            end_index: end,
            expected: substring.text.clone(),
            actual,
        });
    }

    *line = chars
        .iter()
        .enumerate()
        .map(|(i, &c)| if (start..=end).contains(&i) { '_' } else { c })
        .collect();
    Ok(())
}
