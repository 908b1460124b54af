use crate::substring::Substring;
use tracing::debug;

/// Finds every window of exactly `substring_len` consecutive alphanumeric
/// characters across all lines.
///
/// Candidates are emitted in scan order (line ascending, then start column
/// ascending) and may overlap each other; resolving overlaps is the
/// selector's job. Lines shorter than `substring_len` contribute nothing,
/// as does a `substring_len` of zero.
pub fn find_alphanumeric_substrings(lines: &[String], substring_len: usize) -> Vec<Substring> {
    let mut substrings = Vec::new();
    if substring_len == 0 {
        return substrings;
    }

    for (line_number, line) in lines.iter().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() < substring_len {
            continue;
        }
        for (start_index, window) in chars.windows(substring_len).enumerate() {
            if window.iter().all(|c| c.is_alphanumeric()) {
                substrings.push(Substring {
                    text: window.iter().collect(),
                    line_number,
                    start_index,
                });
            }
        }
    }

    debug!(
        "Scanned {} lines, found {} candidate substrings of length {}",
        lines.len(),
        substrings.len(),
        substring_len
    );
    substrings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_finds_both_words_in_hello_world() {
        let found = find_alphanumeric_substrings(&lines(&["Hello, World!\n"]), 5);
        assert_eq!(
            found,
            vec![
                Substring::new("Hello", 0, 0),
                Substring::new("World", 0, 7),
            ]
        );
    }

    #[test]
    fn test_emits_overlapping_windows() {
        let found = find_alphanumeric_substrings(&lines(&["abcdef"]), 5);
        assert_eq!(
            found,
            vec![
                Substring::new("abcde", 0, 0),
                Substring::new("bcdef", 0, 1),
            ]
        );
    }

    #[test]
    fn test_windows_never_contain_non_alphanumeric_characters() {
        let found = find_alphanumeric_substrings(&lines(&["ab-cd ef_gh 12.34\n"]), 2);
        for s in &found {
            assert!(
                s.text.chars().all(char::is_alphanumeric),
                "window {s} contains a non-alphanumeric character"
            );
            assert_eq!(s.len(), 2);
        }
        assert_eq!(found.len(), 6); // ab, cd, ef, gh, 12, 34
    }

    #[test]
    fn test_digits_count_as_alphanumeric() {
        let found = find_alphanumeric_substrings(&lines(&["a1b2c"]), 5);
        assert_eq!(found, vec![Substring::new("a1b2c", 0, 0)]);
    }

    #[test]
    fn test_short_lines_contribute_nothing() {
        let found = find_alphanumeric_substrings(&lines(&["abcd", "abcde", ""]), 5);
        assert_eq!(found, vec![Substring::new("abcde", 1, 0)]);
    }

    #[test]
    fn test_empty_input_yields_no_candidates() {
        assert!(find_alphanumeric_substrings(&[], 5).is_empty());
    }

    #[test]
    fn test_zero_length_yields_no_candidates() {
        assert!(find_alphanumeric_substrings(&lines(&["abcde"]), 0).is_empty());
    }

    #[test]
    fn test_scan_order_is_line_then_column() {
        let found = find_alphanumeric_substrings(&lines(&["zz aa\n", "mm nn\n"]), 2);
        let locations: Vec<_> = found.iter().map(Substring::location).collect();
        assert_eq!(locations, vec![(0, 0), (0, 3), (1, 0), (1, 3)]);
    }

    #[test]
    fn test_multibyte_letters_use_character_offsets() {
        let found = find_alphanumeric_substrings(&lines(&["¡héllo!"]), 5);
        assert_eq!(found, vec![Substring::new("héllo", 0, 1)]);
    }
}
