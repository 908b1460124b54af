use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Statistics for a completed read of one input file.
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    pub bytes_read: u64,
}

/// Reads a text file as an ordered sequence of lines.
///
/// Each returned line RETAINS its terminator (`\n` or `\r\n`), and a final
/// line without one comes back exactly as stored. Redaction columns are
/// character-exact, so the lines must round-trip byte-identically through
/// the writer.
pub fn read_lines<P: AsRef<Path>>(file_path: P) -> Result<(Vec<String>, ReadStats)> {
    let path = file_path.as_ref();
    debug!("Reading text from {}", path.display());

    let file = File::open(path)
        .with_context(|| format!("Failed to open input file {}", path.display()))?;
    let mut reader = BufReader::new(file);

    let mut lines = Vec::new();
    let mut bytes_read = 0u64;
    loop {
        let mut raw = Vec::new();
        let n = reader
            .read_until(b'\n', &mut raw)
            .with_context(|| format!("Failed to read from {}", path.display()))?;
        if n == 0 {
            break;
        }
        bytes_read += n as u64;
        let line = String::from_utf8(raw).map_err(|e| {
            anyhow::anyhow!(
                "Invalid UTF-8 in {} at line {}: {}",
                path.display(),
                lines.len() + 1,
                e
            )
        })?;
        lines.push(line);
    }

    let stats = ReadStats {
        file_path: path.display().to_string(),
        lines_read: lines.len() as u64,
        bytes_read,
    };
    info!(
        "Read {}: {} lines, {} bytes",
        stats.file_path, stats.lines_read, stats.bytes_read
    );
    Ok((lines, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_lines_keep_their_terminators() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("input.txt");
        fs::write(&file_path, "Line 1\nLine 2\nLine 3").unwrap();

        let (lines, stats) = read_lines(&file_path).unwrap();

        assert_eq!(lines, vec!["Line 1\n", "Line 2\n", "Line 3"]);
        assert_eq!(stats.lines_read, 3);
        assert_eq!(stats.bytes_read, 20);
    }

    #[test]
    fn test_crlf_terminators_are_preserved() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("crlf.txt");
        fs::write(&file_path, "first\r\nsecond\r\n").unwrap();

        let (lines, _) = read_lines(&file_path).unwrap();
        assert_eq!(lines, vec!["first\r\n", "second\r\n"]);
    }

    #[test]
    fn test_empty_file_yields_no_lines() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        fs::write(&file_path, "").unwrap();

        let (lines, stats) = read_lines(&file_path).unwrap();
        assert!(lines.is_empty());
        assert_eq!(stats.lines_read, 0);
        assert_eq!(stats.bytes_read, 0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_lines(temp_dir.path().join("nonexistent.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_utf8_reports_the_line() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("binary.txt");
        fs::write(&file_path, b"fine\n\xff\xfe\n").unwrap();

        let err = read_lines(&file_path).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    #[test]
    fn test_unicode_content_reads_intact() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("unicode.txt");
        fs::write(&file_path, "Hello, 世界!\nWith émojis 🦀\n").unwrap();

        let (lines, _) = read_lines(&file_path).unwrap();
        assert_eq!(lines, vec!["Hello, 世界!\n", "With émojis 🦀\n"]);
    }
}
