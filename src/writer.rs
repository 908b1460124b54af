use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Statistics for a completed write of the output file.
#[derive(Debug, Clone)]
pub struct WriteStats {
    pub file_path: String,
    pub lines_written: u64,
    pub bytes_written: u64,
}

/// Writes the line sequence to `file_path`, overwriting any existing
/// content. Lines are written verbatim with no added terminators, the exact
/// mirror of the reader.
pub fn write_lines<P: AsRef<Path>>(file_path: P, lines: &[String]) -> Result<WriteStats> {
    let path = file_path.as_ref();
    debug!("Writing {} lines to {}", lines.len(), path.display());

    let mut file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;

    let mut bytes_written = 0u64;
    for line in lines {
        file.write_all(line.as_bytes())
            .with_context(|| format!("Failed to write to {}", path.display()))?;
        bytes_written += line.len() as u64;
    }

    let stats = WriteStats {
        file_path: path.display().to_string(),
        lines_written: lines.len() as u64,
        bytes_written,
    };
    info!(
        "Wrote {}: {} lines, {} bytes",
        stats.file_path, stats.lines_written, stats.bytes_written
    );
    Ok(stats)
}
