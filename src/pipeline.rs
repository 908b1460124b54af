use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::substring::Substring;
use crate::{geometry, reader, redactor, scanner, selector, writer};

/// Parameters for one redaction run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Length of the substrings to search for, at least 1.
    pub substring_len: usize,
    /// Number of lexicographically largest substrings to select, at least 1.
    pub num_largest: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the length of a substring should be at least 1")]
    SubstringLenTooSmall,
    #[error("the number of largest substrings should be at least 1")]
    NumLargestTooSmall,
}

impl RunConfig {
    /// Rejects unusable parameters before any I/O happens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.substring_len < 1 {
            return Err(ConfigError::SubstringLenTooSmall);
        }
        if self.num_largest < 1 {
            return Err(ConfigError::NumLargestTooSmall);
        }
        Ok(())
    }
}

/// Everything one run produced, for console reporting and the optional JSON
/// summary file.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub input_path: String,
    pub output_path: String,
    pub substring_len: usize,
    pub num_largest: usize,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub candidates_found: usize,
    pub winners: Vec<Substring>,
    pub points: Vec<(usize, usize)>,
    pub area: f64,
    pub perimeter: f64,
}

/// Runs the whole pipeline: read, scan, select, redact, write, measure.
///
/// Configuration is validated before the input file is touched, and nothing
/// is written unless selection succeeded. The winners' (line, column)
/// locations form the vertices of the measured polygon, in acceptance order.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    config.validate()?;

    let (mut lines, read_stats) = reader::read_lines(&config.input_path)?;

    let candidates = scanner::find_alphanumeric_substrings(&lines, config.substring_len);
    info!(
        "Found {} candidates of length {} in {}",
        candidates.len(),
        config.substring_len,
        read_stats.file_path
    );
    let candidates_found = candidates.len();

    let winners = selector::find_largest_substrings(candidates, config.num_largest)?;
    info!("Selected {} winners", winners.len());

    redactor::redact_substrings(&mut lines, &winners)?;
    writer::write_lines(&config.output_path, &lines)?;

    let points: Vec<(usize, usize)> = winners.iter().map(Substring::location).collect();
    let vertices: Vec<(f64, f64)> = points.iter().map(|&(x, y)| (x as f64, y as f64)).collect();
    let area = geometry::compute_area(&vertices);
    let perimeter = geometry::compute_perimeter(&vertices);

    Ok(RunSummary {
        input_path: read_stats.file_path,
        output_path: config.output_path.display().to_string(),
        substring_len: config.substring_len,
        num_largest: config.num_largest,
        lines_read: read_stats.lines_read,
        bytes_read: read_stats.bytes_read,
        candidates_found,
        winners,
        points,
        area,
        perimeter,
    })
}

/// Writes the run summary as pretty-printed JSON, overwriting any existing
/// file.
pub fn write_summary<P: AsRef<Path>>(path: P, summary: &RunSummary) -> Result<()> {
    let path = path.as_ref();
    let content = serde_json::to_string_pretty(summary)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write run summary to {}", path.display()))?;
    info!("Wrote run summary to {}", path.display());
    Ok(())
}
