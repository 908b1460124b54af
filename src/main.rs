use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use lexmask::pipeline::{self, RunConfig};

#[derive(Parser, Debug)]
#[command(name = "lexmask")]
#[command(about = "Redacts the lexicographically largest alphanumeric substrings in a text file")]
#[command(version)]
struct Args {
    /// Input text file to scan
    input_path: PathBuf,

    /// Destination for the redacted text
    #[arg(default_value = "./output.txt")]
    output_path: PathBuf,

    /// Length of the substrings to find, at least 1
    #[arg(short = 'l', long, default_value_t = 5)]
    substring_len: usize,

    /// Number of lexicographically largest substrings to select, at least 1
    #[arg(short = 'n', long, default_value_t = 4)]
    num_largest: usize,

    /// Write a JSON run summary to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).json().init();

    let args = Args::parse();

    info!("Starting lexmask");
    info!(?args, "Parsed CLI arguments");

    if !args.input_path.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input_path.display());
    }

    if !args.input_path.is_file() {
        anyhow::bail!("Input path is not a file: {}", args.input_path.display());
    }

    let config = RunConfig {
        input_path: args.input_path,
        output_path: args.output_path,
        substring_len: args.substring_len,
        num_largest: args.num_largest,
    };

    let summary = pipeline::run(&config)?;

    println!("Reading text from {}", summary.input_path);
    println!("The redacted text is output to {}", summary.output_path);
    println!("largest substrings:");
    for winner in &summary.winners {
        println!("  {winner}");
    }
    println!(
        "{} points in the x-y plane: {:?}",
        summary.points.len(),
        summary.points
    );
    println!("Area of the polygon: {}", summary.area);
    println!("Perimeter of the polygon: {}", summary.perimeter);

    if let Some(stats_path) = &args.stats_out {
        pipeline::write_summary(stats_path, &summary)?;
        println!("Run summary written to {}", stats_path.display());
    }

    info!("lexmask completed successfully");
    Ok(())
}
