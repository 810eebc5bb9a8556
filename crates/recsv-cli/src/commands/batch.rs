//! Batch processing command for multiple fragment files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use recsv_core::models::config::RecsvConfig;
use recsv_core::receipt::ReceiptParser;

use super::parse::{OutputFormat, format_result, load_fragments};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long, default_value = "out")]
    output_dir: PathBuf,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = if let Some(path) = config_path {
        RecsvConfig::from_file(std::path::Path::new(path))?
    } else {
        RecsvConfig::default()
    };

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "json" | "txt")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    fs::create_dir_all(&args.output_dir)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let parser = ReceiptParser::with_config(&config);
    let mut processed = 0usize;
    let mut failed = 0usize;

    for path in files {
        match process_single_file(&path, &parser, &args) {
            Ok(()) => processed += 1,
            Err(e) => {
                failed += 1;
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), e);
                } else {
                    error!("Failed to process {}: {}", path.display(), e);
                    anyhow::bail!("Processing failed: {}", e);
                }
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        processed,
        start.elapsed()
    );
    if failed > 0 {
        println!("{} {} files failed", style("✗").red(), failed);
    }

    Ok(())
}

fn process_single_file(
    path: &PathBuf,
    parser: &ReceiptParser,
    args: &BatchArgs,
) -> anyhow::Result<()> {
    let fragments = load_fragments(path)?;
    let result = parser.parse_fragments(&fragments);

    let extension = match args.format {
        OutputFormat::Json => "json",
        OutputFormat::Csv => "csv",
        OutputFormat::Text => "txt",
    };

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("receipt");
    let output_path = args.output_dir.join(format!("{}.{}", stem, extension));

    let content = format_result(&result, args.format)?;
    fs::write(&output_path, content)?;
    debug!("Wrote output to {}", output_path.display());

    Ok(())
}
