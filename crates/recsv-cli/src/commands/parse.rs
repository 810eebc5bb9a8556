//! Parse command - extract data from a single OCR fragment file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use recsv_core::models::config::RecsvConfig;
use recsv_core::ocr::{TextFragment, sort_by_reading_order};
use recsv_core::receipt::{ParseResult, ReceiptParser};
use recsv_core::{ReceiptRecord, to_csv_string};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file: OCR fragment JSON or plain text (one line per fragment)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Sort fragments into reading order before parsing
    #[arg(long)]
    sort: bool,

    /// Print unresolved-field warnings to stderr
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = if let Some(path) = config_path {
        RecsvConfig::from_file(Path::new(path))?
    } else {
        RecsvConfig::default()
    };

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Parsing file: {}", args.input.display());

    let mut fragments = load_fragments(&args.input)?;
    if args.sort {
        sort_by_reading_order(&mut fragments);
    }

    let parser = ReceiptParser::with_config(&config);
    let result = parser.parse_fragments(&fragments);

    if args.show_warnings {
        for warning in &result.warnings {
            eprintln!("{} {}", style("!").yellow(), warning);
        }
    }

    let output = format_result(&result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Load fragments from a JSON array or a plain-text file.
pub fn load_fragments(path: &Path) -> anyhow::Result<Vec<TextFragment>> {
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        let fragments: Vec<TextFragment> = serde_json::from_str(&content)?;
        Ok(fragments)
    } else {
        Ok(content
            .lines()
            .map(|l| TextFragment::new(l, 1.0))
            .collect())
    }
}

pub fn format_result(result: &ParseResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result.record)?),
        OutputFormat::Csv => Ok(to_csv_string(&result.record)?),
        OutputFormat::Text => Ok(format_text(&result.record)),
    }
}

fn format_text(record: &ReceiptRecord) -> String {
    let mut output = String::new();
    let absent = "-".to_string();

    let meta = &record.meta;
    output.push_str(&format!(
        "Merchant: {}\n",
        meta.merchant.clone().unwrap_or_else(|| absent.clone())
    ));
    output.push_str(&format!(
        "Date:     {}\n",
        meta.date.map(|d| d.to_string()).unwrap_or_else(|| absent.clone())
    ));
    output.push_str(&format!(
        "Currency: {}\n",
        meta.currency.map(|c| c.code().to_string()).unwrap_or_else(|| absent.clone())
    ));
    output.push_str(&format!(
        "Total:    {}\n",
        meta.total.map(|t| t.to_string()).unwrap_or(absent)
    ));

    output.push('\n');
    if record.items.is_empty() {
        output.push_str("No line items.\n");
    } else {
        output.push_str("Items:\n");
        for item in &record.items {
            output.push_str(&format!(
                "  {} x{} @ {} = {}\n",
                item.item, item.qty, item.unit_price, item.line_total
            ));
        }
    }

    output
}
