//! Batch command - parse many orders from one or more text files.

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use songjang_core::{BlockMode, ExtractionResult, OrderParser, OrderTextParser};

use super::{load_config, read_input};
use crate::output::{format_records, FormatOptions, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files as a glob pattern, or `-` for stdin
    #[arg(required = true)]
    input: String,

    /// How orders are separated inside a file: line or paragraph
    #[arg(short, long, default_value_t = BlockMode::Line, value_parser = BlockMode::from_str)]
    mode: BlockMode,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Separator line between sheet blocks
    #[arg(long, default_value = "------------------------")]
    separator: String,

    /// Continue when a file cannot be read
    #[arg(long)]
    continue_on_error: bool,

    /// Print extraction warnings to stderr, per order
    #[arg(long)]
    show_warnings: bool,
}

/// Orders parsed from a single input.
struct FileResult {
    path: PathBuf,
    orders: Vec<ExtractionResult>,
    error: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let parser = OrderParser::from_config(&config.extraction);
    let mode = args.mode;

    let files: Vec<PathBuf> = if args.input == "-" {
        vec![PathBuf::from("-")]
    } else {
        glob(&args.input)?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect()
    };

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    debug!("Found {} input files", files.len());

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        match read_input(&path) {
            Ok(text) => {
                let orders = parser.parse_blocks(&text, mode);
                debug!("Parsed {} orders from {}", orders.len(), path.display());
                results.push(FileResult {
                    path,
                    orders,
                    error: None,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to read {}: {}", path.display(), error_msg);
                    results.push(FileResult {
                        path,
                        orders: Vec::new(),
                        error: Some(error_msg),
                    });
                } else {
                    error!("Failed to read {}: {}", path.display(), error_msg);
                    pb.abandon();
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    if args.show_warnings {
        for result in &results {
            for (index, order) in result.orders.iter().enumerate() {
                for warning in &order.warnings {
                    eprintln!(
                        "{} {} #{}: {}",
                        style("⚠").yellow(),
                        result.path.display(),
                        index + 1,
                        warning
                    );
                }
            }
        }
    }

    let records: Vec<_> = results
        .iter()
        .flat_map(|r| r.orders.iter().map(|o| o.record.clone()))
        .collect();

    let options = FormatOptions {
        render: &config.render,
        separator: &args.separator,
    };
    let output = format_records(&records, args.format, &options)?;

    if let Some(output_path) = &args.output {
        let output_path = if output_path.is_dir() {
            output_path.join(format!("orders.{}", args.format.extension()))
        } else {
            output_path.clone()
        };
        fs::write(&output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output.trim_end_matches('\n'));
    }

    let needs_review = records.iter().filter(|r| !r.is_complete()).count();
    let warning_count: usize = results
        .iter()
        .flat_map(|r| &r.orders)
        .map(|o| o.warnings.len())
        .sum();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    eprintln!(
        "{} Parsed {} orders from {} files in {:?}",
        style("✓").green(),
        records.len(),
        results.len(),
        start.elapsed()
    );
    eprintln!(
        "   {} complete, {} need review, {} warnings",
        style(records.len() - needs_review).green(),
        style(needs_review).yellow(),
        style(warning_count).yellow()
    );

    if !failed.is_empty() {
        eprintln!();
        eprintln!("{}", style("Failed files:").red());
        for result in &failed {
            eprintln!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}
