//! Parse command - extract one order from a text block.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use songjang_core::{OrderParser, OrderTextParser};

use super::{load_config, read_input};
use crate::output::{format_record, FormatOptions, OutputFormat};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input text file, or `-` for stdin
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Separator line closing sheet blocks
    #[arg(long, default_value = "------------------------")]
    separator: String,

    /// Print extraction warnings to stderr
    #[arg(long)]
    show_warnings: bool,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let text = read_input(&args.input)?;

    info!("Parsing order from {}", args.input.display());

    let parser = OrderParser::from_config(&config.extraction);
    let result = parser.parse(&text);

    if args.show_warnings {
        for warning in &result.warnings {
            eprintln!("{} {}", style("⚠").yellow(), warning);
        }
    }

    let options = FormatOptions {
        render: &config.render,
        separator: &args.separator,
    };
    let output = format_record(&result.record, args.format, &options)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output.trim_end_matches('\n'));
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
