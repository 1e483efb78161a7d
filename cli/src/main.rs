//! docxform CLI - Word template to form schema tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use docxform::{validate, DocxForm, FieldStatistics, FieldType, JsonFormat};

#[derive(Parser)]
#[command(name = "docxform")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Turn Word (.docx) templates into form schema JSON", long_about = None)]
struct Cli {
    /// Input DOCX file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a template and print or save its schema JSON
    Parse {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Check whether files are acceptable Word template uploads
    Check {
        /// Files to check
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Show form field statistics
    Stats {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Print the schema together with its field statistics
    Preview {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Parse many templates in parallel, writing one JSON file each
    Batch {
        /// Input DOCX files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", env = "DOCXFORM_OUTPUT_DIR")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Parse {
            input,
            output,
            pretty,
        }) => cmd_parse(&input, output.as_deref(), pretty),
        Some(Commands::Check { inputs }) => cmd_check(&inputs),
        Some(Commands::Stats { input }) => cmd_stats(&input),
        Some(Commands::Preview { input, compact }) => cmd_preview(&input, compact),
        Some(Commands::Batch { inputs, output }) => cmd_batch(&inputs, output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: print the schema if input is provided
            if let Some(input) = cli.input {
                cmd_parse(&input, None, true)
            } else {
                println!("{}", "Usage: docxform <FILE>".yellow());
                println!("       docxform --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_parse(
    input: &Path,
    output: Option<&Path>,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = if pretty {
        JsonFormat::Pretty
    } else {
        JsonFormat::Compact
    };

    let json = DocxForm::new()
        .with_json_format(format)
        .parse(input)?
        .to_json()?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_check(inputs: &[PathBuf]) -> Result<(), Box<dyn std::error::Error>> {
    let mut rejected = 0;

    for input in inputs {
        let outcome = fs::read(input)
            .map_err(docxform::Error::from)
            .and_then(|data| validate(&data, Some(upload_name(input).as_str())));

        match outcome {
            Ok(()) => println!("{} {}", "OK".green().bold(), input.display()),
            Err(e) => {
                println!("{} {}: {}", "REJECTED".red().bold(), input.display(), e);
                rejected += 1;
            }
        }
    }

    if rejected > 0 {
        return Err(format!("{} of {} files rejected", rejected, inputs.len()).into());
    }

    Ok(())
}

fn cmd_stats(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let result = DocxForm::new().parse(input)?;
    let stats = result.statistics();

    println!("{}", "Form Field Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Sections".bold(), result.document().section_count());
    print_field_counts(&stats);

    Ok(())
}

fn print_field_counts(stats: &FieldStatistics) {
    println!("{}: {}", "Fields".bold(), stats.total_fields);

    for field_type in FieldType::ALL {
        let count = stats.count(field_type);
        if count > 0 {
            println!("  {} {}: {}", "├─".dimmed(), field_type, count);
        }
    }
}

fn cmd_preview(input: &Path, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let preview = docxform::preview(&data, &upload_name(input))?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    println!("{}", preview.to_json(format)?);

    Ok(())
}

fn cmd_batch(inputs: &[PathBuf], output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let outcomes: Vec<(&PathBuf, docxform::Result<FieldStatistics>)> = inputs
        .par_iter()
        .map(|input| {
            pb.set_message(upload_name(input));
            let outcome = convert_one(input, &output_dir);
            pb.inc(1);
            (input, outcome)
        })
        .collect();

    pb.finish_with_message("Done!");

    let mut written = Vec::new();
    let mut failures = Vec::new();
    for (input, outcome) in outcomes {
        match outcome {
            Ok(stats) => written.push(stats),
            Err(e) => failures.push((input, e.to_string())),
        }
    }

    println!(
        "\n{} {} schemas written to {}",
        "Done!".green().bold(),
        written.len(),
        output_dir.display()
    );
    print_field_counts(&total_statistics(&written));

    for (input, message) in &failures {
        eprintln!("  {} {}: {}", "└─".dimmed(), input.display(), message.red());
    }

    if !failures.is_empty() {
        return Err(format!("{} of {} files failed", failures.len(), inputs.len()).into());
    }

    Ok(())
}

/// Write one schema file and return its field statistics.
fn convert_one(input: &Path, output_dir: &Path) -> docxform::Result<FieldStatistics> {
    let result = DocxForm::new().pretty().parse(input)?;
    let path = output_path(input, output_dir);
    fs::write(&path, result.to_json()?)?;
    log::debug!("Wrote {}", path.display());
    Ok(result.statistics())
}

fn total_statistics(stats: &[FieldStatistics]) -> FieldStatistics {
    let mut total = FieldStatistics::new();
    for entry in stats {
        total.merge(entry);
    }
    total
}

/// `<dir>/<stem>.json` for an input file.
fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    output_dir.join(format!("{}.json", stem))
}

fn upload_name(input: &Path) -> String {
    input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn cmd_version() {
    println!("{} {}", "docxform".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Word template to form schema tool");
    println!();
    println!("License: MIT");
}
