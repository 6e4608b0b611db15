//! Extract command - pull report fields out of police report PDFs.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use oficio_core::{ExtractedRecord, ReportExtractor, ReportParser};

use super::config::load_config;

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input PDF files or glob patterns, processed in the given order
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text table
    Text,
}

/// Result of processing a single file.
pub struct FileOutcome {
    pub path: PathBuf,
    pub record: Option<ExtractedRecord>,
    pub error: Option<String>,
    pub processing_time_ms: u64,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Only validates the file; extraction itself has no settings
    load_config(config_path)?;

    let files = collect_inputs(&args.inputs)?;
    let outcomes = extract_files(&files, &ReportParser::new());
    report_failures(&outcomes);

    let records: Vec<ExtractedRecord> = outcomes.into_iter().filter_map(|o| o.record).collect();
    let output = format_records(&records, args.format)?;

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

/// Expand paths and glob patterns into PDF files, keeping argument order.
///
/// A file listed twice is extracted twice, one record per listing.
pub fn collect_inputs(patterns: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let matched: Vec<PathBuf> = glob(pattern)?
            .filter_map(|r| r.ok())
            .filter(|p| is_pdf(p))
            .collect();

        if matched.is_empty() {
            warn!("No PDF files match {}", pattern);
        }

        for path in matched {
            if files.contains(&path) {
                info!("{} listed more than once", path.display());
            }
            files.push(path);
        }
    }

    if files.is_empty() {
        anyhow::bail!("No matching PDF files found for: {}", patterns.join(", "));
    }

    info!("Found {} PDF file(s)", files.len());
    Ok(files)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Extract every file in order; a failing file is recorded and skipped.
pub fn extract_files<E: ReportExtractor>(files: &[PathBuf], extractor: &E) -> Vec<FileOutcome> {
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
    );

    let mut outcomes = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let file_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        pb.set_message(file_name.clone());

        let result = fs::read(path)
            .map_err(anyhow::Error::from)
            .and_then(|data| Ok(extractor.extract(&file_name, &data)?));

        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok(record) => outcomes.push(FileOutcome {
                path: path.clone(),
                record: Some(record),
                error: None,
                processing_time_ms,
            }),
            Err(e) => {
                warn!("Failed to process {}: {}", path.display(), e);
                outcomes.push(FileOutcome {
                    path: path.clone(),
                    record: None,
                    error: Some(e.to_string()),
                    processing_time_ms,
                });
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();
    outcomes
}

/// Print one line per file that produced no record.
pub fn report_failures(outcomes: &[FileOutcome]) {
    for outcome in outcomes.iter().filter(|o| o.error.is_some()) {
        eprintln!(
            "{} Erro ao extrair dados do PDF {}: {}",
            style("✗").red(),
            outcome.path.display(),
            outcome.error.as_deref().unwrap_or("unknown error")
        );
    }
}

pub fn format_records(records: &[ExtractedRecord], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Csv => format_csv(records),
        OutputFormat::Text => Ok(format_text(records)),
    }
}

const COLUMNS: [&str; 5] = ["Nº BO", "IMEI 1", "IMEI 2", "Data/Hora do Fato", "Arquivo"];

fn record_fields(record: &ExtractedRecord) -> [&str; 5] {
    [
        record.report_number.as_str(),
        record.device_id_1.as_str(),
        record.device_id_2.as_str(),
        record.incident_date_time.as_str(),
        record.source_file_name.as_str(),
    ]
}

fn format_csv(records: &[ExtractedRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(COLUMNS)?;
    for record in records {
        wtr.write_record(record_fields(record))?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(records: &[ExtractedRecord]) -> String {
    let rows: Vec<[&str; 5]> = records.iter().map(record_fields).collect();

    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = padded_line(&COLUMNS, &widths);
    for row in &rows {
        output.push('\n');
        output.push_str(&padded_line(row, &widths));
    }
    output
}

fn padded_line(cells: &[&str; 5], widths: &[usize; 5]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
