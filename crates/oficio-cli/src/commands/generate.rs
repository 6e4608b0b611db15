//! Generate command - extract report data and write the carrier request letter.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{Days, Local, NaiveDate};
use clap::Args;
use console::style;
use tracing::debug;

use oficio_core::{LetterBuilder, LetterRequest, ReportParser, SearchDate};

use super::config::load_config;
use super::extract::{collect_inputs, extract_files, format_records, report_failures, FileOutcome, OutputFormat};

/// Arguments for the generate command.
#[derive(Args)]
pub struct GenerateArgs {
    /// Police report PDFs or glob patterns, processed in the given order
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Letter number (e.g. 023/2025)
    #[arg(short, long)]
    number: String,

    /// Search period start, DD/MM/AAAA (default: letter date minus the configured window)
    #[arg(long)]
    start: Option<String>,

    /// Search period end, DD/MM/AAAA (default: letter date)
    #[arg(long)]
    end: Option<String>,

    /// Letter date, DD/MM/AAAA (default: today)
    #[arg(long)]
    date: Option<String>,

    /// Output directory for the letter
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also write a CSV summary of every processed file
    #[arg(long)]
    summary: bool,
}

/// Validated operator input; built before any file is touched.
#[derive(Debug)]
struct LetterInputs {
    generated_on: NaiveDate,
    search_start: SearchDate,
    search_end: SearchDate,
}

pub fn run(args: GenerateArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let inputs = validate_inputs(&args, config.search.default_window_days)?;

    let files = collect_inputs(&args.inputs)?;
    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let outcomes = extract_files(&files, &ReportParser::new());
    report_failures(&outcomes);

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.output.output_dir.clone());
    fs::create_dir_all(&output_dir)?;

    if args.summary || config.output.write_summary {
        let summary_path = output_dir.join("registros.csv");
        write_summary(&summary_path, &outcomes)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let records: Vec<_> = outcomes.into_iter().filter_map(|o| o.record).collect();
    if records.is_empty() {
        println!(
            "{} Nenhum dado foi extraído dos arquivos.",
            style("⚠").yellow()
        );
        return Ok(());
    }

    println!(
        "{} {} registro(s) extraído(s)",
        style("✓").green(),
        records.len()
    );
    println!("{}", format_records(&records, OutputFormat::Text)?);

    let request = LetterRequest::new(
        args.number,
        inputs.search_start,
        inputs.search_end,
        records,
    );

    let bytes = LetterBuilder::new()
        .with_template(config.letter)
        .build(&request, inputs.generated_on)
        .map_err(|e| anyhow::anyhow!("Erro ao gerar documento Word: {}", e))?;

    let letter_path = output_dir.join(request.file_name());
    fs::write(&letter_path, bytes)?;

    println!(
        "{} Ofício written to {}",
        style("✓").green(),
        letter_path.display()
    );

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn validate_inputs(args: &GenerateArgs, window_days: u32) -> anyhow::Result<LetterInputs> {
    let generated_on = match &args.date {
        Some(value) => SearchDate::parse("date", value)?.date(),
        None => Local::now().date_naive(),
    };

    let search_start = match &args.start {
        Some(value) => SearchDate::parse("start", value)?,
        None => generated_on
            .checked_sub_days(Days::new(u64::from(window_days)))
            .map(SearchDate::from)
            .ok_or_else(|| anyhow::anyhow!("Search window of {} days is out of range", window_days))?,
    };

    let search_end = match &args.end {
        Some(value) => SearchDate::parse("end", value)?,
        None => SearchDate::from(generated_on),
    };

    debug!(
        "Letter dated {}, search period {} a {}",
        generated_on, search_start, search_end
    );

    Ok(LetterInputs {
        generated_on,
        search_start,
        search_end,
    })
}

fn write_summary(path: &Path, outcomes: &[FileOutcome]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "report_number",
        "imei_1",
        "imei_2",
        "incident_date_time",
        "processing_time_ms",
        "error",
    ])?;

    for outcome in outcomes {
        let filename = outcome
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let time = outcome.processing_time_ms.to_string();

        if let Some(record) = &outcome.record {
            wtr.write_record([
                filename,
                "success",
                record.report_number.as_str(),
                record.device_id_1.as_str(),
                record.device_id_2.as_str(),
                record.incident_date_time.as_str(),
                &time,
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                &time,
                outcome.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
