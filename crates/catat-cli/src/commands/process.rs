//! Process command - extract a draft from a single piece of text.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use catat_core::models::config::CatatConfig;
use catat_core::models::draft::{ReceiptDraft, TransactionDraft};
use catat_core::text::format_rupiah;
use catat_core::{ReceiptExtractor, ReceiptParser, TranscriptExtractor, TranscriptParser};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input text file (UTF-8 transcript or OCR dump)
    #[arg(required_unless_present = "text")]
    input: Option<PathBuf>,

    /// Inline text instead of a file
    #[arg(short, long, conflicts_with = "input")]
    text: Option<String>,

    /// Which extraction pipeline to run
    #[arg(short, long, value_enum, default_value = "voice")]
    source: Source,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum Source {
    /// Speech-to-text transcript
    Voice,
    /// OCR text from a receipt photo
    Receipt,
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

/// A draft from either pipeline.
pub enum Draft {
    Voice(TransactionDraft),
    Receipt(ReceiptDraft),
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let text = read_input(&args)?;

    info!("Processing {} characters of text", text.len());

    let draft = extract_draft(&text, args.source, &config)?;
    let output = format_draft(&draft, args.format)?;

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

/// Load configuration, falling back to defaults without a file.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<CatatConfig> {
    match config_path {
        Some(path) => Ok(CatatConfig::from_file(std::path::Path::new(path))?),
        None => Ok(CatatConfig::default()),
    }
}

/// Run the selected pipeline over `text`.
pub fn extract_draft(text: &str, source: Source, config: &CatatConfig) -> anyhow::Result<Draft> {
    match source {
        Source::Voice => TranscriptExtractor::from_config(&config.transcript)
            .parse(text)
            .map(Draft::Voice),
        Source::Receipt => ReceiptExtractor::from_config(&config.receipt)
            .parse(text)
            .map(Draft::Receipt),
    }
    .ok_or_else(|| anyhow::anyhow!("No text to extract from"))
}

fn read_input(args: &ProcessArgs) -> anyhow::Result<String> {
    match (&args.text, &args.input) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            Ok(fs::read_to_string(path)?)
        }
        (None, None) => anyhow::bail!("Provide an input file or --text"),
    }
}

/// Render a draft in the requested format.
pub fn format_draft(draft: &Draft, format: OutputFormat) -> anyhow::Result<String> {
    match (draft, format) {
        (Draft::Voice(d), OutputFormat::Json) => Ok(serde_json::to_string_pretty(d)?),
        (Draft::Receipt(d), OutputFormat::Json) => Ok(serde_json::to_string_pretty(d)?),
        (Draft::Voice(d), OutputFormat::Csv) => format_voice_csv(d),
        (Draft::Receipt(d), OutputFormat::Csv) => format_receipt_csv(d),
        (Draft::Voice(d), OutputFormat::Text) => Ok(format_voice_text(d)),
        (Draft::Receipt(d), OutputFormat::Text) => Ok(format_receipt_text(d)),
    }
}

fn format_voice_csv(draft: &TransactionDraft) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["kind", "amount", "description", "category", "notes"])?;
    wtr.write_record([
        draft.kind.label(),
        &draft.amount.to_string(),
        &draft.description,
        &draft.category,
        &draft.notes,
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_receipt_csv(draft: &ReceiptDraft) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["kind", "amount", "description", "category", "date"])?;
    wtr.write_record([
        draft.kind.label(),
        &draft.amount.to_string(),
        &draft.description,
        &draft.category,
        &draft.date.to_string(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_voice_text(draft: &TransactionDraft) -> String {
    let mut output = String::new();

    output.push_str(&format!("Jenis:     {}\n", draft.kind));
    output.push_str(&format!("Jumlah:    {}\n", format_rupiah(draft.amount)));
    output.push_str(&format!("Deskripsi: {}\n", draft.description));
    output.push_str(&format!("Kategori:  {}\n", draft.category));
    output.push_str(&format!("Catatan:   {}\n", draft.notes));

    output
}

fn format_receipt_text(draft: &ReceiptDraft) -> String {
    let mut output = String::new();

    output.push_str(&format!("Jenis:     {}\n", draft.kind));
    output.push_str(&format!("Jumlah:    {}\n", format_rupiah(draft.amount)));
    output.push_str(&format!("Deskripsi: {}\n", draft.description));
    output.push_str(&format!("Kategori:  {}\n", draft.category));
    output.push_str(&format!("Tanggal:   {}\n", draft.date));

    output
}
