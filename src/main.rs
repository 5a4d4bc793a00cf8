//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::cli::Args;
use chatlens::config::{AnalyticsConfig, ParserConfig, stop_words_from_str};
use chatlens::filter::DateRange;
use chatlens::format::{OutputFormat, to_format_string};
use chatlens::logging::init_logging;
use chatlens::output::to_text;
use chatlens::query::Insights;
use chatlens::{ChatlensError, TranscriptParser};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    init_logging(args.log_level.as_deref())?;

    // Progress goes to stderr so a report on stdout stays machine-readable
    eprintln!("🔎 chatlens v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    eprintln!("📂 Input:   {}", args.input.display());
    match &args.output {
        Some(path) => eprintln!("💾 Output:  {}", path.display()),
        None => eprintln!("💾 Output:  stdout"),
    }
    eprintln!("📄 Format:  {}", args.format);
    eprintln!("👤 Filter:  {}", args.user);

    let mut range = DateRange::new();
    if let Some(ref after) = args.after {
        range = range.with_date_from(after)?;
        eprintln!("📅 After:   {}", after);
    }
    if let Some(ref before) = args.before {
        range = range.with_date_to(before)?;
        eprintln!("📅 Before:  {}", before);
    }
    eprintln!();

    // Step 1: Parse
    let mut parser_config = ParserConfig::new();
    if let Some(ref placeholder) = args.media_placeholder {
        parser_config = parser_config.with_media_placeholder(placeholder.clone());
    }
    let parse_start = Instant::now();
    let parsed = TranscriptParser::with_config(parser_config).parse_file(&args.input)?;
    let diagnostics = parsed.diagnostics();
    eprintln!(
        "   Found {} records ({:.2}s)",
        parsed.len(),
        parse_start.elapsed().as_secs_f64()
    );
    if diagnostics.unparsable > 0 {
        eprintln!("⚠️  {} line(s) could not be parsed", diagnostics.unparsable);
    }

    // Step 2: Narrow to the date range
    let collection = if range.is_active() {
        let narrowed = parsed.within(&range);
        eprintln!("🔍 {} records in date range", narrowed.len());
        narrowed
    } else {
        parsed
    };

    if args.list_users {
        for option in collection.participant_options() {
            println!("{}", option);
        }
        return Ok(());
    }

    // Step 3: Analyze
    let mut analytics_config = AnalyticsConfig::new();
    if let Some(ref path) = args.stop_words {
        let content = fs::read_to_string(path)?;
        let words = stop_words_from_str(&content);
        eprintln!("🚫 Loaded {} stop words from {}", words.len(), path.display());
        analytics_config = analytics_config.with_stop_words(words);
    }

    let analyze_start = Instant::now();
    let insights = Insights::with_config(&collection, analytics_config);
    let report = insights.report(&args.filter())?;
    eprintln!(
        "📊 Analyzed {} messages ({:.2}s)",
        report.stats.messages,
        analyze_start.elapsed().as_secs_f64()
    );

    // Step 4: Render
    let format: OutputFormat = args.format.into();
    let rendered = match format {
        OutputFormat::Text => to_text(&report, args.top),
        other => to_format_string(&report, other)?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            eprintln!("💾 Report written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    if let Some(ref path) = args.records {
        write_records(&collection, path)?;
        eprintln!("💾 Records written to {}", path.display());
    }

    eprintln!();
    eprintln!(
        "✅ Done! ({:.2}s total)",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

#[cfg(feature = "csv-output")]
fn write_records(
    collection: &chatlens::RecordCollection,
    path: &std::path::Path,
) -> Result<(), ChatlensError> {
    chatlens::output::write_csv(collection, path)
}

#[cfg(not(feature = "csv-output"))]
fn write_records(
    _collection: &chatlens::RecordCollection,
    _path: &std::path::Path,
) -> Result<(), ChatlensError> {
    Err(ChatlensError::invalid_format(
        "records",
        "CSV export requires the 'csv-output' feature to be enabled",
    ))
}
