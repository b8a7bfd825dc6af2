//! eegscan CLI
//!
//! Usage:
//!   eegscan session.txt                     # Summary of a hex dump
//!   cat session.txt | eegscan               # Read from stdin
//!   eegscan session.txt --verbose           # Summary + record preview + scan counters
//!   eegscan session.txt --oneline           # Summary as one parseable line
//!   eegscan session.txt --json              # Full report as JSON
//!   eegscan session.txt --output out.json   # Save the JSON report

use clap::Parser;
use colored::Colorize;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use eegscan::core::{PacketScanner, ReportBuilder, save_report};
use eegscan::types::{ReportConfig, ReportError, ScanReport};
use eegscan::{DEFAULT_SAMPLE_RATE_HZ, VERSION};

/// Exit status when the input held no decodable packet
const EXIT_NO_DATA: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "eegscan",
    version = VERSION,
    about = "Decode attention, meditation and signal quality from EEG headset hex dumps",
    long_about = "eegscan scans a text dump of a single-channel EEG headset's serial\n\
                  stream for AA AA sync markers and decodes the attention (0x04),\n\
                  meditation (0x05) and signal quality (0x02) values that follow.\n\n\
                  Input lines look like:\n  \
                  AA AA 20 02 50 83 18 ...\n\n\
                  Only uppercase hex pairs are read; lines with fewer than\n\
                  10 pairs are skipped."
)]
struct Args {
    /// Text dump to scan (stdin when absent or "-")
    input: Option<PathBuf>,

    /// Output the full report as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show a record preview and scan counters
    #[arg(short, long)]
    verbose: bool,

    /// Records to show in the verbose preview
    #[arg(long, default_value_t = 10)]
    preview: usize,

    /// Print the summary as one parseable line
    #[arg(long)]
    oneline: bool,

    /// Assumed record rate for the timeline (Hz, must be > 0)
    #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE_HZ, value_parser = parse_sample_rate)]
    sample_rate: f64,

    /// Save the JSON report to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Logging verbosity level (written to stderr)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    init_logging(&args.log_level);
    if args.no_color {
        colored::control::set_override(false);
    }

    let (source, text) = match read_input(args.input.as_deref()) {
        Ok(input) => input,
        Err(e) => fail(&e),
    };
    info!(source = %source, bytes = text.len(), "input loaded");

    let scanner = PacketScanner::new();
    let outcome = scanner.scan(&text);

    let config = ReportConfig::default().with_sample_rate(args.sample_rate);
    let report = ReportBuilder::with_config(config).build(&source, &outcome);

    if let Some(ref path) = args.output {
        match save_report(&report, path) {
            Ok(saved) => eprintln!("{} {}", "Report saved:".cyan(), saved.display()),
            Err(e) => fail(&e),
        }
    }

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(&ReportError::from(e)),
        }
    } else {
        print_report(&report, &args);
    }

    if report.is_empty() {
        std::process::exit(EXIT_NO_DATA);
    }
}

/// Accept only finite rates above zero
fn parse_sample_rate(value: &str) -> Result<f64, String> {
    let hz: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if hz.is_finite() && hz > 0.0 {
        Ok(hz)
    } else {
        Err(format!("sample rate must be a positive number of Hz, got {}", value))
    }
}

/// Install the stderr log subscriber
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Logging setup failed: {}", e);
    }
}

/// Read the whole input; invalid UTF-8 is replaced, not rejected
fn read_input(path: Option<&Path>) -> Result<(String, String), ReportError> {
    match path {
        Some(path) if path != Path::new("-") => {
            let bytes = std::fs::read(path).map_err(|e| ReportError::io(path, e))?;
            Ok((path.display().to_string(), String::from_utf8_lossy(&bytes).into_owned()))
        }
        _ => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .map_err(|e| ReportError::io("stdin", e))?;
            Ok(("stdin".to_string(), String::from_utf8_lossy(&bytes).into_owned()))
        }
    }
}

/// Print an error and exit
fn fail(error: &ReportError) -> ! {
    eprintln!("{} {}", "error:".red().bold(), error);
    std::process::exit(1);
}

/// Print the human-readable report
fn print_report(report: &ScanReport, args: &Args) {
    let Some(summary) = &report.summary else {
        println!("{}", "Could not decode any data. Check the file format.".red());
        println!(
            "{}",
            "Expected EEG packets as uppercase hex pairs, e.g. 'AA AA 20 02 50 83 18 ...'".dimmed()
        );
        if args.verbose {
            print_stats(report);
        }
        return;
    };

    if args.oneline {
        println!("{}", summary.to_parseable_string());
    } else {
        println!("{}", summary.to_terminal_string());
    }

    if args.verbose {
        print_preview(report, args.preview);
        print_stats(report);
    }
}

/// Print the first records with their timeline offsets
fn print_preview(report: &ScanReport, count: usize) {
    println!();
    println!("{}", format!("First {} records:", count.min(report.timeline.len())).bold());
    for point in report.timeline.iter().take(count) {
        let line = format!("  t={:>7.1}s  {}", point.time_secs, point.record.to_parseable_string());
        if point.record.has_poor_signal() {
            println!("{}", line.yellow());
        } else {
            println!("{}", line);
        }
    }
}

/// Print scan counters
fn print_stats(report: &ScanReport) {
    let stats = &report.stats;
    println!();
    println!("{}", "Scan:".bold());
    println!("  source:     {}", report.source);
    println!("  lines:      {} ({} too short)", stats.lines_total, stats.lines_short);
    println!("  tokens:     {}", stats.tokens_total);
    println!(
        "  candidates: {} ({} rejected)",
        stats.sync_candidates, stats.candidates_rejected
    );
    println!("  records:    {}", stats.records);
    println!("  reason:     {}", report.reason);
}
