//! zwav-probe - inspect WAVE files
//!
//! Reads a file into memory, parses it, and prints its format descriptor.
//!
//! # Usage
//!
//! ```bash
//! # Show human-readable output
//! zwav-probe tone.wav
//!
//! # Show JSON output with per-channel levels
//! zwav-probe --format json --stats tone.wav
//!
//! # Print the first 16 decoded samples
//! zwav-probe --samples 16 tone.wav
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;
use tracing::info;
use zwav_lib::probe::WaveReport;
use zwav_lib::{init, Config, ParseOptions, WavParser};

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output (default)
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "zwav-probe")]
#[command(about = "Probe WAVE files and decode their samples", long_about = None)]
#[command(version)]
struct Args {
    /// WAVE file to probe
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Compact JSON output (only with --format json)
    #[arg(short, long)]
    compact: bool,

    /// Decode the samples and report peak / RMS per channel
    #[arg(long)]
    stats: bool,

    /// Print the first N decoded samples (interleaved)
    #[arg(long, value_name = "N")]
    samples: Option<usize>,

    /// Skip the pad byte after odd-length chunks
    #[arg(long)]
    word_aligned: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn fail(message: String) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init(Config {
        verbose: args.verbose,
        debug: args.debug,
    }) {
        fail(format!("Failed to initialize: {}", e));
    }

    let path = args.file.display().to_string();

    let bytes = std::fs::read(&args.file)
        .unwrap_or_else(|e| fail(format!("Failed to read file '{}': {}", path, e)));
    info!("Read {} bytes from {}", bytes.len(), path);

    let parser = WavParser::with_options(ParseOptions {
        word_aligned_chunks: args.word_aligned,
    });
    let wave = parser
        .parse(&bytes)
        .unwrap_or_else(|e| fail(format!("Failed to parse file '{}': {}", path, e)));

    let mut report = WaveReport::new(path.clone(), bytes.len() as u64, &wave);
    if args.stats {
        report = report
            .with_channel_stats(&wave)
            .unwrap_or_else(|e| fail(format!("Failed to decode file '{}': {}", path, e)));
    }

    match args.format {
        OutputFormat::Text => {
            print!("{}", report);
        }
        OutputFormat::Json => {
            let json = if args.compact {
                report.to_json_compact()
            } else {
                report.to_json()
            };

            match json {
                Ok(j) => println!("{}", j),
                Err(e) => fail(format!("Failed to serialize JSON: {}", e)),
            }
        }
    }

    if let Some(count) = args.samples {
        let samples = wave
            .to_float_samples()
            .unwrap_or_else(|e| fail(format!("Failed to decode file '{}': {}", path, e)));

        for sample in samples.iter().take(count) {
            println!("{}", sample);
        }
    }
}
