//! Classify a captured Responses API stream and print one line per event.

mod inspect;

use std::io::Read as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use response_stream_events::{Classifier, ClassifierConfig, init_observability};

use crate::inspect::{InputFormat, InspectOptions, inspect};

#[derive(Parser, Debug)]
#[command(
    name = "response-stream-inspect",
    about = "Classify every event of a captured Responses API stream"
)]
struct Args {
    /// Input framing: raw SSE transcript or one JSON document per line.
    #[arg(long, value_enum, default_value_t = InputFormat::Sse)]
    format: InputFormat,
    /// Print per-type counts after the events.
    #[arg(long)]
    summary: bool,
    /// Stop at the first document that cannot be classified.
    #[arg(long)]
    fail_fast: bool,
    /// Input file; reads stdin when omitted.
    file: Option<PathBuf>,
}

fn read_input(file: Option<&PathBuf>) -> std::io::Result<Vec<u8>> {
    match file {
        Some(path) => std::fs::read(path),
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    init_observability();
    let args = Args::parse();

    let input = match read_input(args.file.as_ref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("failed to read input: {e}");
            return ExitCode::from(2);
        }
    };

    let classifier = Classifier::new(ClassifierConfig::from_env());
    tracing::debug!(config = ?classifier.config(), format = ?args.format, "inspecting stream");
    let options = InspectOptions {
        format: args.format,
        summary: args.summary,
        fail_fast: args.fail_fast,
    };

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    match inspect(&classifier, &input, &options, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(report) if report.failed == 0 => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("failed to write output: {e}");
            ExitCode::from(2)
        }
    }
}
