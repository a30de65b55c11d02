use std::collections::BTreeMap;
use std::io::Write;

use response_stream_events::sse::EventStreamDecoder;
use response_stream_events::{Classifier, ClassifyError, ResponseStreamEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// `event:`/`data:` frames separated by blank lines.
    Sse,
    /// One JSON document per line.
    Jsonl,
}

#[derive(Clone, Debug)]
pub struct InspectOptions {
    pub format: InputFormat,
    pub summary: bool,
    pub fail_fast: bool,
}

/// Totals for one inspected input.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub classified: usize,
    pub failed: usize,
    pub counts: BTreeMap<&'static str, usize>,
}

impl Report {
    fn record(
        &mut self,
        result: Result<ResponseStreamEvent, ClassifyError>,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> std::io::Result<()> {
        match result {
            Ok(event) => {
                self.classified += 1;
                *self.counts.entry(event.event_type()).or_default() += 1;
                writeln!(out, "{event}")
            }
            Err(e) => {
                self.failed += 1;
                let kind = if e.is_schema_drift() {
                    "schema drift"
                } else {
                    "unclassified"
                };
                writeln!(err, "{kind}: {e}")
            }
        }
    }
}

fn classify_all(
    classifier: &Classifier,
    input: &[u8],
    format: InputFormat,
) -> Vec<Result<ResponseStreamEvent, ClassifyError>> {
    match format {
        InputFormat::Sse => {
            let mut decoder = EventStreamDecoder::new(classifier.clone());
            let mut results = decoder.push_chunk(input);
            results.extend(decoder.finish());
            results
        }
        InputFormat::Jsonl => input
            .split(|b| *b == b'\n')
            .map(|line| line.trim_ascii())
            .filter(|line| !line.is_empty())
            .map(|line| classifier.classify_slice(line))
            .collect(),
    }
}

/// Classifies `input` and writes one line per event to `out`, failures to
/// `err`, and the optional summary to `out`.
pub fn inspect(
    classifier: &Classifier,
    input: &[u8],
    options: &InspectOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<Report> {
    let mut report = Report::default();
    for result in classify_all(classifier, input, options.format) {
        let failed = result.is_err();
        report.record(result, out, err)?;
        if failed && options.fail_fast {
            break;
        }
    }

    if options.summary {
        writeln!(out, "--")?;
        for (event_type, count) in &report.counts {
            writeln!(out, "{count:>6}  {event_type}")?;
        }
        writeln!(
            out,
            "{:>6}  classified, {} failed",
            report.classified, report.failed
        )?;
    }
    Ok(report)
}
