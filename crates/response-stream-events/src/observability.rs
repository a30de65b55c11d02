//! Process-wide `tracing` setup for binaries that embed the classifier.
//!
//! The library only emits events; it never installs a subscriber on its own.
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

use crate::config::parse_bool_env;

static INIT: OnceCell<()> = OnceCell::new();

const ENABLED_VAR: &str = "RESPONSE_EVENTS_OBSERVABILITY";
const LEVEL_VAR: &str = "RESPONSE_EVENTS_LOG_LEVEL";
const JSON_PATH_VAR: &str = "RESPONSE_EVENTS_JSON_LOG_PATH";
const DEFAULT_LOG_FILE: &str = "response-events.logs.jsonl";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LogSink {
    /// Logging switched off.
    Disabled,
    /// Compact lines on stderr, keeping stdout for program output.
    Stderr,
    /// One JSON object per line, appended to `dir/file_name`.
    JsonFile { dir: PathBuf, file_name: String },
}

impl LogSink {
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let enabled = lookup(ENABLED_VAR)
            .and_then(|v| parse_bool_env(&v))
            .unwrap_or(true);
        if !enabled {
            return Self::Disabled;
        }
        match lookup(JSON_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            Some(raw) => {
                let path = PathBuf::from(raw);
                let dir = path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or_else(|| Path::new("."))
                    .to_path_buf();
                let file_name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or(DEFAULT_LOG_FILE)
                    .to_string();
                Self::JsonFile { dir, file_name }
            }
            None => Self::Stderr,
        }
    }
}

fn env_filter(level: Option<String>) -> EnvFilter {
    level
        .and_then(|l| EnvFilter::try_new(l).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Initialize logging once per process.
///
/// - `RESPONSE_EVENTS_OBSERVABILITY`: enable/disable flag (default enabled).
/// - `RESPONSE_EVENTS_LOG_LEVEL`: filter such as `debug` or
///   `response_stream_events=trace`; falls back to `RUST_LOG`, then `info`.
/// - `RESPONSE_EVENTS_JSON_LOG_PATH`: write JSONL to this file instead of
///   stderr.
pub fn init_observability() {
    INIT.get_or_init(|| {
        let lookup = |key: &str| std::env::var(key).ok();
        let filter = env_filter(lookup(LEVEL_VAR));
        match LogSink::from_lookup(lookup) {
            LogSink::Disabled => {}
            LogSink::Stderr => {
                let layer = tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr);
                let _ = tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .try_init();
            }
            LogSink::JsonFile { dir, file_name } => {
                let _ = std::fs::create_dir_all(&dir);
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(tracing_appender::rolling::never(dir, file_name));
                let _ = tracing_subscriber::registry()
                    .with(filter)
                    .with(layer)
                    .try_init();
            }
        }
    });
}
