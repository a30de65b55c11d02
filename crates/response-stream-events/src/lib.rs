//! Typed decoding of Responses API streaming events.
//!
//! Each server-sent message is a JSON object with a string `type` plus
//! type-specific members. [`Classifier`] turns one such document into exactly
//! one [`ResponseStreamEvent`], a closed enum consumers can match on
//! exhaustively.
//!
//! ```
//! use response_stream_events::prelude::*;
//!
//! let event = classify_str(r#"{"type":"response.output_text.delta","item_id":"i1","delta":"Hi"}"#)?;
//! match event {
//!     ResponseStreamEvent::OutputText(OutputTextEvent::Delta(delta)) => assert_eq!(delta.delta, "Hi"),
//!     other => panic!("unexpected {other}"),
//! }
//! # Ok::<(), ClassifyError>(())
//! ```
//!
//! The byte-level SSE framing in [`sse`] is a convenience for callers that
//! hold a raw HTTP body; classification itself only ever sees one document.

/// Classifier configuration.
pub mod config;
/// Ordered probes, fallback mapping and the `Classifier` entry point.
pub mod decoder;
/// Lifecycle envelope, response snapshot and phase lookup.
pub mod envelope;
/// Error types for probes, classification and byte streams.
pub mod errors;
/// Event taxonomy.
pub mod event;
/// Wire `type` strings.
pub mod event_types;
/// Exhaustive fallback decoder over every wire event type.
pub mod fallback;
/// Logging setup for binaries.
pub mod observability;
/// Leaf event payloads.
pub mod payloads;
/// Common imports for typical usage.
pub mod prelude;
/// SSE framing adapter.
pub mod sse;

pub use config::{ClassifierConfig, FallbackLog};
pub use decoder::{Classifier, classify, classify_str};
pub use envelope::{LifecyclePhase, ResponseEnvelope, ResponseSnapshot, ResponseStatus};
pub use errors::{ClassifyError, ProbeMiss, StreamError};
pub use event::*;
pub use fallback::RawStreamEvent;
pub use observability::init_observability;
