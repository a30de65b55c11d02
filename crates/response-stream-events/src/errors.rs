use serde_json::Value;

/// Why a single probe did not claim a document.
///
/// Misses are expected during classification and only ever drive
/// fall-through to the next probe; they are public so callers instrumenting
/// the decoder can tell the two kinds apart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeMiss {
    /// The document does not have the shape the probe decodes.
    #[error("{shape} shape mismatch: {message}")]
    Structural { shape: &'static str, message: String },
    /// The document has the lifecycle envelope shape but its `type` is not
    /// one of the lifecycle names.
    #[error("unrecognized lifecycle discriminator: {event_type}")]
    UnrecognizedDiscriminator { event_type: String },
}

impl ProbeMiss {
    pub(crate) fn structural(shape: &'static str, message: impl ToString) -> Self {
        Self::Structural {
            shape,
            message: message.to_string(),
        }
    }
}

/// Terminal failure to classify one document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifyError {
    /// No probe and no fallback leaf accepted the document.
    #[error("unknown stream event ({}): {message}", .event_type.as_deref().unwrap_or("<no type>"))]
    UnknownEvent {
        event_type: Option<String>,
        message: String,
        document: Value,
    },
    /// The fallback decoder accepted the document as a leaf this crate does
    /// not map. The taxonomy is out of sync with the wire schema.
    #[error("stream event {event_type} decoded by the fallback decoder has no taxonomy mapping")]
    UnmappedLeaf {
        event_type: &'static str,
        document: Value,
    },
    /// Text or byte input was not JSON.
    #[error("invalid JSON document: {message}")]
    InvalidJson { message: String },
}

impl ClassifyError {
    pub(crate) fn unknown(document: &Value, message: impl ToString) -> Self {
        Self::UnknownEvent {
            event_type: document
                .get("type")
                .and_then(|v| v.as_str())
                .map(ToOwned::to_owned),
            message: message.to_string(),
            document: document.clone(),
        }
    }

    /// Offending document, when one was parsed.
    pub fn document(&self) -> Option<&Value> {
        match self {
            Self::UnknownEvent { document, .. } | Self::UnmappedLeaf { document, .. } => {
                Some(document)
            }
            Self::InvalidJson { .. } => None,
        }
    }

    /// The `type` member of the offending document, if present.
    pub fn event_type(&self) -> Option<&str> {
        match self {
            Self::UnknownEvent { event_type, .. } => event_type.as_deref(),
            Self::UnmappedLeaf { event_type, .. } => Some(event_type),
            Self::InvalidJson { .. } => None,
        }
    }

    /// True when the error points at a mismatch between this crate and the
    /// fallback schema rather than at bad input.
    pub fn is_schema_drift(&self) -> bool {
        matches!(self, Self::UnmappedLeaf { .. })
    }
}

/// Errors produced while classifying a byte stream of SSE frames.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StreamError {
    /// The underlying byte source failed.
    #[error("transport error: {message}")]
    Transport { message: String },
    /// A frame carried a document that could not be classified.
    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

impl StreamError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}
