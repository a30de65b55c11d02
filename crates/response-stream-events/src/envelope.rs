use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::event_types;

/// Response-level phase announced by a lifecycle event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecyclePhase {
    Created,
    InProgress,
    Completed,
    Failed,
    Incomplete,
    Queued,
}

impl LifecyclePhase {
    /// Every phase, in the order the server normally emits them.
    pub const ALL: [LifecyclePhase; 6] = [
        LifecyclePhase::Queued,
        LifecyclePhase::Created,
        LifecyclePhase::InProgress,
        LifecyclePhase::Completed,
        LifecyclePhase::Failed,
        LifecyclePhase::Incomplete,
    ];

    /// Looks up the phase for a wire discriminator.
    ///
    /// Returns `None` for anything that is not one of the six lifecycle
    /// names, including other `response.*` event types.
    pub fn from_event_type(event_type: &str) -> Option<Self> {
        match event_type {
            event_types::RESPONSE_CREATED => Some(Self::Created),
            event_types::RESPONSE_IN_PROGRESS => Some(Self::InProgress),
            event_types::RESPONSE_COMPLETED => Some(Self::Completed),
            event_types::RESPONSE_FAILED => Some(Self::Failed),
            event_types::RESPONSE_INCOMPLETE => Some(Self::Incomplete),
            event_types::RESPONSE_QUEUED => Some(Self::Queued),
            _ => None,
        }
    }

    /// Returns the wire discriminator for this phase.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => event_types::RESPONSE_CREATED,
            Self::InProgress => event_types::RESPONSE_IN_PROGRESS,
            Self::Completed => event_types::RESPONSE_COMPLETED,
            Self::Failed => event_types::RESPONSE_FAILED,
            Self::Incomplete => event_types::RESPONSE_INCOMPLETE,
            Self::Queued => event_types::RESPONSE_QUEUED,
        }
    }
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status reported inside a response snapshot.
///
/// Unknown values are kept verbatim in `Other` so a new server status does
/// not make the whole envelope fail to parse.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ResponseStatus {
    Completed,
    Failed,
    InProgress,
    Cancelled,
    Queued,
    Incomplete,
    Other(String),
}

impl From<String> for ResponseStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            "in_progress" => Self::InProgress,
            "cancelled" => Self::Cancelled,
            "queued" => Self::Queued,
            "incomplete" => Self::Incomplete,
            _ => Self::Other(value),
        }
    }
}

impl ResponseStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::InProgress => "in_progress",
            Self::Cancelled => "cancelled",
            Self::Queued => "queued",
            Self::Incomplete => "incomplete",
            Self::Other(value) => value,
        }
    }
}

/// Snapshot of the response object carried by lifecycle events.
///
/// Well-known members are typed; everything else is preserved in `extra`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseSnapshot {
    pub id: String,
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub status: Option<ResponseStatus>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub output: Vec<Value>,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub incomplete_details: Option<Value>,
    #[serde(default)]
    pub usage: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResponseSnapshot {
    /// Returns the concatenated text of every `output_text` part in the
    /// snapshot's message items.
    pub fn output_text(&self) -> Option<String> {
        let mut parts = Vec::new();
        for item in &self.output {
            if item.get("type").and_then(|v| v.as_str()) != Some("message") {
                continue;
            }
            if let Some(content) = item.get("content").and_then(|v| v.as_array()) {
                for c in content {
                    if let Some(text) = c.get("text").and_then(|v| v.as_str()) {
                        parts.push(text);
                    }
                }
            }
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.concat())
        }
    }

    /// Returns the `error.message` member when the response failed.
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .and_then(|e| e.get("message"))
            .and_then(|v| v.as_str())
    }
}

/// Common payload of the six lifecycle events.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseEnvelope {
    /// Raw discriminator as received.
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub sequence_number: Option<u64>,
    pub response: ResponseSnapshot,
}

impl ResponseEnvelope {
    /// Id of the enclosed response.
    pub fn id(&self) -> &str {
        &self.response.id
    }

    /// Phase named by the discriminator, if it is a lifecycle name.
    pub fn phase(&self) -> Option<LifecyclePhase> {
        LifecyclePhase::from_event_type(&self.event_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_lookup_round_trips_every_name() {
        for phase in LifecyclePhase::ALL {
            assert_eq!(LifecyclePhase::from_event_type(phase.as_str()), Some(phase));
        }
        assert_eq!(LifecyclePhase::from_event_type("response.output_text.delta"), None);
        assert_eq!(LifecyclePhase::from_event_type("response.cancelled"), None);
    }

    #[test]
    fn snapshot_keeps_unknown_members() {
        let value = serde_json::json!({
            "id": "resp_1",
            "status": "completed",
            "temperature": 0.2,
            "metadata": {"k": "v"}
        });
        let snapshot = ResponseSnapshot::deserialize(&value).expect("snapshot");
        assert_eq!(snapshot.status, Some(ResponseStatus::Completed));
        assert_eq!(snapshot.extra.get("temperature"), Some(&serde_json::json!(0.2)));
        assert_eq!(snapshot.extra.get("metadata"), Some(&serde_json::json!({"k": "v"})));
    }

    #[test]
    fn unknown_status_is_preserved() {
        let value = serde_json::json!({"id": "r", "status": "paused"});
        let snapshot = ResponseSnapshot::deserialize(&value).expect("snapshot");
        assert_eq!(snapshot.status, Some(ResponseStatus::Other("paused".into())));
        assert_eq!(snapshot.status.as_ref().map(ResponseStatus::as_str), Some("paused"));
    }

    #[test]
    fn output_text_joins_message_parts() {
        let value = serde_json::json!({
            "id": "r",
            "output": [
                {"type": "reasoning", "summary": []},
                {"type": "message", "content": [{"type": "output_text", "text": "Hi "}, {"type": "output_text", "text": "there"}]}
            ]
        });
        let snapshot = ResponseSnapshot::deserialize(&value).expect("snapshot");
        assert_eq!(snapshot.output_text().as_deref(), Some("Hi there"));
    }

    #[test]
    fn error_message_reads_nested_error_object() {
        let failed = serde_json::json!({
            "id": "r",
            "status": "failed",
            "error": {"code": "server_error", "message": "upstream timeout"}
        });
        let snapshot = ResponseSnapshot::deserialize(&failed).expect("snapshot");
        assert_eq!(snapshot.error_message(), Some("upstream timeout"));

        let ok = serde_json::json!({"id": "r", "status": "completed", "error": null});
        let snapshot = ResponseSnapshot::deserialize(&ok).expect("snapshot");
        assert_eq!(snapshot.error_message(), None);
    }

    #[test]
    fn envelope_requires_response_id() {
        let missing = serde_json::json!({"type": "response.created", "response": {"status": "queued"}});
        assert!(ResponseEnvelope::deserialize(&missing).is_err());

        let ok = serde_json::json!({"type": "response.created", "sequence_number": 0, "response": {"id": "r1"}});
        let envelope = ResponseEnvelope::deserialize(&ok).expect("envelope");
        assert_eq!(envelope.id(), "r1");
        assert_eq!(envelope.phase(), Some(LifecyclePhase::Created));
        assert_eq!(envelope.sequence_number, Some(0));
    }
}
