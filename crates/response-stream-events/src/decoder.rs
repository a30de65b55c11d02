//! Classifying decoder: one JSON document in, one [`ResponseStreamEvent`] out.
//!
//! Classification runs an ordered table of probes and returns the first
//! success:
//!
//! 1. lifecycle envelope (`response.created`, `response.completed`, ...)
//! 2. output item added
//! 3. output item done
//! 4. MCP call arguments delta/done (configurable)
//!
//! When no probe claims the document it is handed to the exhaustive
//! [`RawStreamEvent`] decoder and mapped into the taxonomy. The order is
//! part of the contract: moving a probe changes how ambiguous documents are
//! classified.
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::config::{ClassifierConfig, FallbackLog};
use crate::envelope::ResponseEnvelope;
use crate::errors::{ClassifyError, ProbeMiss};
use crate::event::*;
use crate::event_types;
use crate::fallback::RawStreamEvent;
use crate::payloads::{
    ResponseMcpCallArgumentsDeltaEvent, ResponseMcpCallArgumentsDoneEvent,
    ResponseOutputItemAddedEvent, ResponseOutputItemDoneEvent,
};

type ProbeFn = fn(&Value) -> Result<ResponseStreamEvent, ProbeMiss>;

struct Probe {
    name: &'static str,
    decode: ProbeFn,
    enabled: fn(&ClassifierConfig) -> bool,
}

const LIFECYCLE_PROBE: &str = "lifecycle envelope";
const OUTPUT_ITEM_ADDED_PROBE: &str = "output item added";
const OUTPUT_ITEM_DONE_PROBE: &str = "output item done";
const MCP_CALL_ARGUMENTS_PROBE: &str = "mcp call arguments";

fn always(_: &ClassifierConfig) -> bool {
    true
}

fn mcp_probe_enabled(config: &ClassifierConfig) -> bool {
    config.mcp_arguments_probe
}

static PROBES: [Probe; 4] = [
    Probe {
        name: LIFECYCLE_PROBE,
        decode: probe_lifecycle,
        enabled: always,
    },
    Probe {
        name: OUTPUT_ITEM_ADDED_PROBE,
        decode: probe_output_item_added,
        enabled: always,
    },
    Probe {
        name: OUTPUT_ITEM_DONE_PROBE,
        decode: probe_output_item_done,
        enabled: always,
    },
    Probe {
        name: MCP_CALL_ARGUMENTS_PROBE,
        decode: probe_mcp_call_arguments,
        enabled: mcp_probe_enabled,
    },
];

/// Stateless classifier for Responses API streaming documents.
///
/// Cheap to clone and safe to share across threads; each call only reads
/// its input.
#[derive(Clone, Debug, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Classifier configured from the process environment.
    pub fn from_env() -> Self {
        Self::new(ClassifierConfig::from_env())
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classifies one parsed JSON document.
    ///
    /// Only JSON objects are stream events; arrays and scalars are rejected
    /// before any probe runs.
    pub fn classify(&self, document: &Value) -> Result<ResponseStreamEvent, ClassifyError> {
        if !document.is_object() {
            return Err(ClassifyError::unknown(
                document,
                format!("expected a JSON object, found {}", json_kind(document)),
            ));
        }

        for probe in PROBES.iter().filter(|p| (p.enabled)(&self.config)) {
            match (probe.decode)(document) {
                Ok(event) => return Ok(event),
                Err(ProbeMiss::UnrecognizedDiscriminator { event_type }) => {
                    trace!(
                        probe = probe.name,
                        %event_type,
                        "probe matched shape but not discriminator"
                    );
                }
                Err(miss) => {
                    trace!(probe = probe.name, reason = %miss, "probe did not match");
                }
            }
        }

        self.log_fallback_entry(document);
        let result = RawStreamEvent::deserialize(document)
            .map_err(|e| ClassifyError::unknown(document, e))
            .and_then(|raw| map_fallback(raw, document));
        if let Err(err) = &result {
            debug!(
                event_type = err.event_type().unwrap_or("<none>"),
                schema_drift = err.is_schema_drift(),
                error = %err,
                "failed to classify stream event"
            );
        }
        result
    }

    /// Parses `text` as JSON and classifies it.
    pub fn classify_str(&self, text: &str) -> Result<ResponseStreamEvent, ClassifyError> {
        let document: Value =
            serde_json::from_str(text).map_err(|e| ClassifyError::InvalidJson {
                message: e.to_string(),
            })?;
        self.classify(&document)
    }

    /// Parses `bytes` as JSON and classifies it.
    pub fn classify_slice(&self, bytes: &[u8]) -> Result<ResponseStreamEvent, ClassifyError> {
        let document: Value =
            serde_json::from_slice(bytes).map_err(|e| ClassifyError::InvalidJson {
                message: e.to_string(),
            })?;
        self.classify(&document)
    }

    fn log_fallback_entry(&self, document: &Value) {
        let event_type = document
            .get("type")
            .and_then(|v| v.as_str())
            .unwrap_or("<none>");
        match self.config.fallback_log {
            FallbackLog::Off => {}
            FallbackLog::Debug => debug!(event_type, "classifying via fallback decoder"),
            FallbackLog::Warn => warn!(event_type, "classifying via fallback decoder"),
        }
    }
}

/// Classifies `document` with the default configuration.
pub fn classify(document: &Value) -> Result<ResponseStreamEvent, ClassifyError> {
    Classifier::default().classify(document)
}

/// Parses and classifies `text` with the default configuration.
pub fn classify_str(text: &str) -> Result<ResponseStreamEvent, ClassifyError> {
    Classifier::default().classify_str(text)
}

impl<'de> Deserialize<'de> for ResponseStreamEvent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = Value::deserialize(deserializer)?;
        classify(&document).map_err(serde::de::Error::custom)
    }
}

fn probe_lifecycle(document: &Value) -> Result<ResponseStreamEvent, ProbeMiss> {
    let envelope = ResponseEnvelope::deserialize(document)
        .map_err(|e| ProbeMiss::structural(LIFECYCLE_PROBE, e))?;
    match envelope.phase() {
        Some(phase) => Ok(ResponseStreamEvent::lifecycle(phase, envelope)),
        None => Err(ProbeMiss::UnrecognizedDiscriminator {
            event_type: envelope.event_type,
        }),
    }
}

fn probe_output_item_added(document: &Value) -> Result<ResponseStreamEvent, ProbeMiss> {
    let event: ResponseOutputItemAddedEvent =
        decode_tagged(document, event_types::OUTPUT_ITEM_ADDED, OUTPUT_ITEM_ADDED_PROBE)?;
    Ok(ResponseStreamEvent::OutputItem(OutputItemEvent::Added(event)))
}

fn probe_output_item_done(document: &Value) -> Result<ResponseStreamEvent, ProbeMiss> {
    let event: ResponseOutputItemDoneEvent =
        decode_tagged(document, event_types::OUTPUT_ITEM_DONE, OUTPUT_ITEM_DONE_PROBE)?;
    Ok(ResponseStreamEvent::OutputItem(OutputItemEvent::Done(event)))
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum McpCallArgumentsWire {
    #[serde(rename = "response.mcp_call_arguments.delta")]
    Delta(ResponseMcpCallArgumentsDeltaEvent),
    #[serde(rename = "response.mcp_call_arguments.done")]
    Done(ResponseMcpCallArgumentsDoneEvent),
}

fn probe_mcp_call_arguments(document: &Value) -> Result<ResponseStreamEvent, ProbeMiss> {
    let wire = McpCallArgumentsWire::deserialize(document)
        .map_err(|e| ProbeMiss::structural(MCP_CALL_ARGUMENTS_PROBE, e))?;
    let event = match wire {
        McpCallArgumentsWire::Delta(e) => McpCallArgumentsEvent::Delta(e),
        McpCallArgumentsWire::Done(e) => McpCallArgumentsEvent::Done(e),
    };
    Ok(ResponseStreamEvent::McpCallArguments(event))
}

/// Decodes `T` only when the document's `type` is exactly `event_type`.
fn decode_tagged<T: DeserializeOwned>(
    document: &Value,
    event_type: &str,
    shape: &'static str,
) -> Result<T, ProbeMiss> {
    match document.get("type").and_then(|v| v.as_str()) {
        Some(found) if found == event_type => {}
        Some(found) => {
            return Err(ProbeMiss::structural(shape, format!("type is `{found}`")));
        }
        None => return Err(ProbeMiss::structural(shape, "missing string member `type`")),
    }
    T::deserialize(document).map_err(|e| ProbeMiss::structural(shape, e))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A probe-owned `type` reaching the fallback means its probe rejected the
/// shape. That is bad input, reported with the probe's own reason.
fn rejected_by_probe(
    probe: ProbeFn,
    document: &Value,
) -> Result<ResponseStreamEvent, ClassifyError> {
    probe(document).map_err(|miss| ClassifyError::unknown(document, miss))
}

/// Total mapping from fallback leaves into the taxonomy.
///
/// No wildcard arm: a new `RawStreamEvent` variant must be mapped here
/// before the crate compiles.
fn map_fallback(
    raw: RawStreamEvent,
    document: &Value,
) -> Result<ResponseStreamEvent, ClassifyError> {
    use ResponseStreamEvent as E;

    let event = match raw {
        RawStreamEvent::ResponseCreated(_)
        | RawStreamEvent::ResponseInProgress(_)
        | RawStreamEvent::ResponseCompleted(_)
        | RawStreamEvent::ResponseFailed(_)
        | RawStreamEvent::ResponseIncomplete(_)
        | RawStreamEvent::ResponseQueued(_) => {
            return rejected_by_probe(probe_lifecycle, document);
        }
        RawStreamEvent::OutputItemAdded(_) => {
            return rejected_by_probe(probe_output_item_added, document);
        }
        RawStreamEvent::OutputItemDone(_) => {
            return rejected_by_probe(probe_output_item_done, document);
        }

        RawStreamEvent::McpCallArgumentsDelta(v) => {
            E::McpCallArguments(McpCallArgumentsEvent::Delta(v))
        }
        RawStreamEvent::McpCallArgumentsDone(v) => {
            E::McpCallArguments(McpCallArgumentsEvent::Done(v))
        }

        RawStreamEvent::AudioDelta(v) => E::Audio(AudioEvent::Delta(v)),
        RawStreamEvent::AudioDone(v) => E::Audio(AudioEvent::Done(v)),
        RawStreamEvent::AudioTranscriptDelta(v) => {
            E::AudioTranscript(AudioTranscriptEvent::Delta(v))
        }
        RawStreamEvent::AudioTranscriptDone(v) => E::AudioTranscript(AudioTranscriptEvent::Done(v)),
        RawStreamEvent::CodeInterpreterCallCodeDelta(v) => E::CodeInterpreterCall(
            CodeInterpreterCallEvent::Code(CodeInterpreterCodeEvent::Delta(v)),
        ),
        RawStreamEvent::CodeInterpreterCallCodeDone(v) => E::CodeInterpreterCall(
            CodeInterpreterCallEvent::Code(CodeInterpreterCodeEvent::Done(v)),
        ),
        RawStreamEvent::CodeInterpreterCallCompleted(v) => {
            E::CodeInterpreterCall(CodeInterpreterCallEvent::Completed(v))
        }
        RawStreamEvent::CodeInterpreterCallInProgress(v) => {
            E::CodeInterpreterCall(CodeInterpreterCallEvent::InProgress(v))
        }
        RawStreamEvent::CodeInterpreterCallInterpreting(v) => {
            E::CodeInterpreterCall(CodeInterpreterCallEvent::Interpreting(v))
        }
        RawStreamEvent::ContentPartAdded(v) => E::ContentPart(ContentPartEvent::Added(v)),
        RawStreamEvent::ContentPartDone(v) => E::ContentPart(ContentPartEvent::Done(v)),
        RawStreamEvent::Error(v) => E::Error(v),
        RawStreamEvent::FileSearchCallCompleted(v) => {
            E::FileSearchCall(FileSearchCallEvent::Completed(v))
        }
        RawStreamEvent::FileSearchCallInProgress(v) => {
            E::FileSearchCall(FileSearchCallEvent::InProgress(v))
        }
        RawStreamEvent::FileSearchCallSearching(v) => {
            E::FileSearchCall(FileSearchCallEvent::Searching(v))
        }
        RawStreamEvent::FunctionCallArgumentsDelta(v) => {
            E::FunctionCallArguments(FunctionCallArgumentsEvent::Delta(v))
        }
        RawStreamEvent::FunctionCallArgumentsDone(v) => {
            E::FunctionCallArguments(FunctionCallArgumentsEvent::Done(v))
        }
        RawStreamEvent::ReasoningSummaryPartAdded(v) => {
            E::ReasoningSummaryPart(ReasoningSummaryPartEvent::Added(v))
        }
        RawStreamEvent::ReasoningSummaryPartDone(v) => {
            E::ReasoningSummaryPart(ReasoningSummaryPartEvent::Done(v))
        }
        RawStreamEvent::ReasoningSummaryTextDelta(v) => {
            E::ReasoningSummaryText(ReasoningSummaryTextEvent::Delta(v))
        }
        RawStreamEvent::ReasoningSummaryTextDone(v) => {
            E::ReasoningSummaryText(ReasoningSummaryTextEvent::Done(v))
        }
        RawStreamEvent::ReasoningSummaryDelta(v) => {
            E::ReasoningSummary(ReasoningSummaryEvent::Delta(v))
        }
        RawStreamEvent::ReasoningSummaryDone(v) => {
            E::ReasoningSummary(ReasoningSummaryEvent::Done(v))
        }
        RawStreamEvent::ReasoningTextDelta(v) => E::Reasoning(ReasoningEvent::Delta(v)),
        RawStreamEvent::ReasoningTextDone(v) => E::Reasoning(ReasoningEvent::Done(v)),
        RawStreamEvent::RefusalDelta(v) => E::Refusal(RefusalEvent::Delta(v)),
        RawStreamEvent::RefusalDone(v) => E::Refusal(RefusalEvent::Done(v)),
        RawStreamEvent::TextDelta(v) => E::OutputText(OutputTextEvent::Delta(v)),
        RawStreamEvent::TextDone(v) => E::OutputText(OutputTextEvent::Done(v)),
        RawStreamEvent::OutputTextAnnotationAdded(v) => {
            E::OutputTextAnnotation(OutputTextAnnotationEvent::Added(v))
        }
        RawStreamEvent::WebSearchCallCompleted(v) => {
            E::WebSearchCall(WebSearchCallEvent::Completed(v))
        }
        RawStreamEvent::WebSearchCallInProgress(v) => {
            E::WebSearchCall(WebSearchCallEvent::InProgress(v))
        }
        RawStreamEvent::WebSearchCallSearching(v) => {
            E::WebSearchCall(WebSearchCallEvent::Searching(v))
        }
        RawStreamEvent::ImageGenCallCompleted(v) => {
            E::ImageGenerationCall(ImageGenerationCallEvent::Completed(v))
        }
        RawStreamEvent::ImageGenCallGenerating(v) => {
            E::ImageGenerationCall(ImageGenerationCallEvent::Generating(v))
        }
        RawStreamEvent::ImageGenCallInProgress(v) => {
            E::ImageGenerationCall(ImageGenerationCallEvent::InProgress(v))
        }
        RawStreamEvent::ImageGenCallPartialImage(v) => {
            E::ImageGenerationCall(ImageGenerationCallEvent::PartialImage(v))
        }
        RawStreamEvent::McpCallCompleted(v) => E::McpCall(McpCallEvent::Completed(v)),
        RawStreamEvent::McpCallFailed(v) => E::McpCall(McpCallEvent::Failed(v)),
        RawStreamEvent::McpCallInProgress(v) => E::McpCall(McpCallEvent::InProgress(v)),
        RawStreamEvent::McpListToolsCompleted(v) => {
            E::McpListTools(McpListToolsEvent::Completed(v))
        }
        RawStreamEvent::McpListToolsFailed(v) => E::McpListTools(McpListToolsEvent::Failed(v)),
        RawStreamEvent::McpListToolsInProgress(v) => {
            E::McpListTools(McpListToolsEvent::InProgress(v))
        }
        RawStreamEvent::CustomToolCallInputDelta(v) => {
            E::CustomToolCall(CustomToolCallEvent::Delta(v))
        }
        RawStreamEvent::CustomToolCallInputDone(v) => {
            E::CustomToolCall(CustomToolCallEvent::Done(v))
        }
    };
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::{LifecyclePhase, ResponseSnapshot, ResponseStatus};
    use crate::payloads::ResponseTextDeltaEvent;
    use serde_json::json;

    /// Minimal valid document for every leaf the fallback decoder owns.
    fn fallback_leaf_documents() -> Vec<Value> {
        use event_types as t;
        vec![
            json!({"type": t::AUDIO_DELTA, "delta": "AAAA"}),
            json!({"type": t::AUDIO_DONE}),
            json!({"type": t::AUDIO_TRANSCRIPT_DELTA, "delta": "hel"}),
            json!({"type": t::AUDIO_TRANSCRIPT_DONE}),
            json!({"type": t::CODE_INTERPRETER_CALL_CODE_DELTA, "item_id": "ci_1", "delta": "print("}),
            json!({"type": t::CODE_INTERPRETER_CALL_CODE_DONE, "item_id": "ci_1", "code": "print(1)"}),
            json!({"type": t::CODE_INTERPRETER_CALL_COMPLETED, "item_id": "ci_1"}),
            json!({"type": t::CODE_INTERPRETER_CALL_IN_PROGRESS, "item_id": "ci_1"}),
            json!({"type": t::CODE_INTERPRETER_CALL_INTERPRETING, "item_id": "ci_1"}),
            json!({"type": t::CONTENT_PART_ADDED, "item_id": "msg_1", "part": {"type": "output_text", "text": ""}}),
            json!({"type": t::CONTENT_PART_DONE, "item_id": "msg_1", "part": {"type": "output_text", "text": "Hi"}}),
            json!({"type": t::ERROR, "code": "server_error", "message": "boom"}),
            json!({"type": t::FILE_SEARCH_CALL_IN_PROGRESS, "item_id": "fs_1"}),
            json!({"type": t::FILE_SEARCH_CALL_SEARCHING, "item_id": "fs_1"}),
            json!({"type": t::FILE_SEARCH_CALL_COMPLETED, "item_id": "fs_1"}),
            json!({"type": t::FUNCTION_CALL_ARGUMENTS_DELTA, "item_id": "fc_1", "delta": "{\"a\""}),
            json!({"type": t::FUNCTION_CALL_ARGUMENTS_DONE, "item_id": "fc_1", "arguments": "{\"a\":1}"}),
            json!({"type": t::REASONING_SUMMARY_PART_ADDED, "item_id": "rs_1", "part": {"type": "summary_text", "text": ""}}),
            json!({"type": t::REASONING_SUMMARY_PART_DONE, "item_id": "rs_1", "part": {"type": "summary_text", "text": "ok"}}),
            json!({"type": t::REASONING_SUMMARY_TEXT_DELTA, "item_id": "rs_1", "delta": "thin"}),
            json!({"type": t::REASONING_SUMMARY_TEXT_DONE, "item_id": "rs_1", "text": "thinking"}),
            json!({"type": t::REASONING_TEXT_DELTA, "item_id": "rs_1", "delta": "step"}),
            json!({"type": t::REASONING_TEXT_DONE, "item_id": "rs_1", "text": "step one"}),
            json!({"type": t::REASONING_SUMMARY_DELTA, "item_id": "rs_1", "delta": {"text": "a"}}),
            json!({"type": t::REASONING_SUMMARY_DONE, "item_id": "rs_1", "text": "a"}),
            json!({"type": t::REFUSAL_DELTA, "item_id": "msg_1", "delta": "I can"}),
            json!({"type": t::REFUSAL_DONE, "item_id": "msg_1", "refusal": "I can't"}),
            json!({"type": t::OUTPUT_TEXT_DELTA, "item_id": "msg_1", "delta": "Hi"}),
            json!({"type": t::OUTPUT_TEXT_DONE, "item_id": "msg_1", "text": "Hi"}),
            json!({"type": t::WEB_SEARCH_CALL_IN_PROGRESS, "item_id": "ws_1"}),
            json!({"type": t::WEB_SEARCH_CALL_SEARCHING, "item_id": "ws_1"}),
            json!({"type": t::WEB_SEARCH_CALL_COMPLETED, "item_id": "ws_1"}),
            json!({"type": t::IMAGE_GENERATION_CALL_COMPLETED, "item_id": "ig_1"}),
            json!({"type": t::IMAGE_GENERATION_CALL_GENERATING, "item_id": "ig_1"}),
            json!({"type": t::IMAGE_GENERATION_CALL_IN_PROGRESS, "item_id": "ig_1"}),
            json!({"type": t::IMAGE_GENERATION_CALL_PARTIAL_IMAGE, "item_id": "ig_1", "partial_image_index": 0, "partial_image_b64": "iVBO"}),
            json!({"type": t::MCP_CALL_COMPLETED, "item_id": "mcp_1"}),
            json!({"type": t::MCP_CALL_FAILED, "item_id": "mcp_1"}),
            json!({"type": t::MCP_CALL_IN_PROGRESS, "item_id": "mcp_1"}),
            json!({"type": t::MCP_LIST_TOOLS_COMPLETED, "item_id": "mcpl_1"}),
            json!({"type": t::MCP_LIST_TOOLS_FAILED, "item_id": "mcpl_1"}),
            json!({"type": t::MCP_LIST_TOOLS_IN_PROGRESS, "item_id": "mcpl_1"}),
            json!({"type": t::OUTPUT_TEXT_ANNOTATION_ADDED, "item_id": "msg_1", "annotation": {"type": "url_citation", "url": "https://example.com"}}),
            json!({"type": t::CUSTOM_TOOL_CALL_INPUT_DELTA, "item_id": "ct_1", "delta": "ls"}),
            json!({"type": t::CUSTOM_TOOL_CALL_INPUT_DONE, "item_id": "ct_1", "input": "ls -la"}),
        ]
    }

    fn type_of(document: &Value) -> &str {
        document
            .get("type")
            .and_then(|v| v.as_str())
            .expect("fixture has type")
    }

    #[test]
    fn every_lifecycle_name_maps_to_its_phase_and_keeps_snapshot() {
        for phase in LifecyclePhase::ALL {
            let snapshot = json!({
                "id": "resp_1",
                "object": "response",
                "created_at": 1741290958,
                "status": "in_progress",
                "model": "gpt-5-nano",
                "output": [],
                "metadata": {"trace": "abc"}
            });
            let document = json!({
                "type": phase.as_str(),
                "sequence_number": 3,
                "response": snapshot.clone(),
            });
            let event = classify(&document).expect("lifecycle event");
            let (found_phase, envelope) = event.as_lifecycle().expect("lifecycle variant");
            assert_eq!(found_phase, phase);
            assert_eq!(event.event_type(), phase.as_str());
            assert_eq!(envelope.sequence_number, Some(3));
            assert_eq!(
                envelope.response,
                ResponseSnapshot::deserialize(&snapshot).expect("snapshot")
            );
        }
    }

    #[test]
    fn completed_example_classifies_to_completed_envelope() {
        let event = classify_str(
            r#"{"type":"response.completed","response":{"id":"r1","status":"completed"}}"#,
        )
        .expect("completed");
        match event {
            ResponseStreamEvent::Completed(envelope) => {
                assert_eq!(envelope.id(), "r1");
                assert_eq!(envelope.response.status, Some(ResponseStatus::Completed));
                assert_eq!(envelope.event_type, event_types::RESPONSE_COMPLETED);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn output_text_delta_example() {
        let event =
            classify_str(r#"{"type":"response.output_text.delta","item_id":"i1","delta":"Hi"}"#)
                .expect("delta");
        assert_eq!(
            event,
            ResponseStreamEvent::OutputText(OutputTextEvent::Delta(ResponseTextDeltaEvent {
                item_id: "i1".into(),
                output_index: 0,
                content_index: 0,
                delta: "Hi".into(),
                logprobs: None,
                obfuscation: None,
                sequence_number: None,
            }))
        );
    }

    #[test]
    fn unknown_future_event_is_error_with_document() {
        let document = json!({"type": "response.unknown_future_event", "item_id": "x"});
        let err = classify(&document).expect_err("unknown");
        match &err {
            ClassifyError::UnknownEvent {
                event_type,
                document: kept,
                ..
            } => {
                assert_eq!(event_type.as_deref(), Some("response.unknown_future_event"));
                assert_eq!(kept, &document);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(!err.is_schema_drift());
    }

    #[test]
    fn unrecognized_lifecycle_discriminator_never_yields_lifecycle() {
        // Shape matches the envelope, but the type is an output text delta.
        let document = json!({
            "type": event_types::OUTPUT_TEXT_DELTA,
            "item_id": "msg_1",
            "delta": "x",
            "response": {"id": "resp_1"}
        });
        assert!(matches!(
            probe_lifecycle(&document),
            Err(ProbeMiss::UnrecognizedDiscriminator { ref event_type })
                if event_type == event_types::OUTPUT_TEXT_DELTA
        ));
        let event = classify(&document).expect("falls through");
        assert!(matches!(
            event,
            ResponseStreamEvent::OutputText(OutputTextEvent::Delta(_))
        ));

        let cancelled = json!({"type": "response.cancelled", "response": {"id": "resp_1"}});
        let err = classify(&cancelled).expect_err("no lifecycle for unknown name");
        assert!(matches!(err, ClassifyError::UnknownEvent { .. }));
    }

    #[test]
    fn structural_and_discriminator_misses_are_distinct() {
        let no_envelope = json!({"type": event_types::RESPONSE_CREATED});
        assert!(matches!(
            probe_lifecycle(&no_envelope),
            Err(ProbeMiss::Structural { shape: LIFECYCLE_PROBE, .. })
        ));
    }

    #[test]
    fn every_fallback_leaf_classifies_to_its_own_variant() {
        for document in fallback_leaf_documents() {
            let event = classify(&document)
                .unwrap_or_else(|e| panic!("failed to classify {document}: {e}"));
            assert_eq!(event.event_type(), type_of(&document), "document {document}");
        }
    }

    #[test]
    fn probes_do_not_claim_fallback_leaves() {
        for document in fallback_leaf_documents() {
            for probe in PROBES.iter() {
                assert!(
                    (probe.decode)(&document).is_err(),
                    "probe {} claimed {document}",
                    probe.name
                );
            }
        }
    }

    #[test]
    fn fallback_leaves_map_to_expected_sub_variants() {
        let cases = [
            (
                json!({"type": event_types::CODE_INTERPRETER_CALL_CODE_DELTA, "item_id": "ci", "delta": "x"}),
                "code delta",
            ),
            (
                json!({"type": event_types::IMAGE_GENERATION_CALL_PARTIAL_IMAGE, "item_id": "ig", "partial_image_b64": "AA"}),
                "partial image",
            ),
            (
                json!({"type": event_types::REASONING_SUMMARY_DELTA, "item_id": "rs", "delta": {}}),
                "legacy summary",
            ),
        ];
        for (document, label) in cases {
            let event = classify(&document).expect(label);
            let ok = match label {
                "code delta" => matches!(
                    event,
                    ResponseStreamEvent::CodeInterpreterCall(CodeInterpreterCallEvent::Code(
                        CodeInterpreterCodeEvent::Delta(_)
                    ))
                ),
                "partial image" => matches!(
                    event,
                    ResponseStreamEvent::ImageGenerationCall(
                        ImageGenerationCallEvent::PartialImage(_)
                    )
                ),
                _ => matches!(
                    event,
                    ResponseStreamEvent::ReasoningSummary(ReasoningSummaryEvent::Delta(_))
                ),
            };
            assert!(ok, "{label}: {event:?}");
        }
    }

    #[test]
    fn output_item_added_and_done_are_deterministic() {
        let item = json!({"id": "msg_1", "type": "message", "status": "in_progress", "role": "assistant", "content": []});
        let added = json!({"type": event_types::OUTPUT_ITEM_ADDED, "output_index": 0, "item": item.clone(), "sequence_number": 2});
        let done = json!({"type": event_types::OUTPUT_ITEM_DONE, "output_index": 0, "item": item});

        match classify(&added).expect("added") {
            ResponseStreamEvent::OutputItem(OutputItemEvent::Added(e)) => {
                assert_eq!(e.item.item_type, "message");
                assert_eq!(e.item.id.as_deref(), Some("msg_1"));
                assert_eq!(e.item.extra.get("role"), Some(&json!("assistant")));
                assert_eq!(e.sequence_number, Some(2));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            classify(&done).expect("done"),
            ResponseStreamEvent::OutputItem(OutputItemEvent::Done(_))
        ));
    }

    #[test]
    fn mcp_call_arguments_probe_and_fallback_agree() {
        let delta = json!({"type": event_types::MCP_CALL_ARGUMENTS_DELTA, "item_id": "mcp_1", "output_index": 1, "delta": "{\"q\""});
        let done = json!({"type": event_types::MCP_CALL_ARGUMENTS_DONE, "item_id": "mcp_1", "arguments": "{\"q\":1}"});

        let with_probe = Classifier::default();
        let without_probe = Classifier::new(ClassifierConfig::default().mcp_arguments_probe(false));

        let probed = with_probe.classify(&delta).expect("probe delta");
        assert!(matches!(
            probed,
            ResponseStreamEvent::McpCallArguments(McpCallArgumentsEvent::Delta(ref e)) if e.output_index == 1
        ));
        assert_eq!(without_probe.classify(&delta).expect("fallback delta"), probed);

        let probed_done = with_probe.classify(&done).expect("probe done");
        assert!(matches!(
            probed_done,
            ResponseStreamEvent::McpCallArguments(McpCallArgumentsEvent::Done(_))
        ));
        assert_eq!(without_probe.classify(&done).expect("fallback done"), probed_done);
    }

    #[test]
    fn malformed_lifecycle_and_output_item_documents_are_bad_input() {
        let document = json!({"type": event_types::RESPONSE_CREATED, "response": {}});
        let err = classify(&document).expect_err("no id");
        assert!(!err.is_schema_drift());
        match &err {
            ClassifyError::UnknownEvent {
                event_type,
                message,
                document: kept,
            } => {
                assert_eq!(event_type.as_deref(), Some(event_types::RESPONSE_CREATED));
                assert!(message.contains(LIFECYCLE_PROBE), "{message}");
                assert!(message.contains("id"), "{message}");
                assert_eq!(kept, &document);
            }
            other => panic!("unexpected error {other:?}"),
        }

        for (event_type, shape) in [
            (event_types::OUTPUT_ITEM_ADDED, OUTPUT_ITEM_ADDED_PROBE),
            (event_types::OUTPUT_ITEM_DONE, OUTPUT_ITEM_DONE_PROBE),
        ] {
            let document = json!({"type": event_type, "output_index": 0});
            let err = classify(&document).expect_err("no item");
            assert!(!err.is_schema_drift());
            assert!(
                matches!(err, ClassifyError::UnknownEvent { ref message, .. }
                    if message.contains(shape) && message.contains("item")),
                "{err}"
            );
        }
    }

    #[test]
    fn non_object_documents_are_rejected() {
        let cases = [
            json!(["response.completed", 1, {"id": "r1"}]),
            json!(["response.output_text.delta", "i1", 0, 0, "Hi"]),
            json!("response.completed"),
            json!(42),
            json!(null),
        ];
        for document in cases {
            let err = classify(&document).expect_err("not an object");
            assert!(
                matches!(err, ClassifyError::UnknownEvent { event_type: None, ref message, .. }
                    if message.starts_with("expected a JSON object")),
                "{document}: {err}"
            );
            assert_eq!(err.document(), Some(&document));
        }

        let err = serde_json::from_str::<ResponseStreamEvent>(r#"["error", "boom"]"#)
            .expect_err("array");
        assert!(err.to_string().contains("expected a JSON object"));
    }

    #[test]
    fn missing_required_member_is_unknown_event() {
        let document = json!({"type": event_types::OUTPUT_TEXT_DELTA, "item_id": "msg_1"});
        let err = classify(&document).expect_err("missing delta");
        assert!(matches!(err, ClassifyError::UnknownEvent { .. }));
        assert_eq!(err.event_type(), Some(event_types::OUTPUT_TEXT_DELTA));
    }

    #[test]
    fn classification_is_idempotent() {
        let classifier = Classifier::default();
        for document in fallback_leaf_documents() {
            assert_eq!(
                classifier.classify(&document).expect("first"),
                classifier.classify(&document).expect("second")
            );
        }
    }

    #[test]
    fn invalid_json_text_is_reported() {
        let err = Classifier::default()
            .classify_slice(b"{\"type\":")
            .expect_err("truncated");
        assert!(matches!(err, ClassifyError::InvalidJson { .. }));
        assert_eq!(err.document(), None);
    }

    #[test]
    fn stream_event_deserializes_through_serde() {
        let event: ResponseStreamEvent =
            serde_json::from_str(r#"{"type":"error","message":"rate limited","code":"429"}"#)
                .expect("error event");
        assert!(matches!(event, ResponseStreamEvent::Error(ref e) if e.message == "rate limited"));

        let err = serde_json::from_str::<ResponseStreamEvent>(r#"{"type":"nope"}"#)
            .expect_err("unknown");
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn classifier_is_shareable_across_threads() {
        let classifier = std::sync::Arc::new(Classifier::default());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let classifier = classifier.clone();
                std::thread::spawn(move || {
                    let document = json!({"type": event_types::OUTPUT_TEXT_DELTA, "item_id": format!("msg_{i}"), "delta": "x"});
                    classifier.classify(&document).expect("classify").event_type()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("join"), event_types::OUTPUT_TEXT_DELTA);
        }
    }
}
