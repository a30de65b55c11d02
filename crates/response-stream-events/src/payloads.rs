//! Leaf payloads carried by the streaming events.
//!
//! Each struct mirrors the members the server sends for one (or, for the
//! status-only tool progress events, several) event types. The discriminator
//! itself is not stored here; it is implied by where the payload sits in
//! [`crate::ResponseStreamEvent`].
use serde::Deserialize;
use serde_json::{Map, Value};

/// Output item as it appears in `output_item.added` / `output_item.done`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OutputItem {
    #[serde(default)]
    pub id: Option<String>,
    /// `message`, `function_call`, `reasoning`, `mcp_call`, ...
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseOutputItemAddedEvent {
    #[serde(default)]
    pub output_index: u32,
    pub item: OutputItem,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseOutputItemDoneEvent {
    #[serde(default)]
    pub output_index: u32,
    pub item: OutputItem,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseContentPartAddedEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    #[serde(default)]
    pub content_index: u32,
    pub part: Value,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseContentPartDoneEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    #[serde(default)]
    pub content_index: u32,
    pub part: Value,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

/// Incremental chunk of assistant text.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseTextDeltaEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    #[serde(default)]
    pub content_index: u32,
    pub delta: String,
    #[serde(default)]
    pub logprobs: Option<Vec<Value>>,
    #[serde(default)]
    pub obfuscation: Option<String>,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

/// Final text of one content part.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseTextDoneEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    #[serde(default)]
    pub content_index: u32,
    pub text: String,
    #[serde(default)]
    pub logprobs: Option<Vec<Value>>,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseOutputTextAnnotationAddedEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    #[serde(default)]
    pub content_index: u32,
    #[serde(default)]
    pub annotation_index: u32,
    pub annotation: Value,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseRefusalDeltaEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    #[serde(default)]
    pub content_index: u32,
    pub delta: String,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseRefusalDoneEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    #[serde(default)]
    pub content_index: u32,
    pub refusal: String,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

/// Base64 audio chunk.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseAudioDeltaEvent {
    pub delta: String,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseAudioDoneEvent {
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseAudioTranscriptDeltaEvent {
    pub delta: String,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseAudioTranscriptDoneEvent {
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseFunctionCallArgumentsDeltaEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    pub delta: String,
    #[serde(default)]
    pub obfuscation: Option<String>,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseFunctionCallArgumentsDoneEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    pub arguments: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseCustomToolCallInputDeltaEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    pub delta: String,
    #[serde(default)]
    pub obfuscation: Option<String>,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseCustomToolCallInputDoneEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    pub input: String,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

/// Status-only progress of a hosted tool call.
///
/// Shared by the file search, web search, image generation, MCP call, MCP
/// list-tools and code interpreter phase events, which all carry the same
/// three members.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ToolCallProgressEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ResponseImageGenCallPartialImageEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    #[serde(default)]
    pub partial_image_index: u32,
    pub partial_image_b64: String,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ResponseCodeInterpreterCallCodeDeltaEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    pub delta: String,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ResponseCodeInterpreterCallCodeDoneEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    pub code: String,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ResponseMcpCallArgumentsDeltaEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    pub delta: String,
    #[serde(default)]
    pub obfuscation: Option<String>,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ResponseMcpCallArgumentsDoneEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    pub arguments: String,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseReasoningSummaryPartAddedEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    #[serde(default)]
    pub summary_index: u32,
    pub part: Value,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseReasoningSummaryPartDoneEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    #[serde(default)]
    pub summary_index: u32,
    pub part: Value,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ResponseReasoningSummaryTextDeltaEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    #[serde(default)]
    pub summary_index: u32,
    pub delta: String,
    #[serde(default)]
    pub obfuscation: Option<String>,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ResponseReasoningSummaryTextDoneEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    #[serde(default)]
    pub summary_index: u32,
    pub text: String,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

/// Legacy summary delta; `delta` is an object rather than a string.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponseReasoningSummaryDeltaEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    #[serde(default)]
    pub summary_index: u32,
    pub delta: Value,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ResponseReasoningSummaryDoneEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    #[serde(default)]
    pub summary_index: u32,
    pub text: String,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ResponseReasoningTextDeltaEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    #[serde(default)]
    pub content_index: u32,
    pub delta: String,
    #[serde(default)]
    pub obfuscation: Option<String>,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ResponseReasoningTextDoneEvent {
    pub item_id: String,
    #[serde(default)]
    pub output_index: u32,
    #[serde(default)]
    pub content_index: u32,
    pub text: String,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}

/// Stream-level error reported by the server.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ResponseErrorEvent {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
    #[serde(default)]
    pub param: Option<String>,
    #[serde(default)]
    pub sequence_number: Option<u64>,
}
