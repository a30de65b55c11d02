//! Exhaustive decoder of last resort.
//!
//! `RawStreamEvent` knows every wire `type` the Responses stream can carry.
//! Types owned by an earlier probe (lifecycle, output item, MCP arguments)
//! are listed too, but only as untyped JSON: reaching them here means the
//! document failed its dedicated decoder.
use serde::Deserialize;
use serde_json::Value;

use crate::payloads::*;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum RawStreamEvent {
    // Owned by the lifecycle probe.
    #[serde(rename = "response.created")]
    ResponseCreated(Value),
    #[serde(rename = "response.in_progress")]
    ResponseInProgress(Value),
    #[serde(rename = "response.completed")]
    ResponseCompleted(Value),
    #[serde(rename = "response.failed")]
    ResponseFailed(Value),
    #[serde(rename = "response.incomplete")]
    ResponseIncomplete(Value),
    #[serde(rename = "response.queued")]
    ResponseQueued(Value),

    // Owned by the output item probes.
    #[serde(rename = "response.output_item.added")]
    OutputItemAdded(Value),
    #[serde(rename = "response.output_item.done")]
    OutputItemDone(Value),

    // Normally claimed by the MCP arguments probe; decoded here as well so
    // the probe can be switched off.
    #[serde(rename = "response.mcp_call_arguments.delta")]
    McpCallArgumentsDelta(ResponseMcpCallArgumentsDeltaEvent),
    #[serde(rename = "response.mcp_call_arguments.done")]
    McpCallArgumentsDone(ResponseMcpCallArgumentsDoneEvent),

    #[serde(rename = "response.audio.delta")]
    AudioDelta(ResponseAudioDeltaEvent),
    #[serde(rename = "response.audio.done")]
    AudioDone(ResponseAudioDoneEvent),
    #[serde(rename = "response.audio.transcript.delta")]
    AudioTranscriptDelta(ResponseAudioTranscriptDeltaEvent),
    #[serde(rename = "response.audio.transcript.done")]
    AudioTranscriptDone(ResponseAudioTranscriptDoneEvent),

    #[serde(rename = "response.code_interpreter_call_code.delta")]
    CodeInterpreterCallCodeDelta(ResponseCodeInterpreterCallCodeDeltaEvent),
    #[serde(rename = "response.code_interpreter_call_code.done")]
    CodeInterpreterCallCodeDone(ResponseCodeInterpreterCallCodeDoneEvent),
    #[serde(rename = "response.code_interpreter_call.completed")]
    CodeInterpreterCallCompleted(ToolCallProgressEvent),
    #[serde(rename = "response.code_interpreter_call.in_progress")]
    CodeInterpreterCallInProgress(ToolCallProgressEvent),
    #[serde(rename = "response.code_interpreter_call.interpreting")]
    CodeInterpreterCallInterpreting(ToolCallProgressEvent),

    #[serde(rename = "response.content_part.added")]
    ContentPartAdded(ResponseContentPartAddedEvent),
    #[serde(rename = "response.content_part.done")]
    ContentPartDone(ResponseContentPartDoneEvent),

    #[serde(rename = "error")]
    Error(ResponseErrorEvent),

    #[serde(rename = "response.file_search_call.completed")]
    FileSearchCallCompleted(ToolCallProgressEvent),
    #[serde(rename = "response.file_search_call.in_progress")]
    FileSearchCallInProgress(ToolCallProgressEvent),
    #[serde(rename = "response.file_search_call.searching")]
    FileSearchCallSearching(ToolCallProgressEvent),

    #[serde(rename = "response.function_call_arguments.delta")]
    FunctionCallArgumentsDelta(ResponseFunctionCallArgumentsDeltaEvent),
    #[serde(rename = "response.function_call_arguments.done")]
    FunctionCallArgumentsDone(ResponseFunctionCallArgumentsDoneEvent),

    #[serde(rename = "response.reasoning_summary_part.added")]
    ReasoningSummaryPartAdded(ResponseReasoningSummaryPartAddedEvent),
    #[serde(rename = "response.reasoning_summary_part.done")]
    ReasoningSummaryPartDone(ResponseReasoningSummaryPartDoneEvent),
    #[serde(rename = "response.reasoning_summary_text.delta")]
    ReasoningSummaryTextDelta(ResponseReasoningSummaryTextDeltaEvent),
    #[serde(rename = "response.reasoning_summary_text.done")]
    ReasoningSummaryTextDone(ResponseReasoningSummaryTextDoneEvent),
    #[serde(rename = "response.reasoning_summary.delta")]
    ReasoningSummaryDelta(ResponseReasoningSummaryDeltaEvent),
    #[serde(rename = "response.reasoning_summary.done")]
    ReasoningSummaryDone(ResponseReasoningSummaryDoneEvent),
    #[serde(rename = "response.reasoning_text.delta")]
    ReasoningTextDelta(ResponseReasoningTextDeltaEvent),
    #[serde(rename = "response.reasoning_text.done")]
    ReasoningTextDone(ResponseReasoningTextDoneEvent),

    #[serde(rename = "response.refusal.delta")]
    RefusalDelta(ResponseRefusalDeltaEvent),
    #[serde(rename = "response.refusal.done")]
    RefusalDone(ResponseRefusalDoneEvent),

    #[serde(rename = "response.output_text.delta")]
    TextDelta(ResponseTextDeltaEvent),
    #[serde(rename = "response.output_text.done")]
    TextDone(ResponseTextDoneEvent),
    #[serde(rename = "response.output_text.annotation.added")]
    OutputTextAnnotationAdded(ResponseOutputTextAnnotationAddedEvent),

    #[serde(rename = "response.web_search_call.completed")]
    WebSearchCallCompleted(ToolCallProgressEvent),
    #[serde(rename = "response.web_search_call.in_progress")]
    WebSearchCallInProgress(ToolCallProgressEvent),
    #[serde(rename = "response.web_search_call.searching")]
    WebSearchCallSearching(ToolCallProgressEvent),

    #[serde(rename = "response.image_generation_call.completed")]
    ImageGenCallCompleted(ToolCallProgressEvent),
    #[serde(rename = "response.image_generation_call.generating")]
    ImageGenCallGenerating(ToolCallProgressEvent),
    #[serde(rename = "response.image_generation_call.in_progress")]
    ImageGenCallInProgress(ToolCallProgressEvent),
    #[serde(rename = "response.image_generation_call.partial_image")]
    ImageGenCallPartialImage(ResponseImageGenCallPartialImageEvent),

    #[serde(rename = "response.mcp_call.completed")]
    McpCallCompleted(ToolCallProgressEvent),
    #[serde(rename = "response.mcp_call.failed")]
    McpCallFailed(ToolCallProgressEvent),
    #[serde(rename = "response.mcp_call.in_progress")]
    McpCallInProgress(ToolCallProgressEvent),

    #[serde(rename = "response.mcp_list_tools.completed")]
    McpListToolsCompleted(ToolCallProgressEvent),
    #[serde(rename = "response.mcp_list_tools.failed")]
    McpListToolsFailed(ToolCallProgressEvent),
    #[serde(rename = "response.mcp_list_tools.in_progress")]
    McpListToolsInProgress(ToolCallProgressEvent),

    #[serde(rename = "response.custom_tool_call_input.delta")]
    CustomToolCallInputDelta(ResponseCustomToolCallInputDeltaEvent),
    #[serde(rename = "response.custom_tool_call_input.done")]
    CustomToolCallInputDone(ResponseCustomToolCallInputDoneEvent),
}
