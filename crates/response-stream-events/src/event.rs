//! Closed taxonomy of classified streaming events.
//!
//! Values are produced by [`crate::Classifier`] only. Every variant here is
//! reachable from exactly one decoding path.
use std::fmt;

use crate::envelope::{LifecyclePhase, ResponseEnvelope};
use crate::event_types;
use crate::payloads::*;

/// Output item lifecycle (`output_item.*`).
#[derive(Clone, Debug, PartialEq)]
pub enum OutputItemEvent {
    /// A new output item was added.
    Added(ResponseOutputItemAddedEvent),
    /// An output item was marked done.
    Done(ResponseOutputItemDoneEvent),
}

/// Content parts inside a message item (`content_part.*`).
#[derive(Clone, Debug, PartialEq)]
pub enum ContentPartEvent {
    /// A new content part was opened.
    Added(ResponseContentPartAddedEvent),
    /// A content part is complete.
    Done(ResponseContentPartDoneEvent),
}

/// Text output; by far the most frequent event in a typical stream.
#[derive(Clone, Debug, PartialEq)]
pub enum OutputTextEvent {
    /// Incremental text.
    Delta(ResponseTextDeltaEvent),
    /// Final text of the content part.
    Done(ResponseTextDoneEvent),
}

impl fmt::Display for OutputTextEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delta(event) => write!(f, "output_text.delta(delta: {event:?})"),
            Self::Done(event) => write!(f, "output_text.done(done: {event:?})"),
        }
    }
}

/// Model refusal text.
#[derive(Clone, Debug, PartialEq)]
pub enum RefusalEvent {
    /// Incremental refusal text.
    Delta(ResponseRefusalDeltaEvent),
    /// Final refusal text.
    Done(ResponseRefusalDoneEvent),
}

/// JSON arguments of a function tool call.
#[derive(Clone, Debug, PartialEq)]
pub enum FunctionCallArgumentsEvent {
    /// Partial arguments string.
    Delta(ResponseFunctionCallArgumentsDeltaEvent),
    /// Complete arguments string.
    Done(ResponseFunctionCallArgumentsDoneEvent),
}

/// Progress of a file search tool call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileSearchCallEvent {
    /// The call was started.
    InProgress(ToolCallProgressEvent),
    /// Searching the vector stores.
    Searching(ToolCallProgressEvent),
    /// Search finished and results are attached to the output item.
    Completed(ToolCallProgressEvent),
}

/// Progress of a web search tool call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WebSearchCallEvent {
    /// The call was started.
    InProgress(ToolCallProgressEvent),
    /// A search is running.
    Searching(ToolCallProgressEvent),
    /// The search finished.
    Completed(ToolCallProgressEvent),
}

/// Parts of a reasoning summary (`reasoning_summary_part.*`).
#[derive(Clone, Debug, PartialEq)]
pub enum ReasoningSummaryPartEvent {
    /// A summary part was opened.
    Added(ResponseReasoningSummaryPartAddedEvent),
    /// A summary part is complete.
    Done(ResponseReasoningSummaryPartDoneEvent),
}

/// Text of a reasoning summary part (`reasoning_summary_text.*`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReasoningSummaryTextEvent {
    /// Incremental summary text.
    Delta(ResponseReasoningSummaryTextDeltaEvent),
    /// Final summary text.
    Done(ResponseReasoningSummaryTextDoneEvent),
}

/// Progress of an image generation tool call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageGenerationCallEvent {
    /// Final image is available.
    Completed(ToolCallProgressEvent),
    /// The image is being generated.
    Generating(ToolCallProgressEvent),
    /// The call was started.
    InProgress(ToolCallProgressEvent),
    /// A base64 preview of the image in progress.
    PartialImage(ResponseImageGenCallPartialImageEvent),
}

/// Arguments of an MCP tool call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum McpCallArgumentsEvent {
    /// Partial arguments string.
    Delta(ResponseMcpCallArgumentsDeltaEvent),
    /// Complete arguments string.
    Done(ResponseMcpCallArgumentsDoneEvent),
}

/// Outcome of an MCP tool call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum McpCallEvent {
    /// The remote tool returned.
    Completed(ToolCallProgressEvent),
    /// The remote tool failed.
    Failed(ToolCallProgressEvent),
    /// The call is running.
    InProgress(ToolCallProgressEvent),
}

/// Listing the tools of an MCP server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum McpListToolsEvent {
    /// The tool list was retrieved.
    Completed(ToolCallProgressEvent),
    /// The server could not be listed.
    Failed(ToolCallProgressEvent),
    /// Listing started.
    InProgress(ToolCallProgressEvent),
}

/// Annotations (citations, file paths) attached to output text.
#[derive(Clone, Debug, PartialEq)]
pub enum OutputTextAnnotationEvent {
    /// An annotation was added to a text part.
    Added(ResponseOutputTextAnnotationAddedEvent),
}

/// Full reasoning text (`reasoning_text.*`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReasoningEvent {
    /// Incremental reasoning text.
    Delta(ResponseReasoningTextDeltaEvent),
    /// Final reasoning text.
    Done(ResponseReasoningTextDoneEvent),
}

/// Legacy `reasoning_summary.*` stream.
#[derive(Clone, Debug, PartialEq)]
pub enum ReasoningSummaryEvent {
    /// Structured summary delta.
    Delta(ResponseReasoningSummaryDeltaEvent),
    /// Final summary text.
    Done(ResponseReasoningSummaryDoneEvent),
}

/// Base64 audio output.
#[derive(Clone, Debug, PartialEq)]
pub enum AudioEvent {
    /// A chunk of encoded audio.
    Delta(ResponseAudioDeltaEvent),
    /// Audio output is complete.
    Done(ResponseAudioDoneEvent),
}

/// Transcript of the audio output.
#[derive(Clone, Debug, PartialEq)]
pub enum AudioTranscriptEvent {
    /// Incremental transcript text.
    Delta(ResponseAudioTranscriptDeltaEvent),
    /// The transcript is complete.
    Done(ResponseAudioTranscriptDoneEvent),
}

/// Code submitted to the code interpreter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodeInterpreterCodeEvent {
    /// Partial code snippet.
    Delta(ResponseCodeInterpreterCallCodeDeltaEvent),
    /// Complete code snippet.
    Done(ResponseCodeInterpreterCallCodeDoneEvent),
}

/// Progress of a code interpreter tool call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodeInterpreterCallEvent {
    /// Code streamed into the call.
    Code(CodeInterpreterCodeEvent),
    /// Execution finished.
    Completed(ToolCallProgressEvent),
    /// The call was started.
    InProgress(ToolCallProgressEvent),
    /// The interpreter is running the code.
    Interpreting(ToolCallProgressEvent),
}

/// Free-form input of a custom tool call.
#[derive(Clone, Debug, PartialEq)]
pub enum CustomToolCallEvent {
    /// Partial input.
    Delta(ResponseCustomToolCallInputDeltaEvent),
    /// Complete input.
    Done(ResponseCustomToolCallInputDoneEvent),
}

/// One classified message of a Responses API event stream.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseStreamEvent {
    /// The response was created.
    Created(ResponseEnvelope),
    /// The response is being generated.
    InProgress(ResponseEnvelope),
    /// The response finished successfully.
    Completed(ResponseEnvelope),
    /// The response failed.
    Failed(ResponseEnvelope),
    /// The response finished without completing (for example token limit).
    Incomplete(ResponseEnvelope),
    /// The response is queued and waiting to be processed.
    Queued(ResponseEnvelope),

    /// An output item was added or finished.
    OutputItem(OutputItemEvent),
    /// A content part was added or finished.
    ContentPart(ContentPartEvent),
    /// Output text delta or final text.
    OutputText(OutputTextEvent),
    /// Refusal text.
    Refusal(RefusalEvent),
    /// Function call arguments.
    FunctionCallArguments(FunctionCallArgumentsEvent),
    /// File search call progress.
    FileSearchCall(FileSearchCallEvent),
    /// Web search call progress.
    WebSearchCall(WebSearchCallEvent),
    /// Reasoning summary part added or finished.
    ReasoningSummaryPart(ReasoningSummaryPartEvent),
    /// Reasoning summary text.
    ReasoningSummaryText(ReasoningSummaryTextEvent),
    /// Image generation call progress.
    ImageGenerationCall(ImageGenerationCallEvent),
    /// MCP call outcome.
    McpCall(McpCallEvent),
    /// MCP call arguments.
    McpCallArguments(McpCallArgumentsEvent),
    /// MCP list tools progress.
    McpListTools(McpListToolsEvent),
    /// Annotation added to output text.
    OutputTextAnnotation(OutputTextAnnotationEvent),
    /// Reasoning text.
    Reasoning(ReasoningEvent),
    /// Legacy reasoning summary.
    ReasoningSummary(ReasoningSummaryEvent),
    /// Audio output.
    Audio(AudioEvent),
    /// Audio transcript.
    AudioTranscript(AudioTranscriptEvent),
    /// Code interpreter call progress and code.
    CodeInterpreterCall(CodeInterpreterCallEvent),
    /// Custom tool call input.
    CustomToolCall(CustomToolCallEvent),
    /// The server reported an error for the stream.
    Error(ResponseErrorEvent),
}

impl ResponseStreamEvent {
    /// Wraps a lifecycle envelope in the variant for `phase`.
    pub fn lifecycle(phase: LifecyclePhase, envelope: ResponseEnvelope) -> Self {
        match phase {
            LifecyclePhase::Created => Self::Created(envelope),
            LifecyclePhase::InProgress => Self::InProgress(envelope),
            LifecyclePhase::Completed => Self::Completed(envelope),
            LifecyclePhase::Failed => Self::Failed(envelope),
            LifecyclePhase::Incomplete => Self::Incomplete(envelope),
            LifecyclePhase::Queued => Self::Queued(envelope),
        }
    }

    /// Lifecycle phase and envelope, for the six response-level events.
    pub fn as_lifecycle(&self) -> Option<(LifecyclePhase, &ResponseEnvelope)> {
        match self {
            Self::Created(e) => Some((LifecyclePhase::Created, e)),
            Self::InProgress(e) => Some((LifecyclePhase::InProgress, e)),
            Self::Completed(e) => Some((LifecyclePhase::Completed, e)),
            Self::Failed(e) => Some((LifecyclePhase::Failed, e)),
            Self::Incomplete(e) => Some((LifecyclePhase::Incomplete, e)),
            Self::Queued(e) => Some((LifecyclePhase::Queued, e)),
            _ => None,
        }
    }

    /// True for events after which the server sends nothing else for the
    /// response.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Completed(_) | Self::Failed(_) | Self::Incomplete(_) | Self::Error(_)
        )
    }

    /// Wire discriminator of the classified leaf.
    pub fn event_type(&self) -> &'static str {
        use event_types as t;
        match self {
            Self::Created(_) => t::RESPONSE_CREATED,
            Self::InProgress(_) => t::RESPONSE_IN_PROGRESS,
            Self::Completed(_) => t::RESPONSE_COMPLETED,
            Self::Failed(_) => t::RESPONSE_FAILED,
            Self::Incomplete(_) => t::RESPONSE_INCOMPLETE,
            Self::Queued(_) => t::RESPONSE_QUEUED,
            Self::OutputItem(e) => match e {
                OutputItemEvent::Added(_) => t::OUTPUT_ITEM_ADDED,
                OutputItemEvent::Done(_) => t::OUTPUT_ITEM_DONE,
            },
            Self::ContentPart(e) => match e {
                ContentPartEvent::Added(_) => t::CONTENT_PART_ADDED,
                ContentPartEvent::Done(_) => t::CONTENT_PART_DONE,
            },
            Self::OutputText(e) => match e {
                OutputTextEvent::Delta(_) => t::OUTPUT_TEXT_DELTA,
                OutputTextEvent::Done(_) => t::OUTPUT_TEXT_DONE,
            },
            Self::Refusal(e) => match e {
                RefusalEvent::Delta(_) => t::REFUSAL_DELTA,
                RefusalEvent::Done(_) => t::REFUSAL_DONE,
            },
            Self::FunctionCallArguments(e) => match e {
                FunctionCallArgumentsEvent::Delta(_) => t::FUNCTION_CALL_ARGUMENTS_DELTA,
                FunctionCallArgumentsEvent::Done(_) => t::FUNCTION_CALL_ARGUMENTS_DONE,
            },
            Self::FileSearchCall(e) => match e {
                FileSearchCallEvent::InProgress(_) => t::FILE_SEARCH_CALL_IN_PROGRESS,
                FileSearchCallEvent::Searching(_) => t::FILE_SEARCH_CALL_SEARCHING,
                FileSearchCallEvent::Completed(_) => t::FILE_SEARCH_CALL_COMPLETED,
            },
            Self::WebSearchCall(e) => match e {
                WebSearchCallEvent::InProgress(_) => t::WEB_SEARCH_CALL_IN_PROGRESS,
                WebSearchCallEvent::Searching(_) => t::WEB_SEARCH_CALL_SEARCHING,
                WebSearchCallEvent::Completed(_) => t::WEB_SEARCH_CALL_COMPLETED,
            },
            Self::ReasoningSummaryPart(e) => match e {
                ReasoningSummaryPartEvent::Added(_) => t::REASONING_SUMMARY_PART_ADDED,
                ReasoningSummaryPartEvent::Done(_) => t::REASONING_SUMMARY_PART_DONE,
            },
            Self::ReasoningSummaryText(e) => match e {
                ReasoningSummaryTextEvent::Delta(_) => t::REASONING_SUMMARY_TEXT_DELTA,
                ReasoningSummaryTextEvent::Done(_) => t::REASONING_SUMMARY_TEXT_DONE,
            },
            Self::ImageGenerationCall(e) => match e {
                ImageGenerationCallEvent::Completed(_) => t::IMAGE_GENERATION_CALL_COMPLETED,
                ImageGenerationCallEvent::Generating(_) => t::IMAGE_GENERATION_CALL_GENERATING,
                ImageGenerationCallEvent::InProgress(_) => t::IMAGE_GENERATION_CALL_IN_PROGRESS,
                ImageGenerationCallEvent::PartialImage(_) => {
                    t::IMAGE_GENERATION_CALL_PARTIAL_IMAGE
                }
            },
            Self::McpCall(e) => match e {
                McpCallEvent::Completed(_) => t::MCP_CALL_COMPLETED,
                McpCallEvent::Failed(_) => t::MCP_CALL_FAILED,
                McpCallEvent::InProgress(_) => t::MCP_CALL_IN_PROGRESS,
            },
            Self::McpCallArguments(e) => match e {
                McpCallArgumentsEvent::Delta(_) => t::MCP_CALL_ARGUMENTS_DELTA,
                McpCallArgumentsEvent::Done(_) => t::MCP_CALL_ARGUMENTS_DONE,
            },
            Self::McpListTools(e) => match e {
                McpListToolsEvent::Completed(_) => t::MCP_LIST_TOOLS_COMPLETED,
                McpListToolsEvent::Failed(_) => t::MCP_LIST_TOOLS_FAILED,
                McpListToolsEvent::InProgress(_) => t::MCP_LIST_TOOLS_IN_PROGRESS,
            },
            Self::OutputTextAnnotation(OutputTextAnnotationEvent::Added(_)) => {
                t::OUTPUT_TEXT_ANNOTATION_ADDED
            }
            Self::Reasoning(e) => match e {
                ReasoningEvent::Delta(_) => t::REASONING_TEXT_DELTA,
                ReasoningEvent::Done(_) => t::REASONING_TEXT_DONE,
            },
            Self::ReasoningSummary(e) => match e {
                ReasoningSummaryEvent::Delta(_) => t::REASONING_SUMMARY_DELTA,
                ReasoningSummaryEvent::Done(_) => t::REASONING_SUMMARY_DONE,
            },
            Self::Audio(e) => match e {
                AudioEvent::Delta(_) => t::AUDIO_DELTA,
                AudioEvent::Done(_) => t::AUDIO_DONE,
            },
            Self::AudioTranscript(e) => match e {
                AudioTranscriptEvent::Delta(_) => t::AUDIO_TRANSCRIPT_DELTA,
                AudioTranscriptEvent::Done(_) => t::AUDIO_TRANSCRIPT_DONE,
            },
            Self::CodeInterpreterCall(e) => match e {
                CodeInterpreterCallEvent::Code(CodeInterpreterCodeEvent::Delta(_)) => {
                    t::CODE_INTERPRETER_CALL_CODE_DELTA
                }
                CodeInterpreterCallEvent::Code(CodeInterpreterCodeEvent::Done(_)) => {
                    t::CODE_INTERPRETER_CALL_CODE_DONE
                }
                CodeInterpreterCallEvent::Completed(_) => t::CODE_INTERPRETER_CALL_COMPLETED,
                CodeInterpreterCallEvent::InProgress(_) => t::CODE_INTERPRETER_CALL_IN_PROGRESS,
                CodeInterpreterCallEvent::Interpreting(_) => {
                    t::CODE_INTERPRETER_CALL_INTERPRETING
                }
            },
            Self::CustomToolCall(e) => match e {
                CustomToolCallEvent::Delta(_) => t::CUSTOM_TOOL_CALL_INPUT_DELTA,
                CustomToolCallEvent::Done(_) => t::CUSTOM_TOOL_CALL_INPUT_DONE,
            },
            Self::Error(_) => t::ERROR,
        }
    }
}

impl fmt::Display for ResponseStreamEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutputText(event) => fmt::Display::fmt(event, f),
            Self::Error(event) => write!(f, "{}: {}", self.event_type(), event.message),
            _ => match self.as_lifecycle() {
                Some((_, envelope)) => {
                    write!(f, "{} (response {})", self.event_type(), envelope.id())?;
                    match envelope.response.error_message() {
                        Some(message) => write!(f, ": {message}"),
                        None => Ok(()),
                    }
                }
                None => f.write_str(self.event_type()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_delta(delta: &str) -> ResponseTextDeltaEvent {
        ResponseTextDeltaEvent {
            item_id: "msg_1".into(),
            output_index: 0,
            content_index: 0,
            delta: delta.into(),
            logprobs: None,
            obfuscation: None,
            sequence_number: Some(4),
        }
    }

    #[test]
    fn output_text_display_distinguishes_delta_and_done() {
        let delta = OutputTextEvent::Delta(text_delta("Hi"));
        let done = OutputTextEvent::Done(ResponseTextDoneEvent {
            item_id: "msg_1".into(),
            output_index: 0,
            content_index: 0,
            text: "Hi".into(),
            logprobs: None,
            sequence_number: Some(5),
        });
        let delta_text = delta.to_string();
        let done_text = done.to_string();
        assert!(delta_text.starts_with("output_text.delta(delta: "));
        assert!(delta_text.contains("\"Hi\""));
        assert!(done_text.starts_with("output_text.done(done: "));
        assert!(done_text.contains("\"Hi\""));
        assert_ne!(delta_text, done_text);
    }

    #[test]
    fn stream_event_display_delegates_output_text() {
        let event = ResponseStreamEvent::OutputText(OutputTextEvent::Delta(text_delta("abc")));
        assert!(event.to_string().contains("delta: \"abc\""));
        assert_eq!(event.event_type(), event_types::OUTPUT_TEXT_DELTA);
        assert!(!event.is_terminal());
    }

    #[test]
    fn error_is_terminal_and_renders_message() {
        let event = ResponseStreamEvent::Error(ResponseErrorEvent {
            code: Some("rate_limit_exceeded".into()),
            message: "slow down".into(),
            param: None,
            sequence_number: None,
        });
        assert!(event.is_terminal());
        assert_eq!(event.to_string(), "error: slow down");
    }

    #[test]
    fn failed_lifecycle_renders_response_error() {
        use serde::Deserialize as _;

        let failed = ResponseEnvelope::deserialize(serde_json::json!({
            "type": "response.failed",
            "response": {"id": "r1", "status": "failed", "error": {"code": "server_error", "message": "boom"}}
        }))
        .expect("envelope");
        let event = ResponseStreamEvent::lifecycle(LifecyclePhase::Failed, failed);
        assert!(event.is_terminal());
        assert_eq!(event.to_string(), "response.failed (response r1): boom");

        let created = ResponseEnvelope::deserialize(serde_json::json!({
            "type": "response.created",
            "response": {"id": "r2"}
        }))
        .expect("envelope");
        let event = ResponseStreamEvent::lifecycle(LifecyclePhase::Created, created);
        assert_eq!(event.to_string(), "response.created (response r2)");
    }

    #[test]
    fn equal_payloads_in_different_sub_variants_are_not_equal() {
        let progress = ToolCallProgressEvent {
            item_id: "ws_1".into(),
            output_index: 1,
            sequence_number: None,
        };
        let searching =
            ResponseStreamEvent::WebSearchCall(WebSearchCallEvent::Searching(progress.clone()));
        let completed =
            ResponseStreamEvent::WebSearchCall(WebSearchCallEvent::Completed(progress.clone()));
        let file_search =
            ResponseStreamEvent::FileSearchCall(FileSearchCallEvent::Searching(progress));
        assert_ne!(searching, completed);
        assert_ne!(searching, file_search);
    }
}
