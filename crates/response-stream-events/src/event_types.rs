//! Wire `type` strings for every Responses API streaming event.
//!
//! One constant per discriminator. The decoder, the fallback enum and the
//! tests all refer to these instead of repeating string literals.

// Response lifecycle

pub const RESPONSE_CREATED: &str = "response.created";
pub const RESPONSE_IN_PROGRESS: &str = "response.in_progress";
pub const RESPONSE_COMPLETED: &str = "response.completed";
pub const RESPONSE_FAILED: &str = "response.failed";
pub const RESPONSE_INCOMPLETE: &str = "response.incomplete";
pub const RESPONSE_QUEUED: &str = "response.queued";

// Output items

pub const OUTPUT_ITEM_ADDED: &str = "response.output_item.added";
pub const OUTPUT_ITEM_DONE: &str = "response.output_item.done";

// Content parts and text

pub const CONTENT_PART_ADDED: &str = "response.content_part.added";
pub const CONTENT_PART_DONE: &str = "response.content_part.done";
pub const OUTPUT_TEXT_DELTA: &str = "response.output_text.delta";
pub const OUTPUT_TEXT_DONE: &str = "response.output_text.done";
pub const OUTPUT_TEXT_ANNOTATION_ADDED: &str = "response.output_text.annotation.added";
pub const REFUSAL_DELTA: &str = "response.refusal.delta";
pub const REFUSAL_DONE: &str = "response.refusal.done";

// Audio

pub const AUDIO_DELTA: &str = "response.audio.delta";
pub const AUDIO_DONE: &str = "response.audio.done";
pub const AUDIO_TRANSCRIPT_DELTA: &str = "response.audio.transcript.delta";
pub const AUDIO_TRANSCRIPT_DONE: &str = "response.audio.transcript.done";

// Function and custom tool calls

pub const FUNCTION_CALL_ARGUMENTS_DELTA: &str = "response.function_call_arguments.delta";
pub const FUNCTION_CALL_ARGUMENTS_DONE: &str = "response.function_call_arguments.done";
pub const CUSTOM_TOOL_CALL_INPUT_DELTA: &str = "response.custom_tool_call_input.delta";
pub const CUSTOM_TOOL_CALL_INPUT_DONE: &str = "response.custom_tool_call_input.done";

// Hosted tools

pub const FILE_SEARCH_CALL_IN_PROGRESS: &str = "response.file_search_call.in_progress";
pub const FILE_SEARCH_CALL_SEARCHING: &str = "response.file_search_call.searching";
pub const FILE_SEARCH_CALL_COMPLETED: &str = "response.file_search_call.completed";

pub const WEB_SEARCH_CALL_IN_PROGRESS: &str = "response.web_search_call.in_progress";
pub const WEB_SEARCH_CALL_SEARCHING: &str = "response.web_search_call.searching";
pub const WEB_SEARCH_CALL_COMPLETED: &str = "response.web_search_call.completed";

pub const IMAGE_GENERATION_CALL_COMPLETED: &str = "response.image_generation_call.completed";
pub const IMAGE_GENERATION_CALL_GENERATING: &str = "response.image_generation_call.generating";
pub const IMAGE_GENERATION_CALL_IN_PROGRESS: &str = "response.image_generation_call.in_progress";
pub const IMAGE_GENERATION_CALL_PARTIAL_IMAGE: &str =
    "response.image_generation_call.partial_image";

pub const CODE_INTERPRETER_CALL_CODE_DELTA: &str = "response.code_interpreter_call_code.delta";
pub const CODE_INTERPRETER_CALL_CODE_DONE: &str = "response.code_interpreter_call_code.done";
pub const CODE_INTERPRETER_CALL_COMPLETED: &str = "response.code_interpreter_call.completed";
pub const CODE_INTERPRETER_CALL_IN_PROGRESS: &str = "response.code_interpreter_call.in_progress";
pub const CODE_INTERPRETER_CALL_INTERPRETING: &str = "response.code_interpreter_call.interpreting";

// MCP

pub const MCP_CALL_ARGUMENTS_DELTA: &str = "response.mcp_call_arguments.delta";
pub const MCP_CALL_ARGUMENTS_DONE: &str = "response.mcp_call_arguments.done";
pub const MCP_CALL_COMPLETED: &str = "response.mcp_call.completed";
pub const MCP_CALL_FAILED: &str = "response.mcp_call.failed";
pub const MCP_CALL_IN_PROGRESS: &str = "response.mcp_call.in_progress";
pub const MCP_LIST_TOOLS_COMPLETED: &str = "response.mcp_list_tools.completed";
pub const MCP_LIST_TOOLS_FAILED: &str = "response.mcp_list_tools.failed";
pub const MCP_LIST_TOOLS_IN_PROGRESS: &str = "response.mcp_list_tools.in_progress";

// Reasoning

pub const REASONING_TEXT_DELTA: &str = "response.reasoning_text.delta";
pub const REASONING_TEXT_DONE: &str = "response.reasoning_text.done";
pub const REASONING_SUMMARY_PART_ADDED: &str = "response.reasoning_summary_part.added";
pub const REASONING_SUMMARY_PART_DONE: &str = "response.reasoning_summary_part.done";
pub const REASONING_SUMMARY_TEXT_DELTA: &str = "response.reasoning_summary_text.delta";
pub const REASONING_SUMMARY_TEXT_DONE: &str = "response.reasoning_summary_text.done";
/// Older summary stream; still emitted by some deployments.
pub const REASONING_SUMMARY_DELTA: &str = "response.reasoning_summary.delta";
pub const REASONING_SUMMARY_DONE: &str = "response.reasoning_summary.done";

// Errors

pub const ERROR: &str = "error";
