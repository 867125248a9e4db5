//! Synthetic responses for unanswered tool calls
//!
//! A run cannot resume while an `ai` message has tool calls with no tool
//! response after it. Before submitting, the client fills the gap with
//! placeholder responses that are never rendered.

use crate::message::{ThreadMessage, ToolCallRef};

/// Id prefix of messages the thread never renders
pub const DO_NOT_RENDER_ID_PREFIX: &str = "do-not-render-";

/// Content of a synthesized tool response
pub const SYNTHETIC_TOOL_RESPONSE: &str = "Successfully handled tool call.";

/// Whether a message is a hidden placeholder
pub fn is_hidden_message(message: &ThreadMessage) -> bool {
    message
        .id
        .as_deref()
        .is_some_and(|id| id.starts_with(DO_NOT_RENDER_ID_PREFIX))
}

fn synthetic_response(call: &ToolCallRef) -> ThreadMessage {
    ThreadMessage::tool(
        format!("{DO_NOT_RENDER_ID_PREFIX}{}", uuid::Uuid::new_v4()),
        call.name.clone(),
        call.id.clone().unwrap_or_default(),
        SYNTHETIC_TOOL_RESPONSE,
    )
}

/// Build tool responses for every `ai` message whose tool calls are not
/// immediately followed by a `tool` message.
pub fn ensure_tool_calls_have_responses(messages: &[ThreadMessage]) -> Vec<ThreadMessage> {
    let mut responses = Vec::new();

    for (index, message) in messages.iter().enumerate() {
        if !message.is_ai() || message.tool_calls.is_empty() {
            continue;
        }
        if messages.get(index + 1).is_some_and(ThreadMessage::is_tool) {
            continue;
        }
        tracing::debug!(
            message_id = message.id_str(),
            calls = message.tool_calls.len(),
            "Synthesizing responses for unanswered tool calls"
        );
        responses.extend(message.tool_calls.iter().map(synthetic_response));
    }

    responses
}
