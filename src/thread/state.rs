//! Thread state types

use crate::agent::AgentProfile;
use crate::config::InboxConfig;
use crate::message::ThreadMessage;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Mutable thread state, replaced wholesale by each transition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThreadState {
    /// Transcript as displayed: streamed messages plus pending optimistic ones
    pub messages: Vec<ThreadMessage>,
    /// Ids of optimistic messages the stream has not echoed back yet
    pub pending_ids: HashSet<String>,
    /// A run is in flight
    pub is_loading: bool,
    /// The in-flight run has produced an `ai` message
    pub first_token_received: bool,
    /// Message count at the last observation, for first-token detection
    pub prev_message_count: usize,
    /// Last stream error reported to the user, to avoid repeat toasts
    pub last_error: Option<String>,
    pub thread_id: Option<String>,
    /// The graph is paused on an interrupt awaiting user input
    pub interrupt: bool,
    /// Context attached to the next run (artifact panel selection)
    pub artifact_context: Map<String, Value>,
}

impl ThreadState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A thread id is set or there is at least one message
    pub fn chat_started(&self) -> bool {
        self.thread_id.is_some() || !self.messages.is_empty()
    }

    /// No `ai` or `tool` message in the transcript
    pub fn has_no_ai_or_tool_messages(&self) -> bool {
        !self.messages.iter().any(|m| m.is_ai() || m.is_tool())
    }

    /// Record the current message count, flipping `first_token_received`
    /// when the count changed and the newest message is from the agent.
    pub(crate) fn observe_messages(&mut self) {
        let count = self.messages.len();
        if count != self.prev_message_count
            && self.messages.last().is_some_and(ThreadMessage::is_ai)
        {
            self.first_token_received = true;
        }
        self.prev_message_count = count;
    }
}

/// Per-thread configuration (immutable)
#[derive(Debug, Clone)]
pub struct ThreadContext {
    pub profile: AgentProfile,
    pub hide_tool_calls: bool,
}

impl ThreadContext {
    pub fn new(profile: AgentProfile, hide_tool_calls: bool) -> Self {
        Self {
            profile,
            hide_tool_calls,
        }
    }

    pub fn from_config(config: &InboxConfig) -> Self {
        Self::new(config.profile(), config.hide_tool_calls)
    }
}
