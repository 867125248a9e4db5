//! Derived view of a thread for the presentation layer

use super::state::{ThreadContext, ThreadState};
use super::tool_responses::is_hidden_message;
use crate::agent::{PromptButton, DEFAULT_ICON};
use crate::message::ThreadMessage;
use crate::offers::{self, ExpansionState, OfferGroupView, OpaquePayload};
use serde::Serialize;

/// Composer placeholder when the user can type
pub const INPUT_PLACEHOLDER_READY: &str = "Type your message...";
/// Composer placeholder while the agent is answering
pub const INPUT_PLACEHOLDER_BUSY: &str = "Please wait for the response...";

/// Landing heading shown before the chat starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub title: String,
    pub description: String,
}

/// Everything the thread screen needs to render one frame
#[allow(clippy::struct_excessive_bools)] // UI flags
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreadView {
    pub chat_started: bool,
    /// Shown in the header once the chat starts
    pub head_heading: String,
    pub icon: String,
    /// Shown only before the chat starts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<Heading>,
    /// Quick-start prompts, empty once the chat starts
    pub prompt_buttons: Vec<PromptButton>,
    pub messages: Vec<ThreadMessage>,
    pub offer_groups: Vec<OfferGroupView>,
    /// `search_offers` payloads without offers, for raw display
    pub offer_fallbacks: Vec<OpaquePayload>,
    /// Agent is working and has not produced output yet
    pub show_loading: bool,
    /// An interrupt is pending with no agent message to attach it to
    pub show_interrupt_placeholder: bool,
    pub input_placeholder: String,
    pub input_disabled: bool,
    pub can_stop: bool,
    pub can_reset: bool,
}

impl ThreadView {
    pub fn build(state: &ThreadState, context: &ThreadContext, expansion: &ExpansionState) -> Self {
        let profile = &context.profile;
        let chat_started = state.chat_started();

        let messages = state
            .messages
            .iter()
            .filter(|m| !is_hidden_message(m))
            .filter(|m| !(context.hide_tool_calls && m.is_tool()))
            .cloned()
            .collect();

        let (groups, extraction) = offers::offer_groups(&state.messages);

        let input_placeholder = if state.messages.is_empty() || state.interrupt {
            INPUT_PLACEHOLDER_READY
        } else {
            INPUT_PLACEHOLDER_BUSY
        };

        let icon = if profile.icon.is_empty() {
            DEFAULT_ICON.to_string()
        } else {
            profile.icon.clone()
        };

        Self {
            chat_started,
            head_heading: profile.head_heading.clone(),
            icon,
            heading: (!chat_started).then(|| Heading {
                title: profile.title.clone(),
                description: profile.description.clone(),
            }),
            prompt_buttons: if chat_started {
                vec![]
            } else {
                profile.prompt_buttons.clone()
            },
            messages,
            offer_groups: offers::present_groups(&groups, expansion),
            offer_fallbacks: extraction.fallbacks,
            show_loading: state.is_loading && !state.first_token_received,
            show_interrupt_placeholder: state.has_no_ai_or_tool_messages() && state.interrupt,
            input_placeholder: input_placeholder.to_string(),
            input_disabled: state.is_loading,
            can_stop: state.is_loading,
            can_reset: !state.is_loading && !state.messages.is_empty(),
        }
    }

    /// Whether the send button is enabled for the given composer text
    pub fn can_send(&self, input: &str) -> bool {
        !self.input_disabled && !input.trim().is_empty()
    }
}
