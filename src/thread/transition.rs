//! Pure thread transition function

use super::effect::Effect;
use super::event::ThreadEvent;
use super::merge::merge_transcript;
use super::state::{ThreadContext, ThreadState};
use super::tool_responses::ensure_tool_calls_have_responses;
use crate::message::ThreadMessage;
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: ThreadState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: ThreadState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Effect>) -> Self {
        self.effects.extend(effects);
        self
    }
}

/// Errors that can occur during transition
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Message is empty")]
    EmptyMessage,
    #[error("Agent is busy, cannot accept message (stop the current run first)")]
    AgentBusy,
}

/// Pure transition function
///
/// Given the same inputs it produces the same state and effects, apart from
/// the fresh ids minted for new messages.
pub fn transition(
    state: &ThreadState,
    _context: &ThreadContext,
    event: ThreadEvent,
) -> Result<TransitionResult, TransitionError> {
    match event {
        ThreadEvent::Submit { text } => submit(state, &text),

        ThreadEvent::StreamValues { messages } => {
            let outcome = merge_transcript(&state.messages, &state.pending_ids, &messages);
            let mut new_state = state.clone();
            new_state.messages = outcome.messages;
            new_state.pending_ids = outcome.pending_ids;
            new_state.observe_messages();
            Ok(TransitionResult::new(new_state))
        }

        ThreadEvent::StreamFinished => {
            let mut new_state = state.clone();
            new_state.is_loading = false;
            new_state.pending_ids.clear();
            Ok(TransitionResult::new(new_state))
        }

        ThreadEvent::StreamError { message: None } => {
            let mut new_state = state.clone();
            new_state.last_error = None;
            Ok(TransitionResult::new(new_state))
        }

        ThreadEvent::StreamError {
            message: Some(message),
        } => {
            if message.is_empty() || state.last_error.as_deref() == Some(message.as_str()) {
                tracing::debug!(error = %message, "Stream error already reported");
                return Ok(TransitionResult::new(state.clone()));
            }
            tracing::warn!(error = %message, "Stream reported an error");
            let mut new_state = state.clone();
            new_state.last_error = Some(message.clone());
            Ok(TransitionResult::new(new_state).with_effect(Effect::error_toast(message)))
        }

        ThreadEvent::Regenerate { checkpoint } => {
            let mut new_state = state.clone();
            // The regenerated answer replaces the last message, so the count
            // it produces must still register as a change.
            new_state.prev_message_count = new_state.prev_message_count.saturating_sub(1);
            new_state.first_token_received = false;
            new_state.is_loading = true;
            Ok(TransitionResult::new(new_state).with_effect(Effect::regenerate(checkpoint)))
        }

        ThreadEvent::Stop => {
            if !state.is_loading {
                return Ok(TransitionResult::new(state.clone()));
            }
            Ok(TransitionResult::new(state.clone()).with_effect(Effect::StopRun))
        }

        ThreadEvent::NewThread => {
            let new_state = ThreadState {
                last_error: state.last_error.clone(),
                ..ThreadState::default()
            };
            Ok(TransitionResult::new(new_state).with_effects(rebind_effects(None)))
        }

        ThreadEvent::SelectThread { thread_id } => {
            let new_state = ThreadState {
                thread_id: Some(thread_id.clone()),
                last_error: state.last_error.clone(),
                ..ThreadState::default()
            };
            Ok(TransitionResult::new(new_state).with_effects(rebind_effects(Some(thread_id))))
        }

        ThreadEvent::ArtifactContext { context } => {
            let mut new_state = state.clone();
            new_state.artifact_context = context;
            Ok(TransitionResult::new(new_state))
        }

        ThreadEvent::Interrupt { active } => {
            let mut new_state = state.clone();
            new_state.interrupt = active;
            Ok(TransitionResult::new(new_state))
        }
    }
}

fn submit(state: &ThreadState, text: &str) -> Result<TransitionResult, TransitionError> {
    if text.trim().is_empty() {
        return Err(TransitionError::EmptyMessage);
    }
    if state.is_loading {
        return Err(TransitionError::AgentBusy);
    }

    let human = ThreadMessage::human(uuid::Uuid::new_v4().to_string(), text);
    let mut outgoing = ensure_tool_calls_have_responses(&state.messages);
    outgoing.push(human);

    let context = if state.artifact_context.is_empty() {
        None
    } else {
        Some(state.artifact_context.clone())
    };

    let mut new_state = state.clone();
    new_state
        .pending_ids
        .extend(outgoing.iter().filter_map(|m| m.id.clone()));
    new_state.messages.extend(outgoing.iter().cloned());
    new_state.is_loading = true;
    new_state.first_token_received = false;
    new_state.observe_messages();

    tracing::debug!(
        outgoing = outgoing.len(),
        has_context = context.is_some(),
        "Submitting message"
    );

    Ok(TransitionResult::new(new_state)
        .with_effect(Effect::submit_run(outgoing, context))
        .with_effect(Effect::ClearInput))
}

/// Effects for switching the client to another (or no) thread
fn rebind_effects(thread_id: Option<String>) -> [Effect; 3] {
    [
        Effect::SetThreadId(thread_id),
        Effect::CloseArtifact,
        Effect::ResetArtifactContext,
    ]
}
