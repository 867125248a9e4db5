//! Property-based tests for thread state
//!
//! These tests verify key invariants hold across arbitrary transcripts and
//! event sequences.

use super::*;
use crate::agent::{profile_for, AgentKind};
use crate::message::{ThreadMessage, ToolCallRef};
use proptest::prelude::*;
use serde_json::json;
use std::collections::HashSet;

// ============================================================================
// Test Helpers
// ============================================================================

fn test_context() -> ThreadContext {
    ThreadContext::new(profile_for(AgentKind::FlightBooking), true)
}

fn call(id: &str) -> ToolCallRef {
    ToolCallRef {
        id: Some(id.to_string()),
        name: "search_offers".to_string(),
        args: json!({}),
    }
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

/// Messages with unique ids `m0..mN`; `ai` messages may carry tool calls
fn arb_transcript() -> impl Strategy<Value = Vec<ThreadMessage>> {
    prop::collection::vec((0u8..3, any::<bool>()), 0..12).prop_map(|kinds| {
        kinds
            .into_iter()
            .enumerate()
            .map(|(i, (kind, with_calls))| {
                let id = format!("m{i}");
                match kind {
                    0 => ThreadMessage::human(id, "question"),
                    1 if with_calls => ThreadMessage::ai(id, "").with_tool_calls(vec![call(&format!("c{i}"))]),
                    1 => ThreadMessage::ai(id, "answer"),
                    _ => ThreadMessage::tool(id, "search_offers", format!("c{i}"), "{}"),
                }
            })
            .collect()
    })
}

fn arb_error_message() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("timeout".to_string())),
        Just(Some("rate limited".to_string())),
    ]
}

// ============================================================================
// Merge Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Merging the same snapshot twice changes nothing
    #[test]
    fn prop_merge_idempotent(
        local in arb_transcript(),
        streamed in arb_transcript(),
        pending_mask in prop::collection::vec(any::<bool>(), 12),
    ) {
        let pending: HashSet<String> = local
            .iter()
            .zip(&pending_mask)
            .filter(|(_, keep)| **keep)
            .map(|(m, _)| m.id_str().to_string())
            .collect();

        let first = merge_transcript(&local, &pending, &streamed);
        let second = merge_transcript(&first.messages, &first.pending_ids, &streamed);
        prop_assert_eq!(first, second);
    }

    /// The streamed transcript is always a prefix of the merged one
    #[test]
    fn prop_stream_is_authoritative(
        local in arb_transcript(),
        streamed in arb_transcript(),
    ) {
        let pending: HashSet<String> = local.iter().map(|m| m.id_str().to_string()).collect();
        let outcome = merge_transcript(&local, &pending, &streamed);
        prop_assert_eq!(&outcome.messages[..streamed.len()], &streamed[..]);
        for id in &outcome.pending_ids {
            prop_assert!(!streamed.iter().any(|m| m.id_str() == id));
        }
    }
}

// ============================================================================
// Synthetic Tool Response Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// One hidden response per call of each `ai` message not followed by a tool message
    #[test]
    fn prop_responses_only_for_unanswered_calls(messages in arb_transcript()) {
        let expected: Vec<String> = messages
            .iter()
            .enumerate()
            .filter(|(i, m)| {
                m.is_ai()
                    && !m.tool_calls.is_empty()
                    && !messages.get(i + 1).is_some_and(ThreadMessage::is_tool)
            })
            .flat_map(|(_, m)| m.tool_calls.iter().filter_map(|c| c.id.clone()))
            .collect();

        let responses = ensure_tool_calls_have_responses(&messages);
        let answered: Vec<String> = responses
            .iter()
            .filter_map(|m| m.tool_call_id.clone())
            .collect();

        prop_assert_eq!(answered, expected);
        prop_assert!(responses.iter().all(is_hidden_message));
    }
}

// ============================================================================
// Transition Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Whitespace-only input never reaches the server
    #[test]
    fn prop_blank_submit_rejected(text in "[ \t\n]{0,10}") {
        let result = transition(&ThreadState::new(), &test_context(), ThreadEvent::Submit { text });
        prop_assert!(matches!(result, Err(TransitionError::EmptyMessage)));
    }

    /// A run of identical errors produces exactly one toast
    #[test]
    fn prop_repeated_error_toasts_once(
        errors in prop::collection::vec(arb_error_message(), 1..20),
    ) {
        let mut state = ThreadState::new();
        let mut toasts = 0;
        let mut expected = 0;
        let mut previous: Option<String> = None;

        for error in errors {
            if let Some(message) = &error {
                if previous.as_ref() != Some(message) {
                    expected += 1;
                }
            }
            previous.clone_from(&error);

            let result = transition(&state, &test_context(), ThreadEvent::StreamError { message: error })
                .expect("stream errors never fail");
            toasts += result
                .effects
                .iter()
                .filter(|e| matches!(e, Effect::ShowErrorToast { .. }))
                .count();
            state = result.new_state;
        }

        prop_assert_eq!(toasts, expected);
    }

    /// A submitted message stays visible until the stream confirms it
    #[test]
    fn prop_optimistic_message_survives_stream(streamed in arb_transcript()) {
        let submitted = transition(
            &ThreadState::new(),
            &test_context(),
            ThreadEvent::Submit { text: "hello".to_string() },
        )
        .expect("submit on idle thread");
        let human_id = submitted.new_state.messages[0].id_str().to_string();

        let after = transition(
            &submitted.new_state,
            &test_context(),
            ThreadEvent::StreamValues { messages: streamed },
        )
        .expect("stream values never fail")
        .new_state;

        prop_assert!(after.messages.iter().any(|m| m.id_str() == human_id));
        prop_assert!(after.pending_ids.contains(&human_id));
    }
}
