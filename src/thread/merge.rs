//! Merging optimistic local messages with the streamed transcript
//!
//! The stream is authoritative. Optimistic messages survive a stream update
//! only while their ids are pending and absent from the stream; once echoed
//! back they are confirmed and the streamed copy wins.

use crate::message::ThreadMessage;
use std::collections::HashSet;

/// Result of merging a stream snapshot into local state
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub messages: Vec<ThreadMessage>,
    /// Pending ids still missing from the stream
    pub pending_ids: HashSet<String>,
}

/// Merge a streamed transcript with local state.
///
/// Idempotent: merging the same snapshot into the outcome again yields the
/// same outcome.
pub fn merge_transcript(
    local: &[ThreadMessage],
    pending_ids: &HashSet<String>,
    streamed: &[ThreadMessage],
) -> MergeOutcome {
    let streamed_ids: HashSet<&str> = streamed.iter().filter_map(|m| m.id.as_deref()).collect();

    let still_pending: HashSet<String> = pending_ids
        .iter()
        .filter(|id| !streamed_ids.contains(id.as_str()))
        .cloned()
        .collect();

    let mut messages = streamed.to_vec();
    messages.extend(
        local
            .iter()
            .filter(|m| m.id.as_deref().is_some_and(|id| still_pending.contains(id)))
            .cloned(),
    );

    MergeOutcome {
        messages,
        pending_ids: still_pending,
    }
}
