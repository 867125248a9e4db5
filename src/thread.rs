//! Chat thread state
//!
//! Pure transitions in the Elm style: the transport and the presentation
//! layer feed [`ThreadEvent`]s in, execute the returned [`Effect`]s, and read
//! the derived [`ThreadView`].

mod effect;
pub mod event;
pub mod merge;
pub mod state;
pub mod tool_responses;
pub(crate) mod transition;
mod view;

#[cfg(test)]
mod proptests;

pub use effect::{Effect, RunInput, STREAM_MODE_VALUES};
pub use event::ThreadEvent;
pub use merge::{merge_transcript, MergeOutcome};
pub use state::{ThreadContext, ThreadState};
pub use tool_responses::{
    ensure_tool_calls_have_responses, is_hidden_message, DO_NOT_RENDER_ID_PREFIX,
    SYNTHETIC_TOOL_RESPONSE,
};
pub use transition::{transition, TransitionError, TransitionResult};
pub use view::{ThreadView, INPUT_PLACEHOLDER_BUSY, INPUT_PLACEHOLDER_READY};
