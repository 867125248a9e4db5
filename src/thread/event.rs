//! Events that can occur in a thread

use crate::message::ThreadMessage;
use serde_json::{Map, Value};

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum ThreadEvent {
    // User events
    Submit {
        text: String,
    },
    Regenerate {
        /// Parent checkpoint to branch from; `None` re-runs from the head
        checkpoint: Option<Value>,
    },
    Stop,
    NewThread,
    SelectThread {
        thread_id: String,
    },
    ArtifactContext {
        context: Map<String, Value>,
    },

    // Stream events
    StreamValues {
        messages: Vec<ThreadMessage>,
    },
    StreamFinished,
    /// `None` when the stream reports no error
    StreamError {
        message: Option<String>,
    },
    Interrupt {
        active: bool,
    },
}
