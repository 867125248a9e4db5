//! Effects produced by thread transitions

use crate::message::ThreadMessage;
use serde::Serialize;
use serde_json::{Map, Value};

/// Stream mode requested for every run
pub const STREAM_MODE_VALUES: &str = "values";

/// Title of the toast shown for stream errors
pub const ERROR_TOAST_TITLE: &str = "An error occurred. Please try again.";

/// Input payload of a run submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunInput {
    pub messages: Vec<ThreadMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Map<String, Value>>,
}

/// Effects to be executed after a state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Start a run with new input
    SubmitRun {
        input: RunInput,
        stream_mode: &'static str,
    },
    /// Re-run from a checkpoint without new input
    SubmitRegenerate {
        checkpoint: Option<Value>,
        stream_mode: &'static str,
    },
    /// Cancel the in-flight run
    StopRun,
    /// Clear the composer
    ClearInput,
    /// Show an error toast
    ShowErrorToast { title: String, detail: String },
    /// Update the thread id the client is bound to
    SetThreadId(Option<String>),
    CloseArtifact,
    ResetArtifactContext,
}

impl Effect {
    pub fn submit_run(messages: Vec<ThreadMessage>, context: Option<Map<String, Value>>) -> Self {
        Effect::SubmitRun {
            input: RunInput { messages, context },
            stream_mode: STREAM_MODE_VALUES,
        }
    }

    pub fn regenerate(checkpoint: Option<Value>) -> Self {
        Effect::SubmitRegenerate {
            checkpoint,
            stream_mode: STREAM_MODE_VALUES,
        }
    }

    pub fn error_toast(detail: impl Into<String>) -> Self {
        Effect::ShowErrorToast {
            title: ERROR_TOAST_TITLE.to_string(),
            detail: detail.into(),
        }
    }
}
