//! Loading saved thread transcripts
//!
//! A transcript is either a bare JSON array of messages or a thread values
//! snapshot of the form `{"messages": [...]}`.

use crate::message::ThreadMessage;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("Failed to read transcript {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid transcript JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Thread values snapshot; fields other than `messages` are ignored
#[derive(Deserialize)]
struct ValuesSnapshot {
    messages: Vec<ThreadMessage>,
}

/// Parse transcript JSON into thread messages
pub fn parse_transcript(json: &str) -> Result<Vec<ThreadMessage>, TranscriptError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let messages = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        serde_json::from_value::<ValuesSnapshot>(value)?.messages
    };
    tracing::debug!(count = messages.len(), "Parsed transcript");
    Ok(messages)
}

/// Read and parse a transcript file
pub fn load_transcript(path: impl AsRef<Path>) -> Result<Vec<ThreadMessage>, TranscriptError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| TranscriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "Loading transcript");
    parse_transcript(&json)
}
