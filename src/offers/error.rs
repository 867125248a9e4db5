//! Offer pipeline error types

use thiserror::Error;

/// Per-record failure while extracting offers. Never fatal: the record
/// contributes no offers and extraction continues with its siblings.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("search_offers message {index} (id {message_id:?}) has malformed content: {source}")]
    Decode {
        index: usize,
        message_id: Option<String>,
        #[source]
        source: serde_json::Error,
    },
}

impl ExtractionError {
    /// Position of the offending record in the input list
    pub fn index(&self) -> usize {
        match self {
            ExtractionError::Decode { index, .. } => *index,
        }
    }
}

/// Errors raised when forwarding an offer selection
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("offer {offer_id} is not part of this group")]
    UnknownOffer { offer_id: String },
}
