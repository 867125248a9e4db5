//! Offer extraction from `search_offers` tool messages
//!
//! Tool content is LLM-produced JSON, so decoding goes through a typed
//! boundary ([`decode_payload`]) instead of probing loose values at every
//! use site.

use super::error::ExtractionError;
use super::types::Offer;
use crate::message::{MessageType, ThreadMessage};
use serde::Serialize;
use serde_json::Value;

/// Tool name whose responses carry flight offers
pub const SEARCH_OFFERS_TOOL: &str = "search_offers";

/// Fields an element must carry (as strings) to count as an offer
const OFFER_IDENTITY_FIELDS: &[&str] = &["offerId", "departureTime", "arrivalTime"];

/// Outcome of decoding one tool payload
#[derive(Debug)]
pub enum PayloadDecode {
    /// `offers` array of offer-like records (possibly empty)
    Offers(Vec<Offer>),
    /// Valid JSON without a usable `offers` array
    Opaque(Value),
    /// Not valid JSON
    Malformed(serde_json::Error),
}

/// Decoded payload that did not contain offers, kept for fallback display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpaquePayload {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    pub payload: Value,
}

/// Result of scanning a transcript for offers
#[derive(Debug, Default)]
pub struct OfferExtraction {
    /// Offers in transcript order
    pub offers: Vec<Offer>,
    /// Payloads that decoded but held no offers
    pub fallbacks: Vec<OpaquePayload>,
    /// Records whose content could not be decoded
    pub errors: Vec<ExtractionError>,
}

impl OfferExtraction {
    /// No offers were found; fallbacks and errors may still be present
    pub fn has_no_offers(&self) -> bool {
        self.offers.is_empty()
    }
}

/// Check whether a message is a `search_offers` tool response
pub fn is_offer_message(message: &ThreadMessage) -> bool {
    message.message_type == MessageType::Tool
        && message.name.as_deref() == Some(SEARCH_OFFERS_TOOL)
}

/// Decode a tool payload into offers, an opaque value, or a decode failure
pub fn decode_payload(content: &str) -> PayloadDecode {
    let value: Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(e) => return PayloadDecode::Malformed(e),
    };

    let Some(elements) = value.get("offers").and_then(Value::as_array) else {
        return PayloadDecode::Opaque(value);
    };

    let mut offers = Vec::with_capacity(elements.len());
    for (position, element) in elements.iter().enumerate() {
        if !resembles_offer(element) {
            tracing::debug!(position, "Skipping offers element without offer identity fields");
            continue;
        }
        match serde_json::from_value::<Offer>(element.clone()) {
            Ok(offer) => offers.push(offer),
            Err(e) => {
                tracing::debug!(position, error = %e, "Skipping offers element that failed to decode");
            }
        }
    }

    if offers.is_empty() && !elements.is_empty() {
        return PayloadDecode::Opaque(value);
    }

    PayloadDecode::Offers(offers)
}

fn resembles_offer(element: &Value) -> bool {
    OFFER_IDENTITY_FIELDS
        .iter()
        .all(|field| element.get(field).is_some_and(Value::is_string))
}

/// Collect every offer from `search_offers` tool messages.
///
/// Malformed records are reported in [`OfferExtraction::errors`] and never
/// stop the scan.
pub fn extract_offers(messages: &[ThreadMessage]) -> OfferExtraction {
    let mut extraction = OfferExtraction::default();

    for (index, message) in messages.iter().enumerate() {
        if !is_offer_message(message) {
            continue;
        }

        match decode_payload(&message.text()) {
            PayloadDecode::Offers(offers) => {
                tracing::debug!(index, count = offers.len(), "Extracted offers");
                extraction.offers.extend(offers);
            }
            PayloadDecode::Opaque(payload) => {
                tracing::info!(
                    index,
                    message_id = message.id_str(),
                    "search_offers payload has no offers, using fallback display"
                );
                extraction.fallbacks.push(OpaquePayload {
                    index,
                    message_id: message.id.clone(),
                    payload,
                });
            }
            PayloadDecode::Malformed(source) => {
                tracing::warn!(
                    index,
                    message_id = message.id_str(),
                    error = %source,
                    "Failed to parse search_offers content"
                );
                extraction.errors.push(ExtractionError::Decode {
                    index,
                    message_id: message.id.clone(),
                    source,
                });
            }
        }
    }

    extraction
}
