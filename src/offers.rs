//! Flight offer pipeline for the agent inbox card
//!
//! Messages -> [`extract_offers`] -> [`group_offers`] -> [`label_group`] ->
//! [`present_groups`]. Every stage is a pure, synchronous transform.

mod error;
pub mod format;
mod grouper;
mod labeler;
mod parser;
mod presenter;
mod types;

#[cfg(test)]
mod proptests;

pub use error::{ExtractionError, SelectionError};
pub use grouper::{group_key, group_offers};
pub use labeler::{label_group, parse_cost, tier_rank, TierMode, TIER_ORDER, UNRANKED_TIER};
pub use parser::{
    decode_payload, extract_offers, is_offer_message, OfferExtraction, OpaquePayload,
    PayloadDecode, SEARCH_OFFERS_TOOL,
};
pub use presenter::{present_groups, ExpansionState, OfferCard, OfferGroupView, OfferSelectHandler};
pub use types::{LabeledOffer, Offer, OfferGroup};

use crate::message::ThreadMessage;

/// Run the parser and grouper over a transcript
pub fn offer_groups(messages: &[ThreadMessage]) -> (Vec<OfferGroup>, OfferExtraction) {
    let extraction = extract_offers(messages);
    let groups = group_offers(&extraction.offers);
    (groups, extraction)
}
