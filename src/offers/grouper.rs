//! Itinerary grouping
//!
//! Offers group on the exact text of airline, departure and arrival time.
//! Timestamps are compared as strings: `...T08:00:00Z` and
//! `...T08:00:00+00:00` are different groups.
//!
//! The key joins the three fields with `-` and groups on the joined text, so
//! fields that themselves contain `-` can collide: airline `Air-X` departing
//! `t1` and airline `Air` departing `X-t1` share a key and a group.

use super::types::{Offer, OfferGroup};
use std::collections::HashMap;

/// Grouping key for an offer
pub fn group_key(offer: &Offer) -> String {
    format!(
        "{}-{}-{}",
        offer.airline_name, offer.departure_time, offer.arrival_time
    )
}

/// Partition offers into groups, keeping first-seen order of groups and
/// of offers within each group.
pub fn group_offers(offers: &[Offer]) -> Vec<OfferGroup> {
    let mut groups: Vec<OfferGroup> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for offer in offers {
        let key = group_key(offer);
        if let Some(&position) = positions.get(&key) {
            groups[position].push(offer.clone());
        } else {
            positions.insert(key.clone(), groups.len());
            groups.push(OfferGroup::new(key, offer.clone()));
        }
    }

    groups
}
