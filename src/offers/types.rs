//! Offer data types

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use ts_rs::TS;

/// One priced flight itinerary as returned by the `search_offers` tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Offer {
    pub offer_id: String,
    /// Decimal amount as text; may carry formatting noise
    #[serde(default, deserialize_with = "lenient_text")]
    pub total_cost: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub currency: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub origin: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub destination: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub airline_name: String,
    pub departure_time: String,
    pub arrival_time: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub cabin_class: String,
    #[serde(
        default,
        deserialize_with = "lenient_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub route_code: Option<String>,
    /// Stop count or description; agents send both `0` and `"nonstop"`
    #[serde(
        default,
        deserialize_with = "lenient_optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub stops: Option<String>,
}

/// Accept strings, numbers and booleans as display text; `null` becomes empty.
///
/// Tool payloads are produced by an LLM agent, so `"totalCost": 120.5` shows
/// up next to `"totalCost": "120.50"`.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Like [`lenient_text`], but `null` stays absent
fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(Value::deserialize(deserializer)?))
}

fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Offer annotated with its derived cabin tier label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LabeledOffer {
    #[serde(flatten)]
    pub offer: Offer,
    pub tier_label: String,
}

/// Non-empty run of offers sharing airline, departure and arrival text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferGroup {
    key: String,
    offers: Vec<Offer>,
}

impl OfferGroup {
    pub(super) fn new(key: String, first: Offer) -> Self {
        Self {
            key,
            offers: vec![first],
        }
    }

    pub(super) fn push(&mut self, offer: Offer) {
        self.offers.push(offer);
    }

    /// Grouping key (`airline-departure-arrival`)
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Offers in first-seen order
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// The offer shown when the group is collapsed
    pub fn base(&self) -> &Offer {
        // Groups are created with one offer and only ever grow.
        &self.offers[0]
    }

    /// Whether the group has offers beyond the base one
    pub fn has_more(&self) -> bool {
        self.offers.len() > 1
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}
