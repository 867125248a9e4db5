//! View records for the flight offers card

use super::error::SelectionError;
use super::format::{format_clock, format_day, short_place};
use super::labeler::{label_tiers, TierMode};
use super::types::{LabeledOffer, OfferGroup};
use serde::Serialize;
use std::collections::HashSet;
use ts_rs::TS;

/// Receives the id of the offer a user picked
pub trait OfferSelectHandler {
    fn on_select_offer(&mut self, offer_id: &str);
}

impl<F> OfferSelectHandler for F
where
    F: FnMut(&str),
{
    fn on_select_offer(&mut self, offer_id: &str) {
        self(offer_id);
    }
}

/// Which groups the user has expanded, by group key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    /// Flip a group between collapsed and expanded, returning the new state
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.expanded.remove(key) {
            false
        } else {
            self.expanded.insert(key.to_string());
            true
        }
    }

    pub fn mode_for(&self, key: &str) -> TierMode {
        if self.is_expanded(key) {
            TierMode::Expanded
        } else {
            TierMode::Collapsed
        }
    }
}

/// Display data for one offer card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OfferCard {
    pub offer_id: String,
    pub airline_name: String,
    /// `"{currency} {totalCost}"`
    pub price: String,
    pub origin: String,
    pub destination: String,
    pub departure_clock: String,
    pub departure_day: String,
    pub arrival_clock: String,
    pub arrival_day: String,
    pub duration: String,
    /// Short route, e.g. `NYC – LON`
    pub route: String,
    pub tier_label: String,
    #[ts(optional)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_code: Option<String>,
    #[ts(optional)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stops: Option<String>,
}

impl From<&LabeledOffer> for OfferCard {
    fn from(labeled: &LabeledOffer) -> Self {
        let offer = &labeled.offer;
        Self {
            offer_id: offer.offer_id.clone(),
            airline_name: offer.airline_name.clone(),
            price: format!("{} {}", offer.currency, offer.total_cost),
            origin: offer.origin.clone(),
            destination: offer.destination.clone(),
            departure_clock: format_clock(&offer.departure_time),
            departure_day: format_day(&offer.departure_time),
            arrival_clock: format_clock(&offer.arrival_time),
            arrival_day: format_day(&offer.arrival_time),
            duration: offer.duration.clone(),
            route: format!(
                "{} – {}",
                short_place(&offer.origin),
                short_place(&offer.destination)
            ),
            tier_label: labeled.tier_label.clone(),
            route_code: offer.route_code.clone(),
            stops: offer.stops.clone(),
        }
    }
}

/// One itinerary group as the card renders it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OfferGroupView {
    pub key: String,
    /// The group's first offer
    pub base: OfferCard,
    /// Drives the "show more" affordance
    pub has_more: bool,
    pub expanded: bool,
    /// Labeled offers for the current expansion state
    pub offers: Vec<OfferCard>,
}

impl OfferGroupView {
    /// Build the view of a group for the given expansion state
    pub fn new(group: &OfferGroup, expansion: &ExpansionState) -> Self {
        let mode = expansion.mode_for(group.key());
        let (labeled, base_index) = label_tiers(group);
        let cards: Vec<OfferCard> = labeled.iter().map(OfferCard::from).collect();
        let base = cards.get(base_index).cloned().unwrap_or_else(|| {
            OfferCard::from(&LabeledOffer {
                offer: group.base().clone(),
                tier_label: group.base().cabin_class.clone(),
            })
        });
        let offers = match mode {
            TierMode::Expanded => cards,
            TierMode::Collapsed => vec![base.clone()],
        };

        Self {
            key: group.key().to_string(),
            base,
            has_more: group.has_more(),
            expanded: mode == TierMode::Expanded,
            offers,
        }
    }

    /// Whether an offer id belongs to this group view
    pub fn contains(&self, offer_id: &str) -> bool {
        self.base.offer_id == offer_id || self.offers.iter().any(|card| card.offer_id == offer_id)
    }

    /// Forward a selection to the handler if the offer is part of this view
    pub fn select(
        &self,
        offer_id: &str,
        handler: &mut impl OfferSelectHandler,
    ) -> Result<(), SelectionError> {
        if !self.contains(offer_id) {
            tracing::warn!(offer_id, group = %self.key, "Ignoring selection of unknown offer");
            return Err(SelectionError::UnknownOffer {
                offer_id: offer_id.to_string(),
            });
        }
        handler.on_select_offer(offer_id);
        Ok(())
    }
}

/// Build views for every group in order
pub fn present_groups(groups: &[OfferGroup], expansion: &ExpansionState) -> Vec<OfferGroupView> {
    groups
        .iter()
        .map(|group| OfferGroupView::new(group, expansion))
        .collect()
}
