//! Cabin tier labeling within an itinerary group
//!
//! Economy offers are ranked by price and named Value/Classic/Flex; other
//! cabins get a fixed label. The final order comes from [`TIER_ORDER`], where
//! labels missing from the table rank *before* the first entry. That puts
//! fourth-and-later economy fares and unknown cabins at the front of an
//! expanded group, which is very likely unintended upstream; it is kept
//! as-is so cards line up with what users already see.

use super::types::{LabeledOffer, Offer, OfferGroup};

/// Display order of known tier labels
pub const TIER_ORDER: [&str; 5] = [
    "Economy Value",
    "Economy Classic",
    "Economy Flex",
    "Premium Economy",
    "Business",
];

/// Rank of a label that is not in [`TIER_ORDER`]
pub const UNRANKED_TIER: i32 = -1;

const ECONOMY_RANK_LABELS: [&str; 3] = ["Economy Value", "Economy Classic", "Economy Flex"];
const ECONOMY_LABEL: &str = "Economy";
const PREMIUM_ECONOMY_LABEL: &str = "Premium Economy";
const BUSINESS_LABEL: &str = "Business";

/// Which offers of a group to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TierMode {
    /// Only the group's first offer
    #[default]
    Collapsed,
    /// Every offer, in tier order
    Expanded,
}

/// Position of a label in [`TIER_ORDER`], or [`UNRANKED_TIER`]
pub fn tier_rank(label: &str) -> i32 {
    TIER_ORDER
        .iter()
        .position(|known| *known == label)
        .and_then(|index| i32::try_from(index).ok())
        .unwrap_or(UNRANKED_TIER)
}

/// Parse a cost the way `parseFloat` does: skip leading whitespace, take the
/// longest numeric prefix (including a signed `Infinity`), NaN when there is
/// none.
pub fn parse_cost(raw: &str) -> f64 {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if bytes.get(end..).is_some_and(|rest| rest.starts_with(b"Infinity")) {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text.get(..end)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

fn economy_label(rank: usize) -> &'static str {
    ECONOMY_RANK_LABELS.get(rank).copied().unwrap_or(ECONOMY_LABEL)
}

/// Label every offer of a group and order them by tier
fn label_all(offers: &[Offer]) -> Vec<(usize, LabeledOffer)> {
    let mut economy: Vec<(usize, &Offer)> = Vec::new();
    let mut premium: Vec<(usize, &Offer)> = Vec::new();
    let mut business: Vec<(usize, &Offer)> = Vec::new();
    let mut other: Vec<(usize, &Offer)> = Vec::new();

    for (position, offer) in offers.iter().enumerate() {
        match offer.cabin_class.to_lowercase().as_str() {
            "economy" => economy.push((position, offer)),
            "premium_economy" => premium.push((position, offer)),
            "business" => business.push((position, offer)),
            _ => other.push((position, offer)),
        }
    }

    // NaN costs sort after every number; total_cmp keeps the order total.
    economy.sort_by(|(_, a), (_, b)| parse_cost(&a.total_cost).total_cmp(&parse_cost(&b.total_cost)));

    let labeled = |(position, offer): (usize, &Offer), label: &str| {
        (
            position,
            LabeledOffer {
                offer: offer.clone(),
                tier_label: label.to_string(),
            },
        )
    };

    let mut all: Vec<(usize, LabeledOffer)> = Vec::with_capacity(offers.len());
    all.extend(
        economy
            .into_iter()
            .enumerate()
            .map(|(rank, entry)| labeled(entry, economy_label(rank))),
    );
    all.extend(premium.into_iter().map(|entry| labeled(entry, PREMIUM_ECONOMY_LABEL)));
    all.extend(business.into_iter().map(|entry| labeled(entry, BUSINESS_LABEL)));
    all.extend(other.into_iter().map(|entry| {
        let label = entry.1.cabin_class.clone();
        labeled(entry, &label)
    }));

    all.sort_by_key(|(_, labeled)| tier_rank(&labeled.tier_label));
    all
}

/// All of a group's offers in tier order, plus the index of the group's
/// base (first-seen) offer within that order
pub(super) fn label_tiers(group: &OfferGroup) -> (Vec<LabeledOffer>, usize) {
    let all = label_all(group.offers());
    let base_index = all.iter().position(|(position, _)| *position == 0).unwrap_or(0);
    (all.into_iter().map(|(_, labeled)| labeled).collect(), base_index)
}

/// Label a group's offers.
///
/// `Collapsed` yields the group's first offer with the label it gets in the
/// expanded ordering; `Expanded` yields all offers in tier order.
pub fn label_group(group: &OfferGroup, mode: TierMode) -> Vec<LabeledOffer> {
    let (labeled, base_index) = label_tiers(group);
    match mode {
        TierMode::Expanded => labeled,
        TierMode::Collapsed => labeled.into_iter().nth(base_index).into_iter().collect(),
    }
}
