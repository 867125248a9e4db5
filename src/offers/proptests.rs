//! Property-based tests for the offer pipeline
//!
//! These tests verify that extraction, grouping and labeling preserve:
//! - Provenance: every extracted offer came from a `search_offers` payload
//! - Partition: grouping covers every offer exactly once
//! - Key equality: offers share a group iff airline/departure/arrival match
//! - Economy ranking: the three cheapest fares get Value/Classic/Flex
//! - Idempotence: labeling the same group twice gives the same order

#![allow(clippy::redundant_closure_for_method_calls)]

use super::*;
use crate::message::ThreadMessage;
use proptest::prelude::*;
use serde_json::json;
use std::collections::HashMap;

// ============================================================================
// Strategies
// ============================================================================

fn arb_cabin() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => Just("economy".to_string()),
        1 => Just("ECONOMY".to_string()),
        2 => Just("premium_economy".to_string()),
        2 => Just("business".to_string()),
        1 => Just("first".to_string()),
    ]
}

fn arb_cost() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => (1u32..5000, 0u32..100).prop_map(|(whole, cents)| format!("{whole}.{cents:02}")),
        1 => Just("n/a".to_string()),
    ]
}

/// Optional display text; digit-only values go on the wire as JSON numbers
fn arb_optional_text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        2 => Just(None),
        2 => (0u8..3).prop_map(|n| Some(n.to_string())),
        1 => Just(Some("nonstop".to_string())),
        1 => Just(Some("JFK-LHR".to_string())),
    ]
}

/// Small key space so groups actually collide
fn arb_offer(id: usize) -> impl Strategy<Value = Offer> {
    (
        prop_oneof![Just("BA"), Just("AA"), Just("ba")],
        prop_oneof![Just("2025-06-01T08:00:00"), Just("2025-06-01T08:00:00Z")],
        prop_oneof![Just("2025-06-01T20:00:00"), Just("2025-06-01T21:00:00")],
        arb_cost(),
        arb_cabin(),
        (arb_optional_text(), arb_optional_text()),
    )
        .prop_map(move |(airline, departure, arrival, total_cost, cabin_class, (route_code, stops))| Offer {
            offer_id: format!("off_{id}"),
            total_cost,
            currency: "USD".to_string(),
            origin: "NYC John F. Kennedy".to_string(),
            destination: "LON Heathrow".to_string(),
            airline_name: airline.to_string(),
            departure_time: departure.to_string(),
            arrival_time: arrival.to_string(),
            duration: "7h".to_string(),
            cabin_class,
            route_code,
            stops,
        })
}

fn arb_offers(max: usize) -> impl Strategy<Value = Vec<Offer>> {
    (0..=max).prop_flat_map(|len| (0..len).map(arb_offer).collect::<Vec<_>>())
}

/// A transcript record: offers payload, malformed payload, or unrelated message
#[derive(Debug, Clone)]
enum Record {
    Offers(Vec<Offer>),
    Malformed(String),
    Unrelated(String),
}

fn arb_record() -> impl Strategy<Value = Record> {
    prop_oneof![
        3 => arb_offers(4).prop_map(Record::Offers),
        1 => "[a-z{ ]{0,12}".prop_map(Record::Malformed),
        1 => "[a-zA-Z ]{0,20}".prop_map(Record::Unrelated),
    ]
}

/// Offer JSON as an agent writes it: numeric-looking optional fields as numbers
fn offer_wire_json(offer: &Offer) -> serde_json::Value {
    let mut value = json!(offer);
    for field in ["routeCode", "stops"] {
        let number = value
            .get(field)
            .and_then(|v| v.as_str())
            .and_then(|text| text.parse::<u64>().ok());
        if let Some(number) = number {
            value[field] = json!(number);
        }
    }
    value
}

fn to_message(index: usize, record: &Record) -> ThreadMessage {
    let id = format!("msg_{index}");
    match record {
        Record::Offers(offers) => {
            let wire: Vec<_> = offers.iter().map(offer_wire_json).collect();
            let content = json!({ "offers": wire }).to_string();
            ThreadMessage::tool(id, SEARCH_OFFERS_TOOL, "call", content)
        }
        Record::Malformed(text) => {
            ThreadMessage::tool(id, SEARCH_OFFERS_TOOL, "call", format!("{{{text}"))
        }
        Record::Unrelated(text) => ThreadMessage::ai(id, text.clone()),
    }
}

fn economy_group() -> impl Strategy<Value = OfferGroup> {
    proptest::collection::vec((1u32..10_000).prop_map(|c| c.to_string()), 3..8).prop_map(|costs| {
        let offers: Vec<Offer> = costs
            .into_iter()
            .enumerate()
            .map(|(i, total_cost)| Offer {
                offer_id: format!("e{i}"),
                total_cost,
                currency: "EUR".to_string(),
                origin: "CDG".to_string(),
                destination: "FCO".to_string(),
                airline_name: "AF".to_string(),
                departure_time: "d".to_string(),
                arrival_time: "a".to_string(),
                duration: "2h".to_string(),
                cabin_class: "economy".to_string(),
                route_code: None,
                stops: None,
            })
            .collect();
        group_offers(&offers).remove(0)
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Every extracted offer appears in some search_offers payload, in order
    #[test]
    fn prop_extraction_never_fabricates(records in proptest::collection::vec(arb_record(), 0..6)) {
        let messages: Vec<ThreadMessage> = records
            .iter()
            .enumerate()
            .map(|(i, r)| to_message(i, r))
            .collect();

        let extraction = extract_offers(&messages);

        let expected: Vec<Offer> = records
            .iter()
            .filter_map(|r| match r {
                Record::Offers(offers) => Some(offers.clone()),
                _ => None,
            })
            .flatten()
            .collect();
        prop_assert_eq!(&extraction.offers, &expected);

        let malformed = records.iter().filter(|r| matches!(r, Record::Malformed(_))).count();
        prop_assert_eq!(extraction.errors.len(), malformed);
    }

    /// Groups partition the input: each offer appears exactly once
    #[test]
    fn prop_grouping_partitions_input(offers in arb_offers(12)) {
        let groups = group_offers(&offers);

        let mut seen: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.offers().iter().map(|o| o.offer_id.as_str()))
            .collect();
        let mut input: Vec<&str> = offers.iter().map(|o| o.offer_id.as_str()).collect();
        seen.sort_unstable();
        input.sort_unstable();
        prop_assert_eq!(seen, input);

        for group in &groups {
            prop_assert!(!group.is_empty());
        }
    }

    /// Two offers share a group iff their key strings are exactly equal
    #[test]
    fn prop_group_iff_key_equal(offers in arb_offers(10)) {
        let groups = group_offers(&offers);
        let mut group_of: HashMap<&str, usize> = HashMap::new();
        for (g, group) in groups.iter().enumerate() {
            for offer in group.offers() {
                group_of.insert(offer.offer_id.as_str(), g);
            }
        }

        for a in &offers {
            for b in &offers {
                let same_key = a.airline_name == b.airline_name
                    && a.departure_time == b.departure_time
                    && a.arrival_time == b.arrival_time;
                let same_group = group_of[a.offer_id.as_str()] == group_of[b.offer_id.as_str()];
                prop_assert_eq!(same_key, same_group);
            }
        }
    }

    /// Within a group offers keep first-seen order
    #[test]
    fn prop_grouping_keeps_input_order(offers in arb_offers(10)) {
        let position: HashMap<&str, usize> = offers
            .iter()
            .enumerate()
            .map(|(i, o)| (o.offer_id.as_str(), i))
            .collect();
        for group in group_offers(&offers) {
            let positions: Vec<usize> = group
                .offers()
                .iter()
                .map(|o| position[o.offer_id.as_str()])
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    /// The three cheapest economy fares carry Value/Classic/Flex in price order
    #[test]
    fn prop_cheapest_economy_labels(group in economy_group()) {
        let labeled = label_group(&group, TierMode::Expanded);
        let ranked: Vec<&LabeledOffer> = labeled
            .iter()
            .filter(|l| tier_rank(&l.tier_label) >= 0)
            .collect();

        prop_assert_eq!(ranked.len(), 3);
        prop_assert_eq!(ranked[0].tier_label.as_str(), "Economy Value");
        prop_assert_eq!(ranked[1].tier_label.as_str(), "Economy Classic");
        prop_assert_eq!(ranked[2].tier_label.as_str(), "Economy Flex");

        let mut costs: Vec<f64> = group.offers().iter().map(|o| parse_cost(&o.total_cost)).collect();
        costs.sort_by(f64::total_cmp);
        for (label, cost) in ranked.iter().zip(costs.iter()) {
            prop_assert!(parse_cost(&label.offer.total_cost).total_cmp(cost).is_eq());
        }
    }

    /// Labeling is deterministic and never adds or drops offers
    #[test]
    fn prop_labeling_idempotent(offers in arb_offers(10)) {
        for group in group_offers(&offers) {
            let first = label_group(&group, TierMode::Expanded);
            let second = label_group(&group, TierMode::Expanded);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.len(), group.len());

            let collapsed = label_group(&group, TierMode::Collapsed);
            prop_assert_eq!(collapsed.len(), 1);
            prop_assert_eq!(&collapsed[0].offer, group.base());
        }
    }

    /// Expanded output is ordered by tier rank with unranked labels first
    #[test]
    fn prop_expanded_sorted_by_rank(offers in arb_offers(10)) {
        for group in group_offers(&offers) {
            let ranks: Vec<i32> = label_group(&group, TierMode::Expanded)
                .iter()
                .map(|l| tier_rank(&l.tier_label))
                .collect();
            prop_assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
