//! Property-based tests for the exposure policy.
//!
//! These tests use proptest to verify invariants around:
//! - displayability under each channel mode
//! - independence from instant pay and smart-menu flags where required
//! - operation status at and around interval edges
//! - ordering and capping of ranked output

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, TimeZone, Utc};
use exposure_core::{
    ChannelMode, DeliveryContext, FilterMode, GeoPoint, OperationTime, OrderChannel,
    PolicyConfig, SearchContext, ServiceArea, StoreId, StoreRecord, StoreStatus, RESULT_CAP,
};
use proptest::prelude::*;

use crate::evaluate::evaluate;
use crate::rank::rank_and_cap;

// ============================================================================
// Strategies
// ============================================================================

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap()
}

fn arb_status() -> impl Strategy<Value = StoreStatus> {
    prop_oneof![
        Just(StoreStatus::Open),
        Just(StoreStatus::Closed),
        Just(StoreStatus::Suspended),
    ]
}

fn arb_mode() -> impl Strategy<Value = ChannelMode> {
    prop_oneof![
        Just(ChannelMode::OdOnly),
        Just(ChannelMode::MpOnly),
        Just(ChannelMode::OdAndMp),
    ]
}

fn arb_channels() -> impl Strategy<Value = BTreeSet<OrderChannel>> {
    prop::sample::subsequence(OrderChannel::DELIVERY_TAB.to_vec(), 0..=4)
        .prop_map(|channels| channels.into_iter().collect())
}

/// Window `[base + start, base + start + len)` in minutes.
fn arb_window() -> impl Strategy<Value = OperationTime> {
    (0i64..1_000, 1i64..1_000).prop_map(|(start, len)| OperationTime::Window {
        opens_at: base() + Duration::minutes(start),
        closes_at: base() + Duration::minutes(start + len),
    })
}

fn arb_service_area() -> impl Strategy<Value = ServiceArea> {
    (any::<bool>(), prop::bool::weighted(0.8), -0.05f64..0.05, -0.05f64..0.05).prop_map(
        |(serviceable, same_center, d_lat, d_lng)| ServiceArea {
            serviceable,
            center_id: if same_center { "c1" } else { "c2" }.to_string(),
            location: GeoPoint {
                lat: 37.5 + d_lat,
                lng: 127.0 + d_lng,
            },
        },
    )
}

prop_compose! {
    fn arb_store()(
        id in 0u32..10_000,
        status in arb_status(),
        ongoing_channels in arb_channels(),
        channel_mode in arb_mode(),
        baropay in any::<bool>(),
        baropay_live in any::<bool>(),
        operation_time in arb_window(),
        rank_score in -1_000.0f64..1_000.0,
        is_use_smartmenu in proptest::option::of(any::<bool>()),
        service_area in arb_service_area(),
    ) -> StoreRecord {
        StoreRecord {
            store_id: StoreId::new(format!("s{id}")),
            status,
            ongoing_channels,
            channel_mode,
            baropay,
            baropay_live,
            operation_time,
            rank_score,
            is_use_smartmenu,
            service_area: Some(service_area),
        }
    }
}

fn ctx(filter_mode: FilterMode, offset_minutes: i64) -> SearchContext {
    SearchContext::new(filter_mode, base() + Duration::minutes(offset_minutes)).with_delivery(
        DeliveryContext {
            center_id: "c1".to_string(),
            location: GeoPoint {
                lat: 37.5,
                lng: 127.0,
            },
        },
    )
}

// ============================================================================
// Displayability
// ============================================================================

proptest! {
    #[test]
    fn non_open_store_is_never_displayable(store in arb_store(), minute in 0i64..2_000) {
        prop_assume!(store.status != StoreStatus::Open);
        let result = evaluate(&store, &ctx(FilterMode::PickupOff, minute), &PolicyConfig::default());
        prop_assert!(!result.displayable);
    }

    #[test]
    fn od_only_without_baropay_is_never_displayable(store in arb_store(), minute in 0i64..2_000) {
        let store = StoreRecord { channel_mode: ChannelMode::OdOnly, baropay: false, ..store };
        let result = evaluate(&store, &ctx(FilterMode::PickupOff, minute), &PolicyConfig::default());
        prop_assert!(!result.displayable);
    }

    #[test]
    fn marketplace_modes_ignore_baropay(store in arb_store(), minute in 0i64..2_000) {
        prop_assume!(store.channel_mode != ChannelMode::OdOnly);
        let policy = PolicyConfig::default();
        let c = ctx(FilterMode::PickupOff, minute);
        let with = evaluate(&StoreRecord { baropay: true, ..store.clone() }, &c, &policy);
        let without = evaluate(&StoreRecord { baropay: false, ..store }, &c, &policy);
        prop_assert_eq!(with.displayable, without.displayable);
    }

    #[test]
    fn smartmenu_never_changes_outcome(store in arb_store(), minute in 0i64..2_000, flag in proptest::option::of(any::<bool>())) {
        let policy = PolicyConfig::default();
        let c = ctx(FilterMode::PickupOff, minute);
        let original = evaluate(&store, &c, &policy);
        let flipped = evaluate(&StoreRecord { is_use_smartmenu: flag, ..store }, &c, &policy);
        prop_assert_eq!(original, flipped);
    }

    #[test]
    fn hidden_reasons_agree_with_displayable(store in arb_store(), minute in 0i64..2_000, pickup_on in any::<bool>()) {
        let mode = if pickup_on { FilterMode::PickupOn } else { FilterMode::PickupOff };
        let result = evaluate(&store, &ctx(mode, minute), &PolicyConfig::default());
        prop_assert_eq!(result.displayable, result.hidden_reasons.is_empty());
    }
}

// ============================================================================
// Operation status
// ============================================================================

proptest! {
    #[test]
    fn final_operation_iff_live_and_within_window(store in arb_store(), minute in 0i64..2_000) {
        let c = ctx(FilterMode::PickupOff, minute);
        let OperationTime::Window { opens_at, closes_at } = store.operation_time else {
            unreachable!("arb_window only builds windows");
        };
        let within = opens_at <= c.now && c.now < closes_at;
        let result = evaluate(&store, &c, &PolicyConfig::default());
        prop_assert_eq!(result.final_operation, store.baropay_live && within);
    }

    #[test]
    fn final_operation_at_window_edges(store in arb_store()) {
        let store = StoreRecord { baropay_live: true, ..store };
        let OperationTime::Window { opens_at, closes_at } = store.operation_time else {
            unreachable!("arb_window only builds windows");
        };
        let policy = PolicyConfig::default();
        let at = |now| evaluate(&store, &SearchContext::new(FilterMode::PickupOff, now), &policy);
        prop_assert!(at(opens_at).final_operation);
        prop_assert!(!at(opens_at - Duration::seconds(1)).final_operation);
        prop_assert!(at(closes_at - Duration::seconds(1)).final_operation);
        prop_assert!(!at(closes_at).final_operation);
    }
}

// ============================================================================
// Ranking
// ============================================================================

proptest! {
    #[test]
    fn ranked_output_is_capped_sorted_and_displayable(stores in prop::collection::vec(arb_store(), 0..80), minute in 0i64..2_000) {
        let policy = PolicyConfig::default();
        let c = ctx(FilterMode::PickupOff, minute);
        let evaluated: Vec<_> = stores.iter().map(|s| evaluate(s, &c, &policy)).collect();
        let out = rank_and_cap(evaluated, FilterMode::PickupOff);

        prop_assert!(out.len() <= RESULT_CAP);
        for r in &out {
            prop_assert!(r.displayable);
            prop_assert!(r.rank.is_some_and(|rank| (1..=RESULT_CAP).contains(&rank)));
        }
        for pair in out.windows(2) {
            prop_assert!(pair[0].rank_score >= pair[1].rank_score);
            prop_assert!(pair[0].rank < pair[1].rank);
        }
    }

    #[test]
    fn all_displayable_keeps_exactly_the_top_scores(scores in prop::collection::hash_set(-10_000i32..10_000, 26..60)) {
        let policy = PolicyConfig::default();
        let c = ctx(FilterMode::PickupOff, 0);
        let mut expected: Vec<i32> = scores.iter().copied().collect();
        let evaluated: Vec<_> = expected
            .iter()
            .map(|&score| {
                let store = StoreRecord {
                    store_id: StoreId::new(score.to_string()),
                    status: StoreStatus::Open,
                    ongoing_channels: BTreeSet::from([OrderChannel::OpenList]),
                    channel_mode: ChannelMode::MpOnly,
                    baropay: false,
                    baropay_live: false,
                    operation_time: OperationTime::Window { opens_at: base(), closes_at: base() + Duration::hours(1) },
                    rank_score: f64::from(score),
                    is_use_smartmenu: None,
                    service_area: None,
                };
                evaluate(&store, &c, &policy)
            })
            .collect();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        expected.truncate(RESULT_CAP);

        let out = rank_and_cap(evaluated, FilterMode::PickupOff);
        let got: Vec<i32> = out.iter().map(|r| r.store_id.as_str().parse().unwrap()).collect();
        prop_assert_eq!(got, expected);
    }
}
