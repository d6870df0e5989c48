//! Builders shared by unit tests.

use std::collections::BTreeSet;

use chrono::{DateTime, TimeZone, Utc};
use exposure_core::{
    ChannelMode, DeliveryContext, FilterMode, GeoPoint, OperationTime, OrderChannel,
    PolicyConfig, SearchContext, ServiceArea, StoreId, StoreRecord, StoreStatus,
};

pub(crate) const CENTER: &str = "gangnam-1";

pub(crate) fn gangnam() -> GeoPoint {
    GeoPoint {
        lat: 37.497_9,
        lng: 127.027_6,
    }
}

pub(crate) fn noon() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 3, 0, 0).unwrap()
}

pub(crate) fn opens_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 1, 0, 0).unwrap()
}

pub(crate) fn closes_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 13, 0, 0).unwrap()
}

/// The worked example: open, ULTRA_CALL, OD_ONLY, instant pay on and live.
pub(crate) fn od_store(id: &str) -> StoreRecord {
    StoreRecord {
        store_id: StoreId::new(id),
        status: StoreStatus::Open,
        ongoing_channels: BTreeSet::from([OrderChannel::UltraCall]),
        channel_mode: ChannelMode::OdOnly,
        baropay: true,
        baropay_live: true,
        operation_time: OperationTime::Window {
            opens_at: opens_at(),
            closes_at: closes_at(),
        },
        rank_score: 1.0,
        is_use_smartmenu: None,
        service_area: Some(ServiceArea {
            serviceable: true,
            center_id: CENTER.to_string(),
            location: gangnam(),
        }),
    }
}

pub(crate) fn mp_store(id: &str) -> StoreRecord {
    StoreRecord {
        channel_mode: ChannelMode::MpOnly,
        service_area: None,
        ongoing_channels: BTreeSet::from([OrderChannel::OpenList]),
        ..od_store(id)
    }
}

pub(crate) fn delivery_ctx(filter_mode: FilterMode, now: DateTime<Utc>) -> SearchContext {
    SearchContext::new(filter_mode, now).with_delivery(DeliveryContext {
        center_id: CENTER.to_string(),
        location: gangnam(),
    })
}

pub(crate) fn policy() -> PolicyConfig {
    PolicyConfig::default()
}
