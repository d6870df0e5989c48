//! Displayability predicates.
//!
//! With the pickup filter off, a store must be open, be listed on at least one
//! delivery-tab channel, satisfy the instant-pay rule for its channel mode
//! and, for on-demand-only stores, pass service-area gating. The predicates
//! are independent and AND-composed; every failure is reported.
//!
//! No predicate reads `is_use_smartmenu`.

use exposure_core::{
    ChannelMode, DeliveryContext, FilterMode, OrderChannel, PolicyConfig, SearchContext,
    StoreRecord, StoreStatus,
};

use crate::types::HiddenReason;

/// Collect the reasons `store` must be hidden. Empty means displayable.
pub(crate) fn hidden_reasons(
    store: &StoreRecord,
    ctx: &SearchContext,
    policy: &PolicyConfig,
) -> Vec<HiddenReason> {
    if store.status != StoreStatus::Open {
        return vec![HiddenReason::NotOpen];
    }

    match ctx.filter_mode {
        // Pickup-tab eligibility is decided downstream; only closed stores are filtered here.
        FilterMode::PickupOn => Vec::new(),
        FilterMode::PickupOff => delivery_tab_reasons(store, ctx.delivery.as_ref(), policy),
    }
}

fn delivery_tab_reasons(
    store: &StoreRecord,
    delivery: Option<&DeliveryContext>,
    policy: &PolicyConfig,
) -> Vec<HiddenReason> {
    let mut reasons = Vec::new();

    if !has_delivery_tab_channel(store) {
        reasons.push(HiddenReason::NoDeliveryTabChannel);
    }

    if !instant_pay_satisfied(store) {
        reasons.push(HiddenReason::BaropayRequired);
    }

    if store.channel_mode == ChannelMode::OdOnly {
        reasons.extend(service_area_reasons(store, delivery, policy));
    }

    reasons
}

fn has_delivery_tab_channel(store: &StoreRecord) -> bool {
    OrderChannel::DELIVERY_TAB
        .iter()
        .any(|channel| store.ongoing_channels.contains(channel))
}

fn instant_pay_satisfied(store: &StoreRecord) -> bool {
    match store.channel_mode {
        ChannelMode::OdOnly => store.baropay,
        ChannelMode::MpOnly | ChannelMode::OdAndMp => true,
    }
}

fn service_area_reasons(
    store: &StoreRecord,
    delivery: Option<&DeliveryContext>,
    policy: &PolicyConfig,
) -> Vec<HiddenReason> {
    let Some(delivery) = delivery else {
        return vec![HiddenReason::NoDeliveryContext];
    };
    // Validated records always carry it; a hand-built record without one fails closed.
    let Some(area) = store.service_area.as_ref() else {
        return vec![HiddenReason::NotServiceable];
    };

    let mut reasons = Vec::new();
    if !area.serviceable {
        reasons.push(HiddenReason::NotServiceable);
    }
    if area.center_id != delivery.center_id {
        reasons.push(HiddenReason::CenterMismatch);
    }
    if area.location.distance_km(&delivery.location) > policy.od_delivery_radius_km {
        reasons.push(HiddenReason::OutsideDeliveryRadius);
    }
    reasons
}

#[cfg(test)]
#[path = "display_test.rs"]
mod tests;
