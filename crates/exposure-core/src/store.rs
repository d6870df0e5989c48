//! Validated store snapshot types.
//!
//! A [`StoreRecord`] is built from a [`crate::RawStoreRecord`] once every
//! required field has been checked; the policy crate only ever sees this form.

use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Opaque store identifier as issued by the catalog provider.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(String);

impl StoreId {
    /// Wrap a provider identifier. Callers validate non-emptiness first.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A string did not name any variant of one of the closed enums below.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Normalise `pickup-off`, `Pickup_Off` and `PICKUP_OFF` to one spelling.
fn normalize_tag(s: &str) -> String {
    s.trim().to_ascii_uppercase().replace('-', "_")
}

/// Operational status flag of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreStatus {
    Open,
    Closed,
    Suspended,
}

impl FromStr for StoreStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "OPEN" => Ok(Self::Open),
            "CLOSED" => Ok(Self::Closed),
            "SUSPENDED" => Ok(Self::Suspended),
            _ => Err(ParseEnumError::new("store status", s)),
        }
    }
}

/// Paid and organic delivery-tab channels a store can be listed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderChannel {
    BaeminOnePlus,
    OpenList,
    UltraCall,
    PowerCall,
}

impl OrderChannel {
    /// Channels that make a store eligible for delivery-tab exposure.
    pub const DELIVERY_TAB: [OrderChannel; 4] = [
        OrderChannel::BaeminOnePlus,
        OrderChannel::OpenList,
        OrderChannel::UltraCall,
        OrderChannel::PowerCall,
    ];
}

impl FromStr for OrderChannel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "BAEMIN_ONE_PLUS" => Ok(Self::BaeminOnePlus),
            "OPEN_LIST" => Ok(Self::OpenList),
            "ULTRA_CALL" => Ok(Self::UltraCall),
            "POWER_CALL" => Ok(Self::PowerCall),
            _ => Err(ParseEnumError::new("order channel", s)),
        }
    }
}

/// Fulfillment models a store supports.
///
/// `Od` is courier-dispatched (on-demand), `Mp` is merchant-delivered
/// (marketplace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChannelMode {
    OdOnly,
    MpOnly,
    OdAndMp,
}

impl FromStr for ChannelMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "OD_ONLY" => Ok(Self::OdOnly),
            "MP_ONLY" => Ok(Self::MpOnly),
            "OD_AND_MP" => Ok(Self::OdAndMp),
            _ => Err(ParseEnumError::new("channel mode", s)),
        }
    }
}

/// Hours during which a store takes orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OperationTime {
    /// Absolute half-open interval `[opens_at, closes_at)`.
    Window {
        opens_at: DateTime<Utc>,
        closes_at: DateTime<Utc>,
    },
    /// Recurring daily hours in the business time zone.
    ///
    /// `open > close` wraps past midnight; `open == close` means all day.
    Daily { open: NaiveTime, close: NaiveTime },
}

impl OperationTime {
    /// Whether `now` falls inside these hours.
    ///
    /// `offset` is the business time zone used for [`OperationTime::Daily`].
    #[must_use]
    pub fn contains(&self, now: DateTime<Utc>, offset: FixedOffset) -> bool {
        match *self {
            OperationTime::Window {
                opens_at,
                closes_at,
            } => opens_at <= now && now < closes_at,
            OperationTime::Daily { open, close } => {
                let local = now.with_timezone(&offset).time();
                if open == close {
                    true
                } else if open < close {
                    open <= local && local < close
                } else {
                    local >= open || local < close
                }
            }
        }
    }
}

/// Dispatch facts for an on-demand store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceArea {
    /// Whether couriers currently serve the store's delivery zone.
    pub serviceable: bool,
    /// Dispatch center the store is assigned to.
    pub center_id: String,
    pub location: GeoPoint,
}

/// A validated snapshot of one store's order-channel state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    pub store_id: StoreId,
    pub status: StoreStatus,
    pub ongoing_channels: BTreeSet<OrderChannel>,
    pub channel_mode: ChannelMode,
    pub baropay: bool,
    pub baropay_live: bool,
    pub operation_time: OperationTime,
    /// Score from the re-ranking feed. Always finite.
    pub rank_score: f64,
    /// Smart-menu usage. Carried for callers; no exposure rule reads it.
    pub is_use_smartmenu: Option<bool>,
    pub service_area: Option<ServiceArea>,
}

/// A cost-per-click advertising slot attached to a search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpcPlacement {
    pub placement_id: String,
    pub store_id: StoreId,
}
