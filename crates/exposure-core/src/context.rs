//! Per-request search inputs shared by every candidate in a batch.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::geo::GeoPoint;

/// State of the pickup toggle on the search screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterMode {
    /// Pickup-specific exposure policy is active.
    PickupOn,
    /// Standard delivery-tab exposure policy is active.
    PickupOff,
}

impl FilterMode {
    /// CPC advertising slots are only served with the delivery-tab policy.
    #[must_use]
    pub fn serves_cpc_ads(self) -> bool {
        matches!(self, FilterMode::PickupOff)
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterMode::PickupOn => write!(f, "pickup-on"),
            FilterMode::PickupOff => write!(f, "pickup-off"),
        }
    }
}

impl FromStr for FilterMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "PICKUP_ON" => Ok(FilterMode::PickupOn),
            "PICKUP_OFF" => Ok(FilterMode::PickupOff),
            _ => Err(ValidationError::InvalidField {
                store_id: "<request>".to_string(),
                field: "filterMode",
                reason: format!("unknown filter mode '{s}'"),
            }),
        }
    }
}

/// Where the delivery request comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryContext {
    /// Dispatch center serving the requester's zone.
    pub center_id: String,
    pub location: GeoPoint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchContext {
    pub filter_mode: FilterMode,
    pub now: DateTime<Utc>,
    pub delivery: Option<DeliveryContext>,
}

impl SearchContext {
    #[must_use]
    pub fn new(filter_mode: FilterMode, now: DateTime<Utc>) -> Self {
        Self {
            filter_mode,
            now,
            delivery: None,
        }
    }

    #[must_use]
    pub fn with_delivery(mut self, delivery: DeliveryContext) -> Self {
        self.delivery = Some(delivery);
        self
    }
}
