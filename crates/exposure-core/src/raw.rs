//! Wire shape of a store snapshot and its validation into [`StoreRecord`].
//!
//! Every field is optional on the wire so that one malformed record can be
//! rejected on its own instead of failing the whole candidate file. Enum
//! values stay strings for the same reason.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::geo::GeoPoint;
use crate::store::{
    ChannelMode, OperationTime, OrderChannel, ServiceArea, StoreId, StoreRecord, StoreStatus,
};

/// Placeholder used in error messages when the record has no usable id.
pub const UNKNOWN_STORE_ID: &str = "<unknown>";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStoreRecord {
    pub store_id: Option<String>,
    pub status: Option<String>,
    pub ongoing_channels: Option<Vec<String>>,
    pub channel_mode: Option<String>,
    pub baropay: Option<bool>,
    pub baropay_live: Option<bool>,
    pub operation_time: Option<RawOperationTime>,
    pub rank_score: Option<f64>,
    pub is_use_smartmenu: Option<bool>,
    pub service_area: Option<RawServiceArea>,
}

/// Either `opensAt`/`closesAt` (RFC 3339) or `open`/`close` (`HH:MM`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOperationTime {
    pub opens_at: Option<String>,
    pub closes_at: Option<String>,
    pub open: Option<String>,
    pub close: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawServiceArea {
    pub serviceable: Option<bool>,
    pub center_id: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl RawStoreRecord {
    /// Store id for diagnostics, even when the record is otherwise invalid.
    #[must_use]
    pub fn display_id(&self) -> &str {
        self.store_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_STORE_ID)
    }

    /// Check every required field and build a [`StoreRecord`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found. Missing fields are never
    /// replaced by a default.
    pub fn validate(self) -> Result<StoreRecord, ValidationError> {
        let id = self.display_id().to_string();
        let missing = |field: &'static str| ValidationError::MissingField {
            store_id: id.clone(),
            field,
        };
        let invalid = |field: &'static str, reason: String| ValidationError::InvalidField {
            store_id: id.clone(),
            field,
            reason,
        };

        let store_id = match self.store_id.as_deref().map(str::trim) {
            None => return Err(missing("storeId")),
            Some("") => return Err(invalid("storeId", "must be non-empty".to_string())),
            Some(s) => StoreId::new(s),
        };

        let status = self
            .status
            .as_deref()
            .ok_or_else(|| missing("status"))?
            .parse::<StoreStatus>()
            .map_err(|e| invalid("status", e.to_string()))?;

        let ongoing_channels = self
            .ongoing_channels
            .as_ref()
            .ok_or_else(|| missing("ongoingChannels"))?
            .iter()
            .map(|c| c.parse::<OrderChannel>())
            .collect::<Result<BTreeSet<_>, _>>()
            .map_err(|e| invalid("ongoingChannels", e.to_string()))?;

        let channel_mode = self
            .channel_mode
            .as_deref()
            .ok_or_else(|| missing("channelMode"))?
            .parse::<ChannelMode>()
            .map_err(|e| invalid("channelMode", e.to_string()))?;

        let baropay = self.baropay.ok_or_else(|| missing("baropay"))?;
        let baropay_live = self.baropay_live.ok_or_else(|| missing("baropayLive"))?;

        let operation_time = self
            .operation_time
            .as_ref()
            .ok_or_else(|| missing("operationTime"))
            .and_then(|raw| {
                parse_operation_time(raw).map_err(|reason| invalid("operationTime", reason))
            })?;

        let rank_score = self.rank_score.ok_or_else(|| missing("rankScore"))?;
        if !rank_score.is_finite() {
            return Err(invalid(
                "rankScore",
                format!("must be a finite number, got {rank_score}"),
            ));
        }

        let service_area = match self.service_area.as_ref() {
            None => None,
            Some(raw) => Some(parse_service_area(raw).map_err(|(field, reason)| match reason {
                Some(reason) => invalid(field, reason),
                None => missing(field),
            })?),
        };

        if channel_mode == ChannelMode::OdOnly && service_area.is_none() {
            return Err(missing("serviceArea"));
        }

        Ok(StoreRecord {
            store_id,
            status,
            ongoing_channels,
            channel_mode,
            baropay,
            baropay_live,
            operation_time,
            rank_score,
            is_use_smartmenu: self.is_use_smartmenu,
            service_area,
        })
    }
}

fn parse_operation_time(raw: &RawOperationTime) -> Result<OperationTime, String> {
    match (&raw.opens_at, &raw.closes_at, &raw.open, &raw.close) {
        (Some(opens_at), Some(closes_at), None, None) => {
            let opens_at = parse_instant(opens_at)?;
            let closes_at = parse_instant(closes_at)?;
            if closes_at <= opens_at {
                return Err(format!(
                    "closesAt {closes_at} must be later than opensAt {opens_at}"
                ));
            }
            Ok(OperationTime::Window {
                opens_at,
                closes_at,
            })
        }
        (None, None, Some(open), Some(close)) => Ok(OperationTime::Daily {
            open: parse_wall_time(open)?,
            close: parse_wall_time(close)?,
        }),
        _ => Err("expected either opensAt/closesAt or open/close".to_string()),
    }
}

fn parse_instant(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("'{s}' is not an RFC 3339 timestamp: {e}"))
}

fn parse_wall_time(s: &str) -> Result<NaiveTime, String> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| format!("'{s}' is not a HH:MM time"))
}

/// `Err((field, None))` is a missing field, `Err((field, Some(reason)))` an invalid one.
fn parse_service_area(
    raw: &RawServiceArea,
) -> Result<ServiceArea, (&'static str, Option<String>)> {
    let serviceable = raw
        .serviceable
        .ok_or(("serviceArea.serviceable", None))?;
    let center_id = raw
        .center_id
        .as_deref()
        .map(str::trim)
        .ok_or(("serviceArea.centerId", None))?;
    if center_id.is_empty() {
        return Err((
            "serviceArea.centerId",
            Some("must be non-empty".to_string()),
        ));
    }
    let lat = raw.lat.ok_or(("serviceArea.lat", None))?;
    let lng = raw.lng.ok_or(("serviceArea.lng", None))?;
    let location = GeoPoint { lat, lng };
    if !location.is_valid() {
        return Err((
            "serviceArea.location",
            Some(format!("({lat}, {lng}) is not a valid coordinate")),
        ));
    }
    Ok(ServiceArea {
        serviceable,
        center_id: center_id.to_string(),
        location,
    })
}

#[cfg(test)]
#[path = "raw_test.rs"]
mod tests;
