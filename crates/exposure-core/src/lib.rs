//! Domain types, input validation and configuration for the store exposure
//! policy.
//!
//! Catalog snapshots arrive as [`RawStoreRecord`]s and are validated into
//! [`StoreRecord`]s. Evaluation itself lives in `exposure-policy`.

pub mod app_config;
pub mod candidates;
pub mod config;
pub mod context;
pub mod error;
pub mod geo;
pub mod raw;
pub mod store;

pub use app_config::{Environment, PolicyConfig, DEFAULT_OD_RADIUS_KM, RESULT_CAP};
pub use candidates::{load_candidates, CandidatesFile};
pub use config::{load_policy_config, load_policy_config_from_env};
pub use context::{DeliveryContext, FilterMode, SearchContext};
pub use error::{ClockError, ConfigError, ValidationError};
pub use geo::GeoPoint;
pub use raw::{RawOperationTime, RawServiceArea, RawStoreRecord, UNKNOWN_STORE_ID};
pub use store::{
    ChannelMode, CpcPlacement, OperationTime, OrderChannel, ParseEnumError, ServiceArea, StoreId,
    StoreRecord, StoreStatus,
};
