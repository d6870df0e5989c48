use chrono::FixedOffset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Hard cap on delivery-tab results. Positions past this are never exposed.
pub const RESULT_CAP: usize = 25;

/// Default single-zone delivery radius for on-demand stores, in kilometres.
pub const DEFAULT_OD_RADIUS_KM: f64 = 4.0;

/// Korea Standard Time, where the delivery-tab policy is defined.
pub const DEFAULT_UTC_OFFSET_SECS: i32 = 9 * 3600;

#[derive(Debug, Clone, PartialEq)]
pub struct PolicyConfig {
    pub env: Environment,
    pub log_level: String,
    /// Radius around an on-demand store inside which couriers deliver.
    pub od_delivery_radius_km: f64,
    /// Business time zone used to read daily operation hours.
    pub utc_offset: FixedOffset,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            env: Environment::Development,
            log_level: "info".to_string(),
            od_delivery_radius_km: DEFAULT_OD_RADIUS_KM,
            utc_offset: FixedOffset::east_opt(DEFAULT_UTC_OFFSET_SECS)
                .expect("+09:00 is a valid offset"),
        }
    }
}
