use chrono::FixedOffset;

use crate::app_config::{Environment, PolicyConfig, DEFAULT_OD_RADIUS_KM};
use crate::ConfigError;

/// Load policy configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_policy_config() -> Result<PolicyConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_policy_config_from_env()
}

/// Load policy configuration from environment variables already in the process.
///
/// Unlike [`load_policy_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_policy_config_from_env() -> Result<PolicyConfig, ConfigError> {
    build_policy_config(|key| std::env::var(key))
}

/// Build policy configuration using the provided env-var lookup function.
fn build_policy_config<F>(lookup: F) -> Result<PolicyConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("EXPOSURE_ENV", "development"))?;
    let log_level = or_default("EXPOSURE_LOG_LEVEL", "info");

    let od_delivery_radius_km = {
        let var = "EXPOSURE_OD_RADIUS_KM";
        let raw = or_default(var, &DEFAULT_OD_RADIUS_KM.to_string());
        let km = raw
            .trim()
            .parse::<f64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if !km.is_finite() || km <= 0.0 {
            return Err(invalid(var, format!("radius must be positive, got {raw}")));
        }
        km
    };

    let utc_offset = {
        let var = "EXPOSURE_UTC_OFFSET";
        parse_utc_offset(&or_default(var, "+09:00")).map_err(|reason| invalid(var, reason))?
    };

    Ok(PolicyConfig {
        env,
        log_level,
        od_delivery_radius_km,
        utc_offset,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "EXPOSURE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

/// Parse `±HH:MM` into a fixed offset.
fn parse_utc_offset(s: &str) -> Result<FixedOffset, String> {
    let s = s.trim();
    let (sign, rest) = match s.split_at_checked(1) {
        Some(("+", rest)) => (1, rest),
        Some(("-", rest)) => (-1, rest),
        _ => return Err(format!("'{s}' must start with '+' or '-'")),
    };
    let (hours, minutes) = rest
        .split_once(':')
        .ok_or_else(|| format!("'{s}' must look like +HH:MM"))?;
    let hours: u16 = hours
        .parse()
        .map_err(|_| format!("'{s}' has a non-numeric hour"))?;
    let minutes: u16 = minutes
        .parse()
        .map_err(|_| format!("'{s}' has a non-numeric minute"))?;
    if minutes >= 60 {
        return Err(format!("'{s}' has minutes out of range"));
    }
    FixedOffset::east_opt(sign * (i32::from(hours) * 3600 + i32::from(minutes) * 60))
        .ok_or_else(|| format!("'{s}' is outside the valid offset range"))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
