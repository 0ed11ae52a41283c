//! Configurable bounds for the field rules.
//!
//! Limits load from a JSON document or from environment variables carrying a
//! prefix. Environment keys are the field names uppercased, so
//! `COURTSIDE_RULES_MAX_PRICE=50000` overrides [`FieldLimits::max_price`].

use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Environment prefix for [`FieldLimits::from_env`].
pub const ENV_PREFIX: &str = "COURTSIDE_RULES_";

/// Errors raised while loading or checking configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document (or the merged environment overrides) did not
    /// deserialize.
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),

    /// An environment override names a key the target does not have.
    #[error("unknown configuration key `{key}` (from {var})")]
    UnknownKey {
        /// Lowercased key after the prefix was stripped.
        key: String,
        /// Original variable name.
        var: String,
    },

    /// A lower bound exceeds its upper bound.
    #[error("`{field}` minimum {min} exceeds maximum {max}")]
    InvertedBounds {
        /// Name of the bound pair.
        field: &'static str,
        /// Configured minimum.
        min: String,
        /// Configured maximum.
        max: String,
    },

    /// A bound that must be positive is zero or negative.
    #[error("`{field}` must be positive")]
    NonPositive {
        /// Field name.
        field: &'static str,
    },
}

// ============================================================================
// FIELD LIMITS
// ============================================================================

/// Every numeric bound the field rules consult.
///
/// Lengths are trimmed char counts. Missing keys fall back to the defaults
/// the backend schema accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldLimits {
    pub person_name_min: usize,
    pub person_name_max: usize,
    pub venue_name_min: usize,
    pub venue_name_max: usize,
    pub arena_name_min: usize,
    pub arena_name_max: usize,
    pub address_min: usize,
    pub address_max: usize,
    /// City and state.
    pub region_min: usize,
    pub region_max: usize,
    pub pincode_len: usize,
    pub account_number_min: usize,
    pub account_number_max: usize,
    pub holder_name_min: usize,
    pub holder_name_max: usize,
    pub amenity_min: usize,
    pub amenity_max: usize,
    pub max_amenities: usize,
    pub rules_min: usize,
    pub rules_max: usize,
    pub max_description: usize,
    pub max_images: usize,
    pub courts_min: u32,
    pub courts_max: u32,
    /// Slot duration in minutes.
    pub slot_duration_min: u32,
    pub slot_duration_max: u32,
    /// Sanity ceiling for any hourly price, in rupees.
    pub max_price: f64,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            person_name_min: 2,
            person_name_max: 100,
            venue_name_min: 2,
            venue_name_max: 200,
            arena_name_min: 2,
            arena_name_max: 100,
            address_min: 10,
            address_max: 500,
            region_min: 2,
            region_max: 100,
            pincode_len: 6,
            account_number_min: 9,
            account_number_max: 18,
            holder_name_min: 2,
            holder_name_max: 100,
            amenity_min: 2,
            amenity_max: 50,
            max_amenities: 20,
            rules_min: 10,
            rules_max: 2000,
            max_description: 1000,
            max_images: 10,
            courts_min: 1,
            courts_max: 20,
            slot_duration_min: 30,
            slot_duration_max: 240,
            max_price: 100_000.0,
        }
    }
}

impl FieldLimits {
    /// Parses limits from JSON; absent keys keep their defaults.
    ///
    /// ```rust
    /// use courtside_validator::FieldLimits;
    ///
    /// let limits = FieldLimits::from_json_str(r#"{ "max_price": 5000 }"#).unwrap();
    /// assert_eq!(limits.max_price, 5000.0);
    /// assert_eq!(limits.venue_name_max, 200);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let limits: Self = serde_json::from_str(json)?;
        limits.check()?;
        Ok(limits)
    }

    /// Defaults overlaid with `COURTSIDE_RULES_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Defaults overlaid with the given `(name, value)` pairs. Pairs without
    /// the [`ENV_PREFIX`] are ignored.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let limits = apply_env_overrides(Self::default(), ENV_PREFIX, vars)?;
        limits.check()?;
        Ok(limits)
    }

    /// Rejects inverted or non-positive bounds.
    pub fn check(&self) -> Result<(), ConfigError> {
        check_pair("person_name", self.person_name_min, self.person_name_max)?;
        check_pair("venue_name", self.venue_name_min, self.venue_name_max)?;
        check_pair("arena_name", self.arena_name_min, self.arena_name_max)?;
        check_pair("address", self.address_min, self.address_max)?;
        check_pair("region", self.region_min, self.region_max)?;
        check_pair("account_number", self.account_number_min, self.account_number_max)?;
        check_pair("holder_name", self.holder_name_min, self.holder_name_max)?;
        check_pair("amenity", self.amenity_min, self.amenity_max)?;
        check_pair("rules", self.rules_min, self.rules_max)?;
        check_pair("courts", self.courts_min, self.courts_max)?;
        check_pair("slot_duration", self.slot_duration_min, self.slot_duration_max)?;

        if self.pincode_len == 0 {
            return Err(ConfigError::NonPositive { field: "pincode_len" });
        }
        if self.max_price.is_nan() || self.max_price <= 0.0 {
            return Err(ConfigError::NonPositive { field: "max_price" });
        }
        Ok(())
    }
}

fn check_pair<T: PartialOrd + ToString>(
    field: &'static str,
    min: T,
    max: T,
) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvertedBounds {
            field,
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(())
}

// ============================================================================
// ENVIRONMENT OVERLAY
// ============================================================================

/// Overlays prefixed environment variables onto a flat serde struct.
///
/// Each matching variable has the prefix stripped and is lowercased into a
/// field name; its value is parsed as a bool, an integer, a float or a string
/// (in that order) and written over the serialized `base`.
pub fn apply_env_overrides<T, I>(base: T, prefix: &str, vars: I) -> Result<T, ConfigError>
where
    T: Serialize + DeserializeOwned,
    I: IntoIterator<Item = (String, String)>,
{
    let mut document = serde_json::to_value(base)?;
    let Some(fields) = document.as_object_mut() else {
        return Ok(serde_json::from_value(document)?);
    };

    for (var, value) in vars {
        let Some(stripped) = var.strip_prefix(prefix) else {
            continue;
        };
        let key = stripped.to_ascii_lowercase();
        if !fields.contains_key(&key) {
            return Err(ConfigError::UnknownKey { key, var });
        }
        tracing::trace!(key = %key, value = %value, "config override from environment");
        fields.insert(key, parse_env_value(&value));
    }

    Ok(serde_json::from_value(document)?)
}

fn parse_env_value(value: &str) -> serde_json::Value {
    let value = value.trim();

    if value.eq_ignore_ascii_case("true") {
        return serde_json::Value::Bool(true);
    }
    if value.eq_ignore_ascii_case("false") {
        return serde_json::Value::Bool(false);
    }
    if let Ok(int_val) = value.parse::<i64>() {
        return serde_json::Value::Number(serde_json::Number::from(int_val));
    }
    if let Some(num) = value
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
    {
        return serde_json::Value::Number(num);
    }

    serde_json::Value::String(value.to_string())
}
