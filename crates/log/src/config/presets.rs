//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, Format, Writer};

/// Preferred level variable; wins over `RUST_LOG`.
pub const LEVEL_VAR: &str = "COURTSIDE_LOG";
/// Fallback level variable.
pub const RUST_LOG_VAR: &str = "RUST_LOG";
/// Output format variable (`pretty`, `compact` or `json`).
pub const FORMAT_VAR: &str = "COURTSIDE_LOG_FORMAT";

impl Config {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Defaults overlaid with the logging variables among `vars`.
    #[must_use]
    pub fn from_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = Self::default();
        let mut level = None;
        let mut rust_log = None;

        for (name, value) in vars {
            match name.as_str() {
                LEVEL_VAR => level = Some(value),
                RUST_LOG_VAR => rust_log = Some(value),
                FORMAT_VAR => config.format = Format::parse_lenient(&value),
                _ => {}
            }
        }

        if let Some(level) = level.or(rust_log) {
            config.level = level;
        }
        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                flatten: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Test configuration (everything, routed through libtest capture)
    #[must_use]
    pub fn test() -> Self {
        Self {
            level: "trace".to_string(),
            format: Format::Compact,
            writer: Writer::Test,
            display: DisplayConfig {
                colors: false,
                time: false,
                ..DisplayConfig::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_from_vars_defaults() {
        assert_eq!(Config::from_vars(vars(&[("HOME", "/root")])), Config::default());
    }

    #[test]
    fn test_courtside_log_wins_over_rust_log() {
        let config = Config::from_vars(vars(&[
            ("COURTSIDE_LOG", "courtside_core=trace"),
            ("RUST_LOG", "warn"),
        ]));
        assert_eq!(config.level, "courtside_core=trace");
    }

    #[test]
    fn test_rust_log_fallback() {
        let config = Config::from_vars(vars(&[
            ("RUST_LOG", "warn"),
            ("COURTSIDE_LOG_FORMAT", "json"),
        ]));
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, Format::Json);
    }

    #[test]
    fn test_presets() {
        let dev = Config::development();
        assert_eq!(dev.format, Format::Pretty);
        assert!(dev.display.source);

        let prod = Config::production();
        assert_eq!(prod.format, Format::Json);
        assert!(prod.display.flatten);
        assert!(!prod.display.colors);

        let test = Config::test();
        assert_eq!(test.writer, Writer::Test);
        assert_eq!(test.level, "trace");
    }
}
