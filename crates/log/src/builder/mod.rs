//! Logger builder implementation

#[macro_use]
mod format;

use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, TestWriter, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::{Config, Format, Writer};
use crate::error::{LogError, LogResult};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard returned by a successful initialization.
///
/// Carries the configuration that was installed; a no-op guard (from a
/// process that already had a subscriber) carries none.
#[derive(Debug)]
pub struct LoggerGuard {
    installed: Option<Config>,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Parses the filter and assembles the fmt layer without installing
    /// anything.
    fn layers(&self) -> LogResult<(EnvFilter, BoxedLayer)> {
        let filter = EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            filter: self.config.level.clone(),
            reason: e.to_string(),
        })?;

        let display = &self.config.display;
        let writer = make_writer(self.config.writer);

        let fmt_layer: BoxedLayer = match self.config.format {
            Format::Pretty => boxed_fmt_layer!(fmt::layer().pretty(), display, writer),
            Format::Compact => boxed_fmt_layer!(fmt::layer().compact(), display, writer),
            Format::Json => boxed_fmt_layer!(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(display.span_list)
                    .flatten_event(display.flatten),
                display,
                writer
            ),
        };

        Ok((filter, fmt_layer))
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already set
    pub fn build(self) -> LogResult<LoggerGuard> {
        let (filter, fmt_layer) = self.layers()?;

        tracing_subscriber::registry()
            .with(fmt_layer)
            .with(filter)
            .try_init()
            .map_err(|e| LogError::AlreadyInitialized(e.to_string()))?;

        tracing::debug!(
            level = %self.config.level,
            format = ?self.config.format,
            "logger initialized"
        );

        Ok(LoggerGuard {
            installed: Some(self.config),
        })
    }
}

fn make_writer(writer: Writer) -> BoxMakeWriter {
    match writer {
        Writer::Stderr => BoxMakeWriter::new(std::io::stderr),
        Writer::Stdout => BoxMakeWriter::new(std::io::stdout),
        Writer::Test => BoxMakeWriter::new(TestWriter::new()),
    }
}

impl LoggerGuard {
    pub(crate) fn noop() -> Self {
        Self { installed: None }
    }

    /// The configuration this guard installed, if it installed one.
    pub fn config(&self) -> Option<&Config> {
        self.installed.as_ref()
    }

    /// Whether this call installed the global subscriber.
    pub fn is_active(&self) -> bool {
        self.installed.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_bad_filter_is_rejected_before_install() {
        let config = Config {
            level: "courtside_core=loud".to_string(),
            ..Config::default()
        };
        let err = LoggerBuilder::from_config(config).layers().err().unwrap();
        assert!(matches!(err, LogError::Filter { ref filter, .. } if filter == "courtside_core=loud"));
    }

    #[rstest]
    #[case(Config::development())]
    #[case(Config::production())]
    #[case(Config::test())]
    #[case(Config::default())]
    fn test_presets_assemble(#[case] config: Config) {
        assert!(LoggerBuilder::from_config(config).layers().is_ok());
    }

    #[test]
    fn test_noop_guard() {
        let guard = LoggerGuard::noop();
        assert!(!guard.is_active());
        assert_eq!(guard.config(), None);
    }
}
