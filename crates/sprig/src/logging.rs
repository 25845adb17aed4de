//! Subscriber setup for hosts running sprig
//!
//! Only available with the `logging` feature. sprig itself only emits
//! `tracing` events; libraries embedding it should install their own
//! subscriber instead of calling these.

use std::fmt;
use std::str::FromStr;
use std::sync::Once;

use sprig_config::SprigConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static SUBSCRIBER: Once = Once::new();

/// Verbosity of sprig's log output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Silent,
    Error,
    /// Unresolved icons and unparsable modules
    #[default]
    Warn,
    Info,
    /// Per-module and per-icon progress
    Debug,
}

/// Canonical name, accepted aliases and filter for each level
const LEVELS: [(LogLevel, &str, &[&str], LevelFilter); 5] = [
    (LogLevel::Silent, "off", &["silent"], LevelFilter::OFF),
    (LogLevel::Error, "error", &[], LevelFilter::ERROR),
    (LogLevel::Warn, "warn", &["warning"], LevelFilter::WARN),
    (LogLevel::Info, "info", &[], LevelFilter::INFO),
    (LogLevel::Debug, "debug", &[], LevelFilter::DEBUG),
];

impl LogLevel {
    fn row(self) -> &'static (LogLevel, &'static str, &'static [&'static str], LevelFilter) {
        // every variant has exactly one row
        &LEVELS[self as usize]
    }

    pub fn as_filter(self) -> LevelFilter {
        self.row().3
    }

    /// Level from `settings.log_level`; unset or unknown names fall back to warn
    pub fn from_config(config: &SprigConfig) -> Self {
        let Some(name) = config.settings.log_level.as_deref() else {
            return Self::default();
        };
        name.parse().unwrap_or_else(|err: UnknownLevel| {
            tracing::warn!(level = %err.0, "unknown log level in config, using warn");
            Self::default()
        })
    }
}

/// A level name nothing in [`LogLevel`] answers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLevel(pub String);

impl fmt::Display for UnknownLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level `{}`", self.0)
    }
}

impl std::error::Error for UnknownLevel {}

impl FromStr for LogLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        LEVELS
            .iter()
            .find(|(_, name, aliases, _)| *name == wanted || aliases.contains(&wanted.as_str()))
            .map(|row| row.0)
            .ok_or_else(|| UnknownLevel(s.to_string()))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.row().1)
    }
}

/// Install a compact stderr subscriber at `level`
///
/// Directives in `RUST_LOG` refine the level. Only the first call in a
/// process does anything, and a global subscriber installed by the host
/// stays in place.
///
/// ```rust,no_run
/// use sprig::logging::{LogLevel, init_logging};
///
/// init_logging(LogLevel::Debug);
/// ```
pub fn init_logging(level: LogLevel) {
    SUBSCRIBER.call_once(|| {
        install(
            EnvFilter::builder()
                .with_default_directive(level.as_filter().into())
                .from_env_lossy(),
        )
    });
}

/// Install a subscriber driven by `RUST_LOG` alone, warn when it is unset
pub fn init_logging_from_env() {
    init_logging(LogLevel::default());
}

/// [`init_logging`] at `settings.log_level`
pub fn init_logging_from_config(config: &SprigConfig) {
    init_logging(LogLevel::from_config(config));
}

fn install(filter: EnvFilter) {
    let layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);
    if tracing_subscriber::registry().with(filter).with(layer).try_init().is_err() {
        tracing::debug!("global subscriber already set, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_aliases() {
        for (level, name, aliases, _) in LEVELS {
            assert_eq!(name.parse::<LogLevel>(), Ok(level));
            assert_eq!(level.to_string(), name);
            for alias in aliases {
                assert_eq!(alias.to_uppercase().parse::<LogLevel>(), Ok(level));
            }
        }
        assert_eq!(" Debug ".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!("loud".parse::<LogLevel>(), Err(UnknownLevel("loud".into())));
    }

    #[test]
    fn test_rows_follow_variant_order() {
        for (i, row) in LEVELS.iter().enumerate() {
            assert_eq!(row.0 as usize, i);
        }
        assert_eq!(LogLevel::Info.as_filter(), LevelFilter::INFO);
    }

    #[test]
    fn test_level_from_config() {
        let mut config = SprigConfig::default();
        assert_eq!(LogLevel::from_config(&config), LogLevel::Warn);

        config.settings.log_level = Some("debug".into());
        assert_eq!(LogLevel::from_config(&config), LogLevel::Debug);

        config.settings.log_level = Some("nope".into());
        assert_eq!(LogLevel::from_config(&config), LogLevel::Warn);
    }
}
