//! Recognized icon-library import sources

use regex::Regex;
use sprig_config::{DEFAULT_ICON_SOURCES, SprigConfig};
use tracing::warn;

use crate::error::{Result, TransformError};

/// Compiled set of library-source patterns matched against raw import paths
#[derive(Debug, Clone)]
pub struct LibrarySources {
    patterns: Vec<Regex>,
}

impl LibrarySources {
    /// Compile every pattern, failing on the first invalid one
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| compile(pattern.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Compile what compiles; invalid patterns are logged and returned
    pub fn lenient<I, S>(patterns: I) -> (Self, Vec<TransformError>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        let mut rejected = Vec::new();

        for pattern in patterns {
            match compile(pattern.as_ref()) {
                Ok(regex) => compiled.push(regex),
                Err(err) => {
                    warn!(pattern = pattern.as_ref(), error = %err, "skipping invalid icon source pattern");
                    rejected.push(err);
                }
            }
        }

        (Self { patterns: compiled }, rejected)
    }

    /// Sources from `sources` + `extra_sources` of a config
    pub fn from_config(config: &SprigConfig) -> Self {
        Self::lenient(config.all_sources()).0
    }

    pub fn matches(&self, source: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(source))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for LibrarySources {
    fn default() -> Self {
        Self::lenient(DEFAULT_ICON_SOURCES).0
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|err| TransformError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: err.to_string(),
    })
}
