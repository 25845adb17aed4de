//! Top-level configuration structure for sprig.
//!
//! `SprigConfig` is what hosts build from a file, from a `serde_json::Value`,
//! or from `Default`. For file discovery, see the `discovery` module.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::defaults::{
    DEFAULT_COMPONENT_NAME, DEFAULT_COMPONENT_SOURCE, DEFAULT_ID_ATTRIBUTE, default_sources,
};
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SprigConfig {
    /// Library-source regular expressions; replaces the built-in table
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,

    /// Patterns appended to `sources`
    #[serde(default)]
    pub extra_sources: Vec<String>,

    #[serde(default)]
    pub component: ComponentConfig,

    /// Components that take the real icon as a prop
    #[serde(default = "default_proxies")]
    pub proxies: Vec<ProxyComponent>,

    #[serde(default)]
    pub sprite: SpriteOptions,

    #[serde(default)]
    pub settings: GlobalSettings,
}

impl Default for SprigConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            extra_sources: Vec::new(),
            component: ComponentConfig::default(),
            proxies: default_proxies(),
            sprite: SpriteOptions::default(),
            settings: GlobalSettings::default(),
        }
    }
}

/// The shared component every rewritten icon renders through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentConfig {
    /// Module the component is imported from
    pub source: String,
    /// Exported name of the component
    pub name: String,
    /// Attribute carrying the symbol id
    pub id_attribute: String,
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_COMPONENT_SOURCE.to_string(),
            name: DEFAULT_COMPONENT_NAME.to_string(),
            id_attribute: DEFAULT_ID_ATTRIBUTE.to_string(),
        }
    }
}

/// A component that receives the actual icon through a prop,
/// e.g. `<FontAwesomeIcon icon={faCoffee} />`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyComponent {
    pub library: String,
    pub export_name: String,
    pub prop: String,
}

impl ProxyComponent {
    pub fn new(
        library: impl Into<String>,
        export_name: impl Into<String>,
        prop: impl Into<String>,
    ) -> Self {
        Self {
            library: library.into(),
            export_name: export_name.into(),
            prop: prop.into(),
        }
    }

    /// FontAwesome's `<FontAwesomeIcon icon={...} />`
    pub fn font_awesome() -> Self {
        Self::new("@fortawesome/react-fontawesome", "FontAwesomeIcon", "icon")
    }
}

fn default_proxies() -> Vec<ProxyComponent> {
    vec![ProxyComponent::font_awesome()]
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteOptions {
    /// Abort sprite assembly on the first unresolved icon
    pub strict: bool,

    /// Upper bound on icons rendered in parallel (defaults to CPU count)
    pub concurrency: Option<usize>,

    /// Exact file name for hosts emitting the sprite asset
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    #[serde(default)]
    pub log_level: Option<String>,
}

impl SprigConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use sprig_config::SprigConfig;
    /// use serde_json::json;
    ///
    /// let config = SprigConfig::from_value(json!({
    ///     "extra_sources": ["^my-icons$"],
    ///     "sprite": { "strict": true }
    /// }))
    /// .unwrap();
    /// assert!(config.sprite.strict);
    /// assert!(config.all_sources().any(|s| s == "^my-icons$"));
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        let config: SprigConfig =
            serde_json::from_value(value).map_err(|e| ConfigError::invalid("config", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::invalid("config", e.to_string()))
    }

    /// Configured patterns followed by `extra_sources`
    pub fn all_sources(&self) -> impl Iterator<Item = &str> {
        self.sources
            .iter()
            .chain(self.extra_sources.iter())
            .map(String::as_str)
    }

    /// Schema-level checks that serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.component.source.trim().is_empty() {
            return Err(ConfigError::Validation(
                "component.source must not be empty".to_string(),
            ));
        }
        if self.component.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "component.name must not be empty".to_string(),
            ));
        }
        if self.component.id_attribute.trim().is_empty() {
            return Err(ConfigError::Validation(
                "component.id_attribute must not be empty".to_string(),
            ));
        }
        if let Some(proxy) = self.proxies.iter().find(|p| p.prop.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "proxy `{}` from `{}` has an empty prop",
                proxy.export_name, proxy.library
            )));
        }
        if self.sprite.concurrency == Some(0) {
            return Err(ConfigError::Validation(
                "sprite.concurrency must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config_is_valid() {
        let config = SprigConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.sources.is_empty());
        assert_eq!(config.proxies, vec![ProxyComponent::font_awesome()]);
    }

    #[test]
    fn test_from_value_keeps_defaults_for_missing_fields() {
        let config = SprigConfig::from_value(json!({ "sprite": { "concurrency": 4 } })).unwrap();
        assert_eq!(config.sprite.concurrency, Some(4));
        assert_eq!(config.component, ComponentConfig::default());
        assert_eq!(config.sources, default_sources());
    }

    #[test]
    fn test_rejects_zero_concurrency() {
        let err = SprigConfig::from_value(json!({ "sprite": { "concurrency": 0 } })).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_rejects_empty_proxy_prop() {
        let err = SprigConfig::from_value(json!({
            "proxies": [{ "library": "x", "export_name": "Y", "prop": "" }]
        }))
        .unwrap_err();
        assert!(err.to_string().contains("empty prop"));
    }

    #[test]
    fn test_value_roundtrip() {
        let config = SprigConfig::default();
        let value = config.to_value().unwrap();
        assert_eq!(value["component"]["name"], "ReactIconsSpriteIcon");
    }
}
