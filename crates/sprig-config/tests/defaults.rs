//! Tests for default values.

use sprig_config::{
    ComponentConfig, DEFAULT_ICON_SOURCES, GlobalSettings, SpriteOptions, SprigConfig,
};

#[test]
fn sprig_config_defaults() {
    let config = SprigConfig::default();
    assert_eq!(config.sources.len(), DEFAULT_ICON_SOURCES.len());
    assert!(config.extra_sources.is_empty());
    assert_eq!(config.proxies.len(), 1);
    assert_eq!(config.proxies[0].prop, "icon");
}

#[test]
fn component_defaults() {
    let component = ComponentConfig::default();
    assert_eq!(component.source, "react-icons-sprite");
    assert_eq!(component.name, "ReactIconsSpriteIcon");
    assert_eq!(component.id_attribute, "iconId");
}

#[test]
fn sprite_defaults_are_lenient() {
    let sprite = SpriteOptions::default();
    assert!(!sprite.strict);
    assert!(sprite.concurrency.is_none());
    assert!(sprite.file_name.is_none());
}

#[test]
fn global_settings_defaults() {
    assert!(GlobalSettings::default().log_level.is_none());
}

#[test]
fn default_table_covers_known_libraries() {
    for lib in ["react-icons/", "lucide-react", "@mui/icons-material", "@fortawesome/"] {
        assert!(
            DEFAULT_ICON_SOURCES.iter().any(|p| p.contains(lib)),
            "missing {lib}"
        );
    }
}
