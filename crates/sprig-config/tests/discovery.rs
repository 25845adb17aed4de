//! Discovery and environment layering tests.

use figment::Jail;
use sprig_config::{ConfigDiscovery, ProxyComponent, SprigConfig, discover};

#[test]
fn loads_toml_sections() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "sprig.toml",
            r#"
extra_sources = ["^@acme/icons$"]

[component]
source = "@acme/sprite"
name = "SpriteIcon"

[sprite]
strict = true
concurrency = 2

[[proxies]]
library = "@acme/icon-host"
export_name = "IconHost"
prop = "glyph"
"#,
        )?;

        let config = ConfigDiscovery::new(jail.directory()).load().unwrap();
        assert_eq!(config.component.source, "@acme/sprite");
        assert_eq!(config.component.name, "SpriteIcon");
        assert_eq!(config.component.id_attribute, "iconId");
        assert!(config.sprite.strict);
        assert_eq!(config.sprite.concurrency, Some(2));
        assert_eq!(
            config.proxies,
            vec![ProxyComponent::new("@acme/icon-host", "IconHost", "glyph")]
        );
        assert!(config.all_sources().any(|s| s == "^@acme/icons$"));
        assert!(config.all_sources().any(|s| s == r"^lucide-react$"));
        Ok(())
    });
}

#[test]
fn loads_package_json_field() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "package.json",
            r#"{ "name": "app", "sprig": { "sprite": { "file_name": "icons.svg" } } }"#,
        )?;

        let config = ConfigDiscovery::new(jail.directory()).load().unwrap();
        assert_eq!(config.sprite.file_name.as_deref(), Some("icons.svg"));
        Ok(())
    });
}

#[test]
fn env_overrides_file_values() {
    Jail::expect_with(|jail| {
        jail.create_file("sprig.toml", "[sprite]\nstrict = false\n")?;
        jail.set_env("SPRIG_SPRITE__STRICT", "true");
        jail.set_env("SPRIG_SETTINGS__LOG_LEVEL", "debug");

        let config = ConfigDiscovery::new(jail.directory())
            .load_with_env()
            .unwrap();
        assert!(config.sprite.strict);
        assert_eq!(config.settings.log_level.as_deref(), Some("debug"));
        Ok(())
    });
}

#[test]
fn discover_falls_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let config = discover().unwrap();
        assert_eq!(config.sources, SprigConfig::default().sources);
        assert!(!config.sprite.strict);
        Ok(())
    });
}
