//! Locating `sprig.toml` or a `"sprig"` key in `package.json`

use std::fs;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Serialized};
use serde_json::Value;

use crate::config::SprigConfig;
use crate::error::{ConfigError, Result};

/// Prefix for environment overrides (`SPRIG_SPRITE__STRICT=true`)
pub const ENV_PREFIX: &str = "SPRIG_";

const TOML_FILE: &str = "sprig.toml";
const PACKAGE_FILE: &str = "package.json";
const PACKAGE_KEY: &str = "sprig";

/// Where a project keeps its settings, in lookup order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFile {
    Toml,
    Package,
}

impl ConfigFile {
    const LOOKUP: [ConfigFile; 2] = [ConfigFile::Toml, ConfigFile::Package];

    fn file_name(self) -> &'static str {
        match self {
            ConfigFile::Toml => TOML_FILE,
            ConfigFile::Package => PACKAGE_FILE,
        }
    }

    fn of(path: &Path) -> Self {
        match path.file_name().and_then(|n| n.to_str()) {
            Some(PACKAGE_FILE) => ConfigFile::Package,
            _ => ConfigFile::Toml,
        }
    }

    /// A `package.json` only counts when it carries a non-null `sprig` key
    fn claims(self, path: &Path) -> bool {
        match self {
            ConfigFile::Toml => path.is_file(),
            ConfigFile::Package => fs::read_to_string(path)
                .ok()
                .and_then(|text| serde_json::from_str::<Value>(&text).ok())
                .is_some_and(|pkg| package_section(&pkg).is_some()),
        }
    }

    fn read(self, path: &Path) -> Result<Value> {
        let text = fs::read_to_string(path)?;
        match self {
            ConfigFile::Toml => {
                let table: toml::Value = toml::from_str(&text)
                    .map_err(|e| ConfigError::invalid(TOML_FILE, e.to_string()))?;
                serde_json::to_value(table)
                    .map_err(|e| ConfigError::invalid(TOML_FILE, e.to_string()))
            }
            ConfigFile::Package => {
                let pkg: Value = serde_json::from_str(&text)
                    .map_err(|e| ConfigError::invalid(PACKAGE_FILE, e.to_string()))?;
                package_section(&pkg).cloned().ok_or_else(|| {
                    ConfigError::invalid(PACKAGE_KEY, "package.json has no `sprig` object")
                })
            }
        }
    }
}

fn package_section(pkg: &Value) -> Option<&Value> {
    pkg.get(PACKAGE_KEY).filter(|v| !v.is_null())
}

/// Looks for project settings under one directory
///
/// Library users holding settings in memory can skip this and call
/// [`SprigConfig::from_value`].
///
/// ```no_run
/// use sprig_config::ConfigDiscovery;
///
/// let config = ConfigDiscovery::new("web").load_with_env()?;
/// # Ok::<(), sprig_config::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// First settings file under the root: `sprig.toml`, then `package.json`
    pub fn find(&self) -> Option<PathBuf> {
        ConfigFile::LOOKUP.into_iter().find_map(|kind| {
            let path = self.root.join(kind.file_name());
            kind.claims(&path).then_some(path)
        })
    }

    /// Load and validate the settings file [`find`](Self::find) picks
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotFound`] when the root has no settings file.
    pub fn load(&self) -> Result<SprigConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        tracing::debug!(path = %path.display(), "loading sprig config");
        SprigConfig::from_value(ConfigFile::of(&path).read(&path)?)
    }

    /// Like [`load`](Self::load), falling back to defaults when no file
    /// exists, then applying `SPRIG_`-prefixed environment variables
    pub fn load_with_env(&self) -> Result<SprigConfig> {
        let base = match self.load() {
            Err(ConfigError::NotFound) => SprigConfig::default(),
            other => other?,
        };

        let config: SprigConfig = Figment::from(Serialized::defaults(base))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| ConfigError::invalid("env", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// [`ConfigDiscovery::load_with_env`] rooted at the working directory
pub fn discover() -> Result<SprigConfig> {
    ConfigDiscovery::new(std::env::current_dir()?).load_with_env()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, body) in files {
            fs::write(dir.path().join(name), body).unwrap();
        }
        dir
    }

    #[test]
    fn empty_directory_has_no_config() {
        let dir = project(&[]);
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
        assert!(matches!(
            ConfigDiscovery::new(dir.path()).load(),
            Err(ConfigError::NotFound)
        ));
    }

    #[test]
    fn toml_wins_over_package_json() {
        let dir = project(&[
            (TOML_FILE, "[sprite]\nstrict = true\n"),
            (PACKAGE_FILE, r#"{"sprig": {}}"#),
        ]);
        assert_eq!(
            ConfigDiscovery::new(dir.path()).find(),
            Some(dir.path().join(TOML_FILE))
        );
    }

    #[test]
    fn null_package_key_is_not_a_config() {
        let dir = project(&[(PACKAGE_FILE, r#"{"name": "app", "sprig": null}"#)]);
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn unparseable_package_json_is_skipped() {
        let dir = project(&[(PACKAGE_FILE, "{ nope")]);
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn broken_toml_names_the_file() {
        let dir = project(&[(TOML_FILE, "[sprite\n")]);
        let err = ConfigDiscovery::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == TOML_FILE));
    }
}
