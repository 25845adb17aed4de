//! One build cycle: transform modules, then assemble their sprite

use sprig_config::{SpriteOptions, SprigConfig};
use tracing::debug;

use crate::collector::IconCollector;
use crate::error::SpriteError;
use crate::icon::IconPair;
use crate::sprite::{IconResolver, NarrowPaths, SpriteAssembler, SpriteDocument};
use crate::transform::{IconTransformer, ModuleSource, TransformOutput};

/// Default prefix of the emitted sprite file name
pub const SPRITE_FILE_PREFIX: &str = "sprite";

/// Ties the transformer, the collector and sprite assembly of one build
/// together.
///
/// Every session starts with an empty collector, so icons registered by a
/// previous build never end up in this build's sprite.
#[derive(Debug, Clone)]
pub struct BuildSession {
    collector: IconCollector,
    transformer: IconTransformer,
    sprite: SpriteOptions,
    narrow: NarrowPaths,
}

impl BuildSession {
    /// Start a build with a fresh collector
    pub fn start(config: &SprigConfig) -> Self {
        Self::start_with(IconCollector::new(), config)
    }

    /// Start a build reusing a host-owned collector, which is cleared first
    pub fn start_with(collector: IconCollector, config: &SprigConfig) -> Self {
        if !collector.is_empty() {
            debug!(stale = collector.len(), "clearing icons from previous build");
        }
        collector.clear();

        Self {
            collector,
            transformer: IconTransformer::from_config(config),
            sprite: config.sprite.clone(),
            narrow: NarrowPaths::builtin(),
        }
    }

    pub fn with_narrow_paths(mut self, narrow: NarrowPaths) -> Self {
        self.narrow = narrow;
        self
    }

    pub fn collector(&self) -> &IconCollector {
        &self.collector
    }

    pub fn transformer(&self) -> &IconTransformer {
        &self.transformer
    }

    /// Transform one module, registering its icons with this build
    pub fn transform(&self, source: &str, id: &str) -> TransformOutput {
        self.transformer.transform_into(source, id, &self.collector)
    }

    /// Transform modules in parallel; registration order follows `modules`
    pub fn transform_modules(&self, modules: &[ModuleSource]) -> Vec<TransformOutput> {
        self.transformer.transform_modules(modules, &self.collector)
    }

    /// Configuration problems that were skipped rather than failing the build
    pub fn warnings(&self) -> &[String] {
        self.transformer.warnings()
    }

    /// Icons registered so far, in first-seen order
    pub fn icons(&self) -> Vec<IconPair> {
        self.collector.to_list()
    }

    /// Assemble the sprite for every icon registered in this build.
    ///
    /// The document's warnings start with the session's own [`warnings`](Self::warnings).
    pub fn sprite<R: IconResolver>(&self, resolver: R) -> Result<SpriteDocument, SpriteError> {
        let mut document = SpriteAssembler::new(resolver)
            .with_options(self.sprite.clone())
            .with_narrow_paths(self.narrow.clone())
            .assemble(&self.icons())?;
        if !self.warnings().is_empty() {
            let assembly = std::mem::take(&mut document.warnings);
            document.warnings = self.warnings().iter().cloned().chain(assembly).collect();
        }
        Ok(document)
    }

    /// File name for the emitted sprite: the configured name, or a
    /// content-hashed `sprite-<hash>.svg`
    pub fn asset_name(&self, document: &SpriteDocument) -> String {
        self.sprite
            .file_name
            .clone()
            .unwrap_or_else(|| document.file_name(SPRITE_FILE_PREFIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_with_clears_previous_build() {
        let collector = IconCollector::new();
        collector.add("react-icons/fa", "FaBeer");

        let session = BuildSession::start_with(collector.clone(), &SprigConfig::default());
        assert!(session.icons().is_empty());
        assert!(collector.is_empty());
    }

    #[test]
    fn test_asset_name_prefers_configured_name() {
        let mut config = SprigConfig::default();
        let doc = SpriteDocument::default();

        let session = BuildSession::start(&config);
        assert!(session.asset_name(&doc).starts_with("sprite-"));

        config.sprite.file_name = Some("icons.svg".into());
        let session = BuildSession::start(&config);
        assert_eq!(session.asset_name(&doc), "icons.svg");
    }
}
