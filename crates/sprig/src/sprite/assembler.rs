//! Sprite assembly: render every registered icon once and join the symbols

use rayon::prelude::*;
use sprig_config::SpriteOptions;
use tracing::{debug, warn};

use crate::error::SpriteError;
use crate::icon::IconPair;
use crate::sprite::document::SpriteDocument;
use crate::sprite::narrow::NarrowPaths;
use crate::sprite::render::{IconRenderer, SymbolDefinition};
use crate::sprite::resolver::{CachedResolver, IconResolver};

/// Renders icon pairs in parallel and joins them in input order
#[derive(Debug, Clone)]
pub struct SpriteAssembler<R> {
    resolver: R,
    narrow: NarrowPaths,
    options: SpriteOptions,
}

impl<R: IconResolver> SpriteAssembler<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            narrow: NarrowPaths::builtin(),
            options: SpriteOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SpriteOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_narrow_paths(mut self, narrow: NarrowPaths) -> Self {
        self.narrow = narrow;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    /// Build the sprite for `pairs`.
    ///
    /// In strict mode the first icon that cannot be resolved aborts assembly.
    /// Otherwise it becomes an empty symbol and a warning on the document.
    pub fn assemble(&self, pairs: &[IconPair]) -> Result<SpriteDocument, SpriteError> {
        if pairs.is_empty() {
            return Ok(SpriteDocument::default());
        }

        // Modules are cached for this assembly only
        let renderer = IconRenderer::new(CachedResolver::new(&self.resolver))
            .with_narrow_paths(self.narrow.clone());
        let strict = self.options.strict;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.concurrency.unwrap_or(0))
            .thread_name(|index| format!("sprig-sprite-{index}"))
            .build()
            .map_err(|e| SpriteError::Pool(e.to_string()))?;

        let rendered = pool.install(|| {
            pairs
                .par_iter()
                .map(|pair| render_one(&renderer, pair, strict))
                .collect::<Result<Vec<_>, SpriteError>>()
        })?;

        let mut document = SpriteDocument::default();
        for (symbol, warning) in rendered {
            document.symbols.push(symbol);
            document.warnings.extend(warning);
        }

        debug!(
            symbols = document.symbols.len(),
            warnings = document.warnings.len(),
            "assembled sprite"
        );
        Ok(document)
    }
}

fn render_one<R: IconResolver>(
    renderer: &IconRenderer<R>,
    pair: &IconPair,
    strict: bool,
) -> Result<(SymbolDefinition, Option<String>), SpriteError> {
    match renderer.render(pair) {
        Ok(symbol) => Ok((symbol, None)),
        Err(source) if strict => Err(SpriteError::UnresolvedExport {
            library: pair.library.clone(),
            export_name: pair.export_name.clone(),
            source,
        }),
        Err(err) => {
            warn!(icon = %pair, error = %err, "emitting empty symbol for unresolved icon");
            Ok((
                SymbolDefinition::empty(pair.symbol_id()),
                Some(format!("{pair}: {err}")),
            ))
        }
    }
}

/// Render `pairs` into sprite markup in one call
pub fn build_sprite<R: IconResolver>(
    pairs: &[IconPair],
    resolver: R,
    options: &SpriteOptions,
) -> Result<String, SpriteError> {
    SpriteAssembler::new(resolver)
        .with_options(options.clone())
        .assemble(pairs)
        .map(|doc| doc.to_svg())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::resolver::{IconModule, IconValue, StaticResolver};

    fn resolver() -> StaticResolver {
        StaticResolver::new().with_module(
            "pack",
            IconModule::new()
                .with_export("A", IconValue::markup("<svg viewBox=\"0 0 1 1\"><g id=\"a\"/></svg>"))
                .with_export("B", IconValue::markup("<svg viewBox=\"0 0 2 2\"><g id=\"b\"/></svg>")),
        )
    }

    #[test]
    fn test_preserves_input_order() {
        let pairs: Vec<IconPair> = ["B", "A", "B"]
            .iter()
            .map(|name| IconPair::new("pack", *name))
            .collect();
        let doc = SpriteAssembler::new(resolver()).assemble(&pairs).unwrap();
        let ids: Vec<&str> = doc.symbols.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["ri-pack-B", "ri-pack-A", "ri-pack-B"]);
    }

    #[test]
    fn test_lenient_yields_empty_symbol_and_warning() {
        let pairs = vec![IconPair::new("pack", "A"), IconPair::new("gone", "X")];
        let doc = SpriteAssembler::new(resolver()).assemble(&pairs).unwrap();
        assert_eq!(doc.symbols.len(), 2);
        assert!(doc.symbols[1].inner.is_empty());
        assert_eq!(doc.warnings.len(), 1);
        assert!(doc.warnings[0].starts_with("gone:X"));
    }

    #[test]
    fn test_strict_aborts() {
        let pairs = vec![IconPair::new("pack", "A"), IconPair::new("gone", "X")];
        let err = SpriteAssembler::new(resolver())
            .strict(true)
            .assemble(&pairs)
            .unwrap_err();
        assert!(matches!(err, SpriteError::UnresolvedExport { ref library, .. } if library == "gone"));
    }

    #[test]
    fn test_bounded_concurrency() {
        let options = SpriteOptions {
            concurrency: Some(1),
            ..SpriteOptions::default()
        };
        let pairs = vec![IconPair::new("pack", "A")];
        let svg = build_sprite(&pairs, resolver(), &options).unwrap();
        assert!(svg.contains("<symbol id=\"ri-pack-A\" viewBox=\"0 0 1 1\"><g id=\"a\"/></symbol>"));
    }
}
