//! Module transform: scan icon imports, rewrite icon elements, prune imports
//!
//! One module goes through scan → rewrite → prune → print. Every icon the
//! rewrite touches is reported through a registration callback (or straight
//! into an [`IconCollector`]).

pub mod pruner;
pub mod rewriter;
pub mod scanner;

use rayon::prelude::*;
use sprig_config::{ComponentConfig, ProxyComponent, SprigConfig};
use sprig_gen::{Allocator, JsxBuilder, ParseOptions, PrintOptions, parse, print};
use tracing::{debug, warn};

use crate::collector::IconCollector;
use crate::error::{Result, TransformError};
use crate::icon::IconPair;
use crate::sources::LibrarySources;

pub use rewriter::RewriteOutcome;
pub use scanner::{IconReference, ImportScan};

/// Result of transforming one module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
    /// Rewritten source, or the original text when nothing changed
    pub code: String,
    /// Source map JSON; only present when the module was rewritten
    pub source_map: Option<String>,
    /// Whether any element was rewritten
    pub modified: bool,
    /// Contained, non-fatal problems (e.g. a parse failure)
    pub diagnostics: Vec<String>,
}

impl TransformOutput {
    pub fn unchanged(source: &str) -> Self {
        Self {
            code: source.to_string(),
            source_map: None,
            modified: false,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_diagnostic(mut self, diagnostic: impl Into<String>) -> Self {
        self.diagnostics.push(diagnostic.into());
        self
    }
}

/// A module handed to [`IconTransformer::transform_modules`]
#[derive(Debug, Clone)]
pub struct ModuleSource {
    pub id: String,
    pub code: String,
}

impl ModuleSource {
    pub fn new(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
        }
    }
}

/// Settings shared by every module transform of a build
#[derive(Debug, Clone)]
pub struct TransformOptions {
    pub sources: LibrarySources,
    pub component: ComponentConfig,
    pub proxies: Vec<ProxyComponent>,
    /// Configured source patterns that failed to compile and were skipped
    pub rejected_sources: Vec<String>,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            sources: LibrarySources::default(),
            component: ComponentConfig::default(),
            proxies: vec![ProxyComponent::font_awesome()],
            rejected_sources: Vec::new(),
        }
    }
}

impl TransformOptions {
    pub fn from_config(config: &SprigConfig) -> Self {
        let (sources, rejected) = LibrarySources::lenient(config.all_sources());
        Self {
            sources,
            component: config.component.clone(),
            proxies: config.proxies.clone(),
            rejected_sources: rejected.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn with_sources(mut self, sources: LibrarySources) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_component(mut self, component: ComponentConfig) -> Self {
        self.component = component;
        self
    }

    pub fn with_proxies(mut self, proxies: Vec<ProxyComponent>) -> Self {
        self.proxies = proxies;
        self
    }
}

/// Rewrites icon-library usages in modules to the shared sprite component
#[derive(Debug, Clone, Default)]
pub struct IconTransformer {
    options: TransformOptions,
}

impl IconTransformer {
    pub fn new(options: TransformOptions) -> Self {
        Self { options }
    }

    pub fn from_config(config: &SprigConfig) -> Self {
        Self::new(TransformOptions::from_config(config))
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Problems found while building the options, such as skipped patterns
    pub fn warnings(&self) -> &[String] {
        &self.options.rejected_sources
    }

    /// Transform one module, containing parse failures.
    ///
    /// A module that fails to parse comes back unchanged with the failure in
    /// `diagnostics`; it never aborts the build.
    pub fn transform(
        &self,
        source: &str,
        id: &str,
        register: &mut dyn FnMut(&str, &str),
    ) -> TransformOutput {
        match self.try_transform(source, id, register) {
            Ok(output) => output,
            Err(err) => {
                warn!(module = id, error = %err, "leaving module unchanged");
                TransformOutput::unchanged(source).with_diagnostic(diagnostic_message(&err))
            }
        }
    }

    /// Transform one module, registering icons into `collector`
    pub fn transform_into(&self, source: &str, id: &str, collector: &IconCollector) -> TransformOutput {
        self.transform(source, id, &mut |library: &str, export_name: &str| {
            collector.add(library, export_name);
        })
    }

    /// Transform one module, surfacing parse failures as errors
    pub fn try_transform(
        &self,
        source: &str,
        id: &str,
        register: &mut dyn FnMut(&str, &str),
    ) -> Result<TransformOutput> {
        // Nothing can be tracked without an import statement
        if !source.contains("import") {
            return Ok(TransformOutput::unchanged(source));
        }

        let allocator = Allocator::default();
        let mut parsed = parse(&allocator, source, ParseOptions::from_path(id))
            .map_err(|err| TransformError::parse(id, err))?;

        let scan = scanner::scan_imports(parsed.ast(), &self.options.sources);
        if scan.is_empty() {
            return Ok(TransformOutput::unchanged(source));
        }

        let component = &self.options.component;
        let existing = scanner::find_component_import(parsed.ast(), component);
        let component_local = existing.as_deref().unwrap_or(&component.name);

        let builder = JsxBuilder::new(&allocator);
        let context = rewriter::RewriteContext {
            scan: &scan,
            component_local,
            id_attribute: &component.id_attribute,
            proxies: &self.options.proxies,
        };
        let outcome = rewriter::rewrite_elements(parsed.ast_mut(), builder, &context, register);

        if outcome.rewritten == 0 {
            return Ok(TransformOutput::unchanged(source));
        }

        if existing.is_none() {
            pruner::insert_component_import(
                parsed.ast_mut(),
                builder,
                &component.name,
                component_local,
                &component.source,
            );
        }
        let pruned = pruner::prune_imports(parsed.ast_mut(), &scan, &outcome.consumed);

        debug!(
            module = id,
            rewritten = outcome.rewritten,
            pruned,
            "rewrote icon elements"
        );

        let printed = print(parsed.ast(), &PrintOptions::with_source_map(id));
        Ok(TransformOutput {
            code: printed.code,
            source_map: printed.source_map,
            modified: true,
            diagnostics: Vec::new(),
        })
    }

    /// Transform many modules in parallel.
    ///
    /// Registrations are buffered per module and merged into `collector` in
    /// input order, so the collector's order does not depend on which worker
    /// finished first. Outputs are returned in input order.
    pub fn transform_modules(
        &self,
        modules: &[ModuleSource],
        collector: &IconCollector,
    ) -> Vec<TransformOutput> {
        let results: Vec<(TransformOutput, Vec<IconPair>)> = modules
            .par_iter()
            .map(|module| {
                let mut registered = Vec::new();
                let mut register = |library: &str, export_name: &str| {
                    registered.push(IconPair::new(library, export_name));
                };
                let output = self.transform(&module.code, &module.id, &mut register);
                (output, registered)
            })
            .collect();

        results
            .into_iter()
            .map(|(output, registered)| {
                collector.extend(&registered);
                output
            })
            .collect()
    }
}

/// Transform one module with the default component and proxies.
///
/// `sources` overrides the default library-source table when given.
pub fn transform_module(
    source: &str,
    id: &str,
    register: &mut dyn FnMut(&str, &str),
    sources: Option<&LibrarySources>,
) -> TransformOutput {
    let mut options = TransformOptions::default();
    if let Some(sources) = sources {
        options.sources = sources.clone();
    }
    IconTransformer::new(options).transform(source, id, register)
}

fn diagnostic_message(err: &TransformError) -> String {
    match err {
        TransformError::Parse { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}
