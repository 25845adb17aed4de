//! Rendering one icon into a `<symbol>` definition

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::ResolveError;
use crate::icon::IconPair;
use crate::sprite::narrow::NarrowPaths;
use crate::sprite::resolver::{IconData, IconModule, IconResolver, IconValue};

/// View box used when the markup declares none
pub const DEFAULT_VIEW_BOX: &str = "0 0 24 24";

/// Root attributes that survive into the symbol
const PRESENTATION_ATTRIBUTES: &[&str] = &[
    "fill",
    "fill-opacity",
    "fill-rule",
    "stroke",
    "stroke-width",
    "stroke-linecap",
    "stroke-linejoin",
    "stroke-miterlimit",
    "stroke-dasharray",
    "stroke-dashoffset",
    "stroke-opacity",
    "color",
    "opacity",
    "shape-rendering",
    "vector-effect",
];

/// XML declaration, doctype and comments ahead of the root element
static PROLOG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)^(?:\s*(?:<\?.*?\?>|<!--.*?-->|<!DOCTYPE[^\[>]*(?:\[.*?\])?\s*>))*\s*")
        .expect("prolog pattern compiles")
});
static ROOT_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)^<svg\b([^>]*)>").expect("root tag pattern compiles"));
static ROOT_CLOSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)</svg\s*>(?:\s*<!--.*?-->)*\s*$").expect("closing tag pattern compiles")
});
static WRAPPER_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</?svg\b[^>]*>").expect("wrapper tag pattern compiles"));
static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([a-zA-Z_:.-]+)\s*=\s*"([^"]*)""#).expect("attribute pattern compiles")
});

/// A reusable `<symbol>` in the sprite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolDefinition {
    pub id: String,
    pub view_box: String,
    /// Presentation attributes in declaration order
    pub attributes: Vec<(String, String)>,
    pub inner: String,
}

impl SymbolDefinition {
    /// Placeholder for an icon that could not be resolved
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            view_box: DEFAULT_VIEW_BOX.to_string(),
            attributes: Vec::new(),
            inner: String::new(),
        }
    }

    /// Build from glyph data: one `<path>` per entry
    pub fn from_data(id: impl Into<String>, data: &IconData) -> Self {
        let inner = data
            .paths
            .iter()
            .map(|d| format!("<path d=\"{}\"/>", escape_attr(d)))
            .collect::<String>();

        Self {
            id: id.into(),
            view_box: format!("0 0 {} {}", data.width, data.height),
            attributes: vec![("fill".to_string(), "currentColor".to_string())],
            inner,
        }
    }

    /// Build from static `<svg>` markup
    ///
    /// A leading XML declaration, doctype or comment is skipped. Attribute
    /// names are lowercased since SVG only honors the lowercase spelling.
    pub fn from_markup(id: impl Into<String>, markup: &str) -> Self {
        let markup = PROLOG.find(markup).map_or(markup, |m| &markup[m.end()..]);
        let (root_attrs, body) = match ROOT_OPEN.captures(markup) {
            Some(caps) => {
                let attrs = caps.get(1).map_or("", |m| m.as_str());
                let end = caps.get(0).map_or(0, |m| m.end());
                // `<svg ... />` has no body
                let body = if attrs.trim_end().ends_with('/') {
                    ""
                } else {
                    &markup[end..]
                };
                (attrs, body)
            }
            None => ("", markup),
        };

        let mut view_box = None;
        let mut attributes = Vec::new();
        for caps in ATTRIBUTE.captures_iter(root_attrs) {
            let (Some(name), Some(value)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let name = name.as_str();
            if name.eq_ignore_ascii_case("viewbox") {
                view_box.get_or_insert_with(|| value.as_str().to_string());
            } else if is_presentation_attribute(name) {
                attributes.push((name.to_ascii_lowercase(), value.as_str().to_string()));
            }
        }

        let body = ROOT_CLOSE.replace(body, "");
        let inner = WRAPPER_TAG.replace_all(&body, "").trim().to_string();

        Self {
            id: id.into(),
            view_box: view_box.unwrap_or_else(|| DEFAULT_VIEW_BOX.to_string()),
            attributes,
            inner,
        }
    }

    pub fn to_markup(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SymbolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<symbol id=\"{}\" viewBox=\"{}\"", self.id, self.view_box)?;
        for (name, value) in &self.attributes {
            write!(f, " {name}=\"{value}\"")?;
        }
        write!(f, ">{}</symbol>", self.inner)
    }
}

fn is_presentation_attribute(name: &str) -> bool {
    PRESENTATION_ATTRIBUTES
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(name))
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

/// Resolves icons through a resolver and renders them to symbols
#[derive(Debug, Clone)]
pub struct IconRenderer<R> {
    resolver: R,
    narrow: NarrowPaths,
}

impl<R: IconResolver> IconRenderer<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            narrow: NarrowPaths::builtin(),
        }
    }

    pub fn with_narrow_paths(mut self, narrow: NarrowPaths) -> Self {
        self.narrow = narrow;
        self
    }

    /// Find the exported value for `pair`.
    ///
    /// Tries the library's per-icon module first when one is known, then the
    /// whole library. In either module the named export is preferred over the
    /// default export.
    pub fn resolve(&self, pair: &IconPair) -> Result<IconValue, ResolveError> {
        if let Some(path) = self.narrow.narrow_path(&pair.library, &pair.export_name) {
            match self
                .resolver
                .load_module(&path)
                .and_then(|module| pick_export(&module, pair))
            {
                Ok(value) => return Ok(value),
                Err(err) => debug!(narrow = %path, error = %err, "falling back to whole library"),
            }
        }

        let module = self.resolver.load_module(&pair.library)?;
        pick_export(&module, pair)
    }

    pub fn render(&self, pair: &IconPair) -> Result<SymbolDefinition, ResolveError> {
        let value = self.resolve(pair)?;
        let id = pair.symbol_id();

        let value = match &value {
            IconValue::DefaultHolder(inner) => inner.as_ref(),
            other => other,
        };
        match value {
            IconValue::Data(data) => Ok(SymbolDefinition::from_data(id, data)),
            IconValue::Component(component) => {
                Ok(SymbolDefinition::from_markup(id, &component.render_static()))
            }
            IconValue::DefaultHolder(_) => Err(ResolveError::NotRenderable {
                library: pair.library.clone(),
                export_name: pair.export_name.clone(),
            }),
        }
    }
}

fn pick_export(module: &IconModule, pair: &IconPair) -> Result<IconValue, ResolveError> {
    module
        .export(&pair.export_name)
        .or_else(|| module.default_export())
        .cloned()
        .ok_or_else(|| ResolveError::ExportNotFound {
            library: pair.library.clone(),
            export_name: pair.export_name.clone(),
        })
}
