//! Error types for the icon transform and sprite assembly

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced while rewriting a single module
#[derive(Error, Debug, Diagnostic)]
pub enum TransformError {
    /// Module text could not be parsed; the module is left unmodified
    #[error("Failed to parse {id}")]
    #[diagnostic(
        code(sprig::transform::parse_failure),
        help("The module is emitted unchanged; fix the syntax error to enable icon rewriting")
    )]
    Parse {
        id: String,
        #[source]
        source: sprig_gen::GenError,
    },

    /// A library-source pattern is not a valid regular expression
    #[error("Invalid library source pattern `{pattern}`: {reason}")]
    #[diagnostic(code(sprig::transform::invalid_pattern))]
    InvalidPattern { pattern: String, reason: String },
}

impl TransformError {
    pub(crate) fn parse(id: impl Into<String>, source: sprig_gen::GenError) -> Self {
        Self::Parse {
            id: id.into(),
            source,
        }
    }
}

/// Errors produced while loading an icon module
///
/// Cloneable so a cached failure can be handed to every icon that asks for
/// the same specifier.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No module exists for the specifier
    #[error("Icon module not found: {specifier}")]
    #[diagnostic(code(sprig::resolve::module_not_found))]
    ModuleNotFound { specifier: String },

    /// The module loaded but neither the export nor a default export exist
    #[error("Icon `{export_name}` is not exported by `{library}`")]
    #[diagnostic(code(sprig::resolve::export_not_found))]
    ExportNotFound {
        library: String,
        export_name: String,
    },

    /// The exported value is neither glyph data nor a renderable unit
    #[error("Icon `{export_name}` from `{library}` cannot be rendered")]
    #[diagnostic(code(sprig::resolve::not_renderable))]
    NotRenderable {
        library: String,
        export_name: String,
    },

    /// Reading or decoding the module failed
    #[error("Failed to load icon module {specifier}: {reason}")]
    #[diagnostic(code(sprig::resolve::load_failed))]
    Load { specifier: String, reason: String },
}

impl ResolveError {
    pub fn not_found(specifier: impl Into<String>) -> Self {
        Self::ModuleNotFound {
            specifier: specifier.into(),
        }
    }

    pub fn load(specifier: impl Into<String>, reason: impl ToString) -> Self {
        Self::Load {
            specifier: specifier.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ModuleNotFound { .. })
    }
}

/// Errors that abort sprite assembly
#[derive(Error, Debug, Diagnostic)]
pub enum SpriteError {
    /// Strict mode: an icon could not be resolved after every fallback
    #[error("Unresolved icon export `{export_name}` from `{library}`")]
    #[diagnostic(
        code(sprig::sprite::unresolved_export),
        help("Check the import, or disable `sprite.strict` to emit an empty symbol instead")
    )]
    UnresolvedExport {
        library: String,
        export_name: String,
        #[source]
        source: ResolveError,
    },

    /// The bounded render pool could not be created
    #[error("Failed to start sprite render pool: {0}")]
    #[diagnostic(code(sprig::sprite::pool))]
    Pool(String),
}

/// Result type for transform operations
pub type Result<T> = std::result::Result<T, TransformError>;
