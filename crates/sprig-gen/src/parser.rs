//! Reading modules into an OXC arena
//!
//! Every module sprig rewrites goes through [`parse`]; callers never touch
//! `oxc_parser` directly.

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::error::{GenError, Result};

/// How a module's text should be read
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Dialect handed to the parser
    pub source_type: SourceType,
    /// Module id echoed back in [`GenError::ParseFailed`]
    pub filename: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::tsx()
    }
}

impl ParseOptions {
    /// Pick the dialect from a bundler module id
    ///
    /// A query suffix such as `?raw` does not take part in detection. Ids with
    /// an unrecognized extension read as TSX, and `.js`/`.mjs`/`.cjs` modules
    /// always accept JSX since icon components are routinely written there.
    pub fn from_path(id: &str) -> Self {
        let source_type = SourceType::from_path(strip_query(id))
            .map(|st| if st.is_typescript() { st } else { st.with_jsx(true) })
            .unwrap_or_else(|_| SourceType::tsx());
        Self::with_source_type(source_type, id)
    }

    pub fn tsx() -> Self {
        Self::with_source_type(SourceType::tsx(), "module.tsx")
    }

    pub fn jsx() -> Self {
        Self::with_source_type(SourceType::jsx(), "module.jsx")
    }

    fn with_source_type(source_type: SourceType, filename: impl Into<String>) -> Self {
        Self {
            source_type,
            filename: filename.into(),
        }
    }
}

/// `src/App.tsx?v=3` -> `src/App.tsx`
pub fn strip_query(id: &str) -> &str {
    id.split_once('?').map_or(id, |(path, _)| path)
}

/// A module AST owned by the caller's arena
pub struct ParsedProgram<'a> {
    program: Program<'a>,
}

impl<'a> ParsedProgram<'a> {
    pub fn ast(&self) -> &Program<'a> {
        &self.program
    }

    pub fn ast_mut(&mut self) -> &mut Program<'a> {
        &mut self.program
    }
}

/// Parse `source` into `allocator`
///
/// OXC recovers from many syntax errors and still hands back a partial tree.
/// A partial tree is never rewritten: any reported error fails the parse, so
/// a broken module reaches the bundler untouched and the bundler reports it.
///
/// # Errors
///
/// [`GenError::ParseFailed`] carrying every message the parser produced.
pub fn parse<'a>(
    allocator: &'a Allocator,
    source: &'a str,
    options: ParseOptions,
) -> Result<ParsedProgram<'a>> {
    let ret = Parser::new(allocator, source, options.source_type).parse();

    if ret.panicked || !ret.errors.is_empty() {
        let messages = ret.errors.iter().map(ToString::to_string).collect();
        return Err(GenError::parse_failed(options.filename, messages));
    }

    Ok(ParsedProgram {
        program: ret.program,
    })
}
