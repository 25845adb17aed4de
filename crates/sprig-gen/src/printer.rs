//! Printing a (possibly mutated) program back to source text

use oxc_ast::ast::Program;
use oxc_codegen::{Codegen, CodegenOptions};
use std::path::PathBuf;

/// Options for printing a program
#[derive(Debug, Clone, Default)]
pub struct PrintOptions {
    /// Emit a source map whose source name is this path
    pub source_map_path: Option<String>,
}

impl PrintOptions {
    /// Print with a source map pointing back at `id`
    pub fn with_source_map(id: impl Into<String>) -> Self {
        Self {
            source_map_path: Some(id.into()),
        }
    }
}

/// Generated code plus its optional source map
#[derive(Debug, Clone)]
pub struct PrintOutput {
    /// Generated source text
    pub code: String,
    /// Source map serialized as JSON
    pub source_map: Option<String>,
}

/// Print a program to source text
pub fn print(program: &Program<'_>, options: &PrintOptions) -> PrintOutput {
    let codegen_options = CodegenOptions {
        source_map_path: options.source_map_path.as_ref().map(PathBuf::from),
        ..CodegenOptions::default()
    };

    let result = Codegen::new().with_options(codegen_options).build(program);

    PrintOutput {
        code: result.code,
        source_map: result.map.map(|map| map.to_json_string()),
    }
}
