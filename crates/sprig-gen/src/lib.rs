//! Parse, rewrite and print JavaScript/TypeScript modules using OXC
//!
//! sprig touches source code through exactly three operations:
//!
//! - [`parse`] turns module text into a [`ParsedProgram`] living in an arena
//! - callers mutate `ParsedProgram::ast_mut()` in place, building new nodes
//!   with [`JsxBuilder`]
//! - [`print`] regenerates source text and an optional source map
//!
//! # Example
//!
//! ```rust
//! use sprig_gen::{Allocator, JsxBuilder, ParseOptions, PrintOptions, parse, print};
//!
//! let allocator = Allocator::default();
//! let mut parsed = parse(&allocator, "const a = 1;", ParseOptions::tsx())?;
//! let import = JsxBuilder::new(&allocator).named_import("Icon", "Icon", "icons");
//! parsed.ast_mut().body.insert(0, import);
//!
//! let out = print(parsed.ast(), &PrintOptions::default());
//! assert!(out.code.starts_with("import { Icon } from \"icons\";"));
//! # Ok::<(), sprig_gen::GenError>(())
//! ```

mod error;
mod jsx;
mod parser;
mod printer;

pub use error::{GenError, Result};
pub use jsx::JsxBuilder;
pub use parser::{ParseOptions, ParsedProgram, parse, strip_query};
pub use printer::{PrintOptions, PrintOutput, print};

// Re-export commonly used OXC types for convenience
pub use oxc_allocator::Allocator;
pub use oxc_span::{Atom, SPAN, Span};
