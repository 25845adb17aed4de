//! Node construction helpers for the rewrites sprig performs
//!
//! Wraps OXC's `AstBuilder` so JSX names, string attributes and named imports
//! are built the same way everywhere.

use oxc_allocator::Allocator;
use oxc_ast::ast::*;
use oxc_ast::{AstBuilder, NONE};
use oxc_span::{Atom, SPAN};

/// JSX and import node builder
#[derive(Clone, Copy)]
pub struct JsxBuilder<'a> {
    ast: AstBuilder<'a>,
}

impl<'a> JsxBuilder<'a> {
    /// Create a new builder
    pub fn new(alloc: &'a Allocator) -> Self {
        Self {
            ast: AstBuilder::new(alloc),
        }
    }

    /// Get the underlying AST builder
    pub fn ast(&self) -> &AstBuilder<'a> {
        &self.ast
    }

    /// Copy a string into the arena
    pub fn atom(&self, value: &str) -> Atom<'a> {
        self.ast.atom(value)
    }

    /// Element name referring to a component binding: `<Name`
    pub fn component_name(&self, name: &str) -> JSXElementName<'a> {
        let ident = self.ast.identifier_reference(SPAN, self.atom(name));
        JSXElementName::IdentifierReference(self.ast.alloc(ident))
    }

    /// Create a JSX string attribute: `name="value"`
    pub fn string_attr(&self, name: &str, value: &str) -> JSXAttributeItem<'a> {
        let attr_name = self.ast.jsx_attribute_name_identifier(SPAN, self.atom(name));
        let literal = self.ast.string_literal(SPAN, self.atom(value), None);
        let value = JSXAttributeValue::StringLiteral(self.ast.alloc(literal));
        let attr = self.ast.jsx_attribute(SPAN, attr_name, Some(value));
        JSXAttributeItem::Attribute(self.ast.alloc(attr))
    }

    /// Create `import { imported as local } from "source";`
    ///
    /// When `imported == local` the codegen prints the short form.
    pub fn named_import(&self, imported: &str, local: &str, source: &str) -> Statement<'a> {
        let imported_name = self
            .ast
            .module_export_name_identifier_name(SPAN, self.atom(imported));
        let local_binding = self.ast.binding_identifier(SPAN, self.atom(local));
        let specifier = self.ast.import_specifier(
            SPAN,
            imported_name,
            local_binding,
            ImportOrExportKind::Value,
        );
        let specifiers = self
            .ast
            .vec1(ImportDeclarationSpecifier::ImportSpecifier(self.ast.alloc(specifier)));
        let source_literal = self.ast.string_literal(SPAN, self.atom(source), None);
        let decl = self.ast.import_declaration(
            SPAN,
            Some(specifiers),
            source_literal,
            None,
            NONE,
            ImportOrExportKind::Value,
        );
        Statement::ImportDeclaration(self.ast.alloc(decl))
    }
}
