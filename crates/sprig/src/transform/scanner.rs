//! Import scanning
//!
//! Builds the map from local binding to icon pair for one module. Only value
//! imports from recognized library sources are tracked.

use oxc_ast::ast::*;
use oxc_span::Span;
use rustc_hash::{FxHashMap, FxHashSet};
use sprig_config::ComponentConfig;

use crate::sources::LibrarySources;

/// A tracked import binding, scoped to one transform pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconReference {
    pub library: String,
    pub export_name: String,
    pub local: String,
}

/// Tracked bindings of one module plus the import statements they came from
#[derive(Debug, Default)]
pub struct ImportScan {
    pub references: FxHashMap<String, IconReference>,
    pub statements: FxHashSet<Span>,
}

impl ImportScan {
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    pub fn get(&self, local: &str) -> Option<&IconReference> {
        self.references.get(local)
    }
}

/// Collect icon imports from the top level of `program`
pub fn scan_imports(program: &Program<'_>, sources: &LibrarySources) -> ImportScan {
    let mut scan = ImportScan::default();

    for stmt in &program.body {
        let Statement::ImportDeclaration(decl) = stmt else {
            continue;
        };
        if decl.import_kind.is_type() || !sources.matches(decl.source.value.as_str()) {
            continue;
        }
        let Some(specifiers) = &decl.specifiers else {
            continue;
        };

        let library = decl.source.value.as_str();
        let mut tracked = false;

        for spec in specifiers {
            let (export_name, local) = match spec {
                ImportDeclarationSpecifier::ImportSpecifier(s) => {
                    if s.import_kind.is_type() {
                        continue;
                    }
                    (export_name(&s.imported), s.local.name.as_str())
                }
                ImportDeclarationSpecifier::ImportDefaultSpecifier(s) => {
                    ("default", s.local.name.as_str())
                }
                ImportDeclarationSpecifier::ImportNamespaceSpecifier(_) => continue,
            };

            scan.references.insert(
                local.to_string(),
                IconReference {
                    library: library.to_string(),
                    export_name: export_name.to_string(),
                    local: local.to_string(),
                },
            );
            tracked = true;
        }

        if tracked {
            scan.statements.insert(decl.span);
        }
    }

    scan
}

/// Local name of an existing import of the shared component, if any
pub fn find_component_import(program: &Program<'_>, component: &ComponentConfig) -> Option<String> {
    program.body.iter().find_map(|stmt| {
        let Statement::ImportDeclaration(decl) = stmt else {
            return None;
        };
        if decl.import_kind.is_type() || decl.source.value.as_str() != component.source {
            return None;
        }

        decl.specifiers.as_ref()?.iter().find_map(|spec| match spec {
            ImportDeclarationSpecifier::ImportSpecifier(s)
                if !s.import_kind.is_type() && export_name(&s.imported) == component.name =>
            {
                Some(s.local.name.to_string())
            }
            _ => None,
        })
    })
}

fn export_name<'b>(name: &'b ModuleExportName<'_>) -> &'b str {
    match name {
        ModuleExportName::IdentifierName(ident) => ident.name.as_str(),
        ModuleExportName::IdentifierReference(ident) => ident.name.as_str(),
        ModuleExportName::StringLiteral(lit) => lit.value.as_str(),
    }
}
