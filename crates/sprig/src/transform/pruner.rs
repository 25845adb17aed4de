//! Import pruning and shared component import insertion

use oxc_ast::ast::*;
use oxc_ast_visit::Visit;
use oxc_span::Span;
use rustc_hash::FxHashSet;
use sprig_gen::JsxBuilder;

use crate::transform::scanner::ImportScan;

/// Insert `import { name as local } from "source"` after the first import,
/// or at the top of the module when there is none
pub fn insert_component_import<'a>(
    program: &mut Program<'a>,
    builder: JsxBuilder<'a>,
    name: &str,
    local: &str,
    source: &str,
) {
    let index = program
        .body
        .iter()
        .position(|stmt| matches!(stmt, Statement::ImportDeclaration(_)))
        .map_or(0, |first| first + 1);
    program
        .body
        .insert(index, builder.named_import(name, local, source));
}

/// Remove consumed specifiers from tracked imports.
///
/// Unlike unconditional pruning of every consumed specifier, a binding that
/// is still used elsewhere (say `icon={FaBeer}`) keeps its import.
/// A specifier is only removed when its binding is no longer referenced
/// anywhere in the module. Statements emptied by this pass are dropped;
/// statements that never had specifiers are kept. Returns the number of
/// specifiers removed.
pub fn prune_imports(
    program: &mut Program<'_>,
    scan: &ImportScan,
    consumed: &FxHashSet<String>,
) -> usize {
    let still_used = ReferenceFinder::run(program, consumed);
    let removable = |local: &str| consumed.contains(local) && !still_used.contains(local);

    let mut removed = 0;
    let mut emptied: FxHashSet<Span> = FxHashSet::default();

    for stmt in program.body.iter_mut() {
        let Statement::ImportDeclaration(decl) = stmt else {
            continue;
        };
        if !scan.statements.contains(&decl.span) {
            continue;
        }
        let Some(specifiers) = decl.specifiers.as_mut() else {
            continue;
        };

        let before = specifiers.len();
        specifiers.retain(|spec| !removable(specifier_local(spec)));
        let after = specifiers.len();

        removed += before - after;
        if after == 0 && before > 0 {
            emptied.insert(decl.span);
        }
    }

    if !emptied.is_empty() {
        program.body.retain(
            |stmt| !matches!(stmt, Statement::ImportDeclaration(decl) if emptied.contains(&decl.span)),
        );
    }

    removed
}

fn specifier_local<'b>(spec: &'b ImportDeclarationSpecifier<'_>) -> &'b str {
    match spec {
        ImportDeclarationSpecifier::ImportSpecifier(s) => s.local.name.as_str(),
        ImportDeclarationSpecifier::ImportDefaultSpecifier(s) => s.local.name.as_str(),
        ImportDeclarationSpecifier::ImportNamespaceSpecifier(s) => s.local.name.as_str(),
    }
}

/// Finds which of the given names are still referenced in a program
struct ReferenceFinder<'n> {
    names: &'n FxHashSet<String>,
    found: FxHashSet<String>,
}

impl<'n> ReferenceFinder<'n> {
    fn run(program: &Program<'_>, names: &'n FxHashSet<String>) -> FxHashSet<String> {
        let mut finder = Self {
            names,
            found: FxHashSet::default(),
        };
        finder.visit_program(program);
        finder.found
    }
}

impl<'a> Visit<'a> for ReferenceFinder<'_> {
    fn visit_identifier_reference(&mut self, it: &IdentifierReference<'a>) {
        let name = it.name.as_str();
        if self.names.contains(name) && !self.found.contains(name) {
            self.found.insert(name.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::LibrarySources;
    use crate::transform::scanner::scan_imports;
    use sprig_gen::{Allocator, ParseOptions, PrintOptions, parse, print};

    fn prune(source: &str, consumed: &[&str]) -> (String, usize) {
        let allocator = Allocator::default();
        let mut parsed = parse(&allocator, source, ParseOptions::tsx()).unwrap();
        let scan = scan_imports(parsed.ast(), &LibrarySources::default());
        let consumed: FxHashSet<String> = consumed.iter().map(|s| s.to_string()).collect();
        let removed = prune_imports(parsed.ast_mut(), &scan, &consumed);
        (print(parsed.ast(), &PrintOptions::default()).code, removed)
    }

    #[test]
    fn test_partial_prune_keeps_unconsumed_specifier() {
        let (code, removed) = prune("import { FaBeer, FaHome } from 'react-icons/fa';\n", &["FaBeer"]);
        assert_eq!(removed, 1);
        assert!(code.contains("FaHome"));
        assert!(!code.contains("FaBeer"));
    }

    #[test]
    fn test_fully_consumed_statement_is_removed() {
        let (code, removed) = prune(
            "import { FaBeer } from 'react-icons/fa';\nimport React from 'react';\n",
            &["FaBeer"],
        );
        assert_eq!(removed, 1);
        assert!(!code.contains("react-icons/fa"));
        assert!(code.contains("import React from \"react\""));
    }

    #[test]
    fn test_still_referenced_binding_is_kept() {
        let (code, removed) = prune(
            "import { FaBeer } from 'react-icons/fa';\nconst icons = [FaBeer];\n",
            &["FaBeer"],
        );
        assert_eq!(removed, 0);
        assert!(code.contains("import { FaBeer } from \"react-icons/fa\""));
    }

    #[test]
    fn test_insert_after_first_import() {
        let allocator = Allocator::default();
        let mut parsed = parse(
            &allocator,
            "'use client';\nimport a from 'a';\nimport b from 'b';\n",
            ParseOptions::tsx(),
        )
        .unwrap();
        insert_component_import(
            parsed.ast_mut(),
            JsxBuilder::new(&allocator),
            "ReactIconsSpriteIcon",
            "ReactIconsSpriteIcon",
            "react-icons-sprite",
        );
        let code = print(parsed.ast(), &PrintOptions::default()).code;
        let a = code.find("from \"a\"").unwrap();
        let shared = code.find("react-icons-sprite").unwrap();
        let b = code.find("from \"b\"").unwrap();
        assert!(a < shared && shared < b);
    }

    #[test]
    fn test_insert_at_top_without_imports() {
        let allocator = Allocator::default();
        let mut parsed = parse(&allocator, "const x = 1;\n", ParseOptions::tsx()).unwrap();
        insert_component_import(
            parsed.ast_mut(),
            JsxBuilder::new(&allocator),
            "ReactIconsSpriteIcon",
            "RIS",
            "react-icons-sprite",
        );
        let code = print(parsed.ast(), &PrintOptions::default()).code;
        assert!(code.starts_with("import { ReactIconsSpriteIcon as RIS } from \"react-icons-sprite\";"));
    }
}
