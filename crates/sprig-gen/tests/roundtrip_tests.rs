//! Parse → mutate → print tests for the syntax boundary

use oxc_ast::ast::{JSXAttributeItem, JSXOpeningElement, Statement};
use oxc_ast_visit::{VisitMut, walk_mut};
use sprig_gen::{Allocator, JsxBuilder, ParseOptions, PrintOptions, parse, print};

fn roundtrip(source: &str, filename: &str) -> String {
    let allocator = Allocator::default();
    let parsed = parse(&allocator, source, ParseOptions::from_path(filename))
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", filename, e));
    print(parsed.ast(), &PrintOptions::default()).code
}

#[test]
fn test_parse_and_regenerate_is_stable() {
    let source = r#"
        import React from "react";
        import { BiAlarm as Alarm } from "react-icons/bi";
        export const C = () => <div><Alarm className="x" /></div>;
    "#;
    let first = roundtrip(source, "C.tsx");
    let second = roundtrip(&first, "C.tsx");
    assert_eq!(first, second);
}

#[test]
fn test_typescript_type_imports_survive() {
    let out = roundtrip(
        "import type { IconType } from 'react-icons';\nexport let t: IconType | null = null;",
        "types.ts",
    );
    assert!(out.contains("import type { IconType }"));
}

struct RenameTo<'a> {
    builder: JsxBuilder<'a>,
}

impl<'a> VisitMut<'a> for RenameTo<'a> {
    fn visit_jsx_opening_element(&mut self, it: &mut JSXOpeningElement<'a>) {
        it.name = self.builder.component_name("Icon");
        it.attributes
            .insert(0, self.builder.string_attr("iconId", "ri-x-Y"));
        walk_mut::walk_jsx_opening_element(self, it);
    }
}

#[test]
fn test_mutation_is_printed() {
    let allocator = Allocator::default();
    let mut parsed = parse(
        &allocator,
        "const el = <Foo title=\"t\" />;",
        ParseOptions::tsx(),
    )
    .unwrap();

    let mut visitor = RenameTo {
        builder: JsxBuilder::new(&allocator),
    };
    visitor.visit_program(parsed.ast_mut());

    let out = print(parsed.ast(), &PrintOptions::default()).code;
    assert!(out.contains("<Icon iconId=\"ri-x-Y\" title=\"t\""), "{out}");
}

#[test]
fn test_named_import_alias() {
    let allocator = Allocator::default();
    let mut parsed = parse(&allocator, "", ParseOptions::tsx()).unwrap();
    let builder = JsxBuilder::new(&allocator);
    parsed
        .ast_mut()
        .body
        .push(builder.named_import("Icon", "SpriteIcon", "sprites"));

    assert!(matches!(parsed.ast().body[0], Statement::ImportDeclaration(_)));
    let out = print(parsed.ast(), &PrintOptions::default()).code;
    assert!(out.contains("import { Icon as SpriteIcon } from \"sprites\""));
}

#[test]
fn test_string_attr_is_plain_attribute() {
    let allocator = Allocator::default();
    let builder = JsxBuilder::new(&allocator);
    assert!(matches!(
        builder.string_attr("iconId", "x"),
        JSXAttributeItem::Attribute(_)
    ));
}
