//! Element rewriting
//!
//! Renames every JSX element whose tag is a tracked icon binding to the shared
//! component, attaches the symbol id attribute and reports the icon.

use oxc_ast::ast::*;
use oxc_ast_visit::{VisitMut, walk_mut};
use rustc_hash::FxHashSet;
use sprig_config::ProxyComponent;
use sprig_gen::JsxBuilder;
use tracing::debug;

use crate::icon::symbol_id;
use crate::transform::scanner::{IconReference, ImportScan};

/// What the rewrite pass did to one module
#[derive(Debug, Default)]
pub struct RewriteOutcome {
    /// Number of opening elements rewritten
    pub rewritten: usize,
    /// Local bindings whose elements were replaced
    pub consumed: FxHashSet<String>,
}

/// Inputs of the rewrite pass that stay fixed for a module
pub struct RewriteContext<'s> {
    pub scan: &'s ImportScan,
    /// Local name bound to the shared component in this module
    pub component_local: &'s str,
    pub id_attribute: &'s str,
    pub proxies: &'s [ProxyComponent],
}

/// Rewrite all icon elements in `program`, calling `register` for each one
pub fn rewrite_elements<'a>(
    program: &mut Program<'a>,
    builder: JsxBuilder<'a>,
    context: &RewriteContext<'_>,
    register: &mut dyn FnMut(&str, &str),
) -> RewriteOutcome {
    let mut rewriter = ElementRewriter {
        builder,
        context,
        register,
        outcome: RewriteOutcome::default(),
    };
    rewriter.visit_program(program);
    rewriter.outcome
}

struct ElementRewriter<'s, 'a, 'r> {
    builder: JsxBuilder<'a>,
    context: &'s RewriteContext<'s>,
    register: &'r mut dyn FnMut(&str, &str),
    outcome: RewriteOutcome,
}

impl<'s, 'a> ElementRewriter<'s, 'a, '_> {
    /// Tracked reference for a tag, unless the tag already is the shared component
    fn tracked(&self, name: &JSXElementName<'a>) -> Option<&'s IconReference> {
        let scan: &'s ImportScan = self.context.scan;
        let tag = element_ident(name)?;
        if tag == self.context.component_local {
            return None;
        }
        scan.get(tag)
    }

    fn proxy_prop(&self, reference: &IconReference) -> Option<&'s str> {
        let proxies: &'s [ProxyComponent] = self.context.proxies;
        proxies
            .iter()
            .find(|p| p.library == reference.library && p.export_name == reference.export_name)
            .map(|p| p.prop.as_str())
    }

    /// Index of `prop` and the tracked icon it references, when the value is
    /// a plain `{Identifier}`
    fn proxied_icon(
        &self,
        opening: &JSXOpeningElement<'a>,
        prop: &str,
    ) -> Option<(usize, &'s IconReference)> {
        let scan: &'s ImportScan = self.context.scan;
        opening
            .attributes
            .iter()
            .enumerate()
            .find_map(|(index, item)| {
                let JSXAttributeItem::Attribute(attr) = item else {
                    return None;
                };
                if !attr_is(attr, prop) {
                    return None;
                }
                let Some(JSXAttributeValue::ExpressionContainer(container)) = &attr.value else {
                    return None;
                };
                let JSXExpression::Identifier(ident) = &container.expression else {
                    return None;
                };
                scan.get(ident.name.as_str()).map(|icon| (index, icon))
            })
    }

    fn rewrite_opening(&mut self, opening: &mut JSXOpeningElement<'a>) {
        let Some(reference) = self.tracked(&opening.name) else {
            return;
        };
        self.outcome.consumed.insert(reference.local.clone());

        let mut effective = reference;
        if let Some(prop) = self.proxy_prop(reference) {
            match self.proxied_icon(opening, prop) {
                Some((index, icon)) => {
                    effective = icon;
                    self.outcome.consumed.insert(icon.local.clone());
                    opening.attributes.remove(index);
                }
                None => debug!(
                    proxy = %reference.export_name,
                    prop,
                    "proxy prop is not a tracked identifier, using the proxy itself"
                ),
            }
        }

        opening.name = self.builder.component_name(self.context.component_local);

        let id_attribute = self.context.id_attribute;
        let has_id = opening.attributes.iter().any(|item| {
            matches!(item, JSXAttributeItem::Attribute(attr) if attr_is(attr, id_attribute))
        });
        if !has_id {
            let id = symbol_id(&effective.library, &effective.export_name);
            opening
                .attributes
                .insert(0, self.builder.string_attr(id_attribute, &id));
        }

        (self.register)(&effective.library, &effective.export_name);
        self.outcome.rewritten += 1;
    }

    fn rewrite_closing(&mut self, closing: &mut JSXClosingElement<'a>) {
        if self.tracked(&closing.name).is_some() {
            closing.name = self.builder.component_name(self.context.component_local);
        }
    }
}

impl<'a> VisitMut<'a> for ElementRewriter<'_, 'a, '_> {
    fn visit_jsx_element(&mut self, it: &mut JSXElement<'a>) {
        self.rewrite_opening(&mut it.opening_element);
        if let Some(closing) = it.closing_element.as_mut() {
            self.rewrite_closing(closing);
        }
        walk_mut::walk_jsx_element(self, it);
    }
}

/// Plain identifier of a tag name; member and namespaced tags never match
pub(crate) fn element_ident<'b>(name: &'b JSXElementName<'_>) -> Option<&'b str> {
    match name {
        JSXElementName::IdentifierReference(ident) => Some(ident.name.as_str()),
        JSXElementName::Identifier(ident) => Some(ident.name.as_str()),
        _ => None,
    }
}

fn attr_is(attr: &JSXAttribute<'_>, name: &str) -> bool {
    matches!(&attr.name, JSXAttributeName::Identifier(ident) if ident.name.as_str() == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::LibrarySources;
    use crate::transform::scanner::scan_imports;
    use sprig_gen::{Allocator, ParseOptions, PrintOptions, parse, print};

    fn rewrite(source: &str, proxies: &[ProxyComponent]) -> (String, RewriteOutcome, Vec<(String, String)>) {
        let allocator = Allocator::default();
        let mut parsed = parse(&allocator, source, ParseOptions::tsx()).unwrap();
        let scan = scan_imports(parsed.ast(), &LibrarySources::default());
        let context = RewriteContext {
            scan: &scan,
            component_local: "ReactIconsSpriteIcon",
            id_attribute: "iconId",
            proxies,
        };
        let mut seen = Vec::new();
        let outcome = rewrite_elements(
            parsed.ast_mut(),
            JsxBuilder::new(&allocator),
            &context,
            &mut |lib: &str, name: &str| seen.push((lib.to_string(), name.to_string())),
        );
        let code = print(parsed.ast(), &PrintOptions::default()).code;
        (code, outcome, seen)
    }

    #[test]
    fn test_renames_opening_and_closing_tags() {
        let (code, outcome, seen) = rewrite(
            "import { FaBeer } from 'react-icons/fa';\nconst a = <FaBeer size={2}>x</FaBeer>;",
            &[],
        );
        assert_eq!(outcome.rewritten, 1);
        assert!(outcome.consumed.contains("FaBeer"));
        assert!(code.contains("<ReactIconsSpriteIcon iconId=\"ri-react-icons-fa-FaBeer\" size={2}>"));
        assert!(code.contains("</ReactIconsSpriteIcon>"));
        assert_eq!(seen, vec![("react-icons/fa".to_string(), "FaBeer".to_string())]);
    }

    #[test]
    fn test_nested_icons_inside_attributes() {
        let (code, outcome, seen) = rewrite(
            "import { FaBeer, FaHome } from 'react-icons/fa';\n\
             const a = <Button icon={<FaHome />}><FaBeer /></Button>;",
            &[],
        );
        assert_eq!(outcome.rewritten, 2);
        assert_eq!(seen.len(), 2);
        assert!(code.contains("iconId=\"ri-react-icons-fa-FaHome\""));
        assert!(code.contains("iconId=\"ri-react-icons-fa-FaBeer\""));
        assert!(code.contains("<Button"));
    }

    #[test]
    fn test_proxy_with_identifier_prop() {
        let (code, outcome, seen) = rewrite(
            "import { FontAwesomeIcon } from '@fortawesome/react-fontawesome';\n\
             import { faCoffee } from '@fortawesome/free-solid-svg-icons';\n\
             const a = <FontAwesomeIcon icon={faCoffee} spin />;",
            &[ProxyComponent::font_awesome()],
        );
        assert_eq!(
            seen,
            vec![("@fortawesome/free-solid-svg-icons".to_string(), "faCoffee".to_string())]
        );
        assert!(outcome.consumed.contains("FontAwesomeIcon"));
        assert!(outcome.consumed.contains("faCoffee"));
        assert!(code.contains("iconId=\"ri-fortawesome-free-solid-svg-icons-faCoffee\""));
        assert!(!code.contains("icon={faCoffee}"));
        assert!(code.contains("spin"));
    }

    #[test]
    fn test_proxy_with_non_identifier_prop_falls_back() {
        let (code, outcome, seen) = rewrite(
            "import { FontAwesomeIcon } from '@fortawesome/react-fontawesome';\n\
             const a = <FontAwesomeIcon icon={['fas', 'coffee']} />;",
            &[ProxyComponent::font_awesome()],
        );
        assert_eq!(
            seen,
            vec![("@fortawesome/react-fontawesome".to_string(), "FontAwesomeIcon".to_string())]
        );
        assert_eq!(outcome.consumed.len(), 1);
        assert!(code.contains("iconId=\"ri-fortawesome-react-fontawesome-FontAwesomeIcon\""));
        assert!(code.contains("icon={["));
    }

    #[test]
    fn test_explicit_id_wins() {
        let (code, _, seen) = rewrite(
            "import { Clock } from 'lucide-react';\nconst a = <Clock iconId=\"custom\" />;",
            &[],
        );
        assert!(code.contains("iconId=\"custom\""));
        assert!(!code.contains("ri-lucide-react-Clock"));
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn test_untracked_and_member_tags_are_left_alone() {
        let (code, outcome, _) = rewrite(
            "import { Clock } from 'lucide-react';\n\
             const a = <div><Icons.Clock /><Other /></div>;",
            &[],
        );
        assert_eq!(outcome.rewritten, 0);
        assert!(code.contains("<Icons.Clock"));
        assert!(code.contains("<Other"));
    }
}
