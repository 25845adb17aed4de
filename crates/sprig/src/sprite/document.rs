//! The aggregated sprite document

use std::fmt;

use sha2::{Digest, Sha256};

use crate::sprite::render::SymbolDefinition;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// All symbols of one build, in registration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpriteDocument {
    pub symbols: Vec<SymbolDefinition>,
    /// Non-fatal problems of the build, one message each (e.g. icons that
    /// rendered as empty symbols)
    pub warnings: Vec<String>,
}

impl SpriteDocument {
    pub fn new(symbols: Vec<SymbolDefinition>) -> Self {
        Self {
            symbols,
            warnings: Vec::new(),
        }
    }

    pub fn to_svg(&self) -> String {
        self.to_string()
    }

    /// First 8 hex characters of the SHA-256 of the rendered document
    pub fn content_hash(&self) -> String {
        let digest = Sha256::digest(self.to_svg().as_bytes());
        digest.iter().take(4).map(|b| format!("{b:02x}")).collect()
    }

    /// `<prefix>-<hash>.svg`
    pub fn file_name(&self, prefix: &str) -> String {
        format!("{prefix}-{}.svg", self.content_hash())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for SpriteDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<svg xmlns=\"{SVG_NAMESPACE}\"><defs>")?;
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        f.write_str("</defs></svg>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_well_formed() {
        let doc = SpriteDocument::default();
        assert_eq!(
            doc.to_svg(),
            "<svg xmlns=\"http://www.w3.org/2000/svg\"><defs></defs></svg>"
        );
        assert!(doc.is_empty());
    }

    #[test]
    fn test_hash_is_stable_and_content_sensitive() {
        let a = SpriteDocument::new(vec![SymbolDefinition::empty("ri-a-A")]);
        let b = SpriteDocument::new(vec![SymbolDefinition::empty("ri-b-B")]);

        assert_eq!(a.content_hash(), a.clone().content_hash());
        assert_ne!(a.content_hash(), b.content_hash());
        assert_eq!(a.content_hash().len(), 8);

        let name = a.file_name("sprite");
        assert!(name.starts_with("sprite-"));
        assert!(name.ends_with(".svg"));
        assert_eq!(name.len(), "sprite-".len() + 8 + ".svg".len());
    }
}
