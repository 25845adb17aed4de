//! Icon identity and the symbol id contract
//!
//! A symbol id is the only thing rewritten source and the sprite document
//! share, so it must be a pure function of `(library, export_name)`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix of every symbol id
pub const SYMBOL_ID_PREFIX: &str = "ri";

/// A `(library, export_name)` pair referenced by rewritten code
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IconPair {
    pub library: String,
    pub export_name: String,
}

impl IconPair {
    pub fn new(library: impl Into<String>, export_name: impl Into<String>) -> Self {
        Self {
            library: library.into(),
            export_name: export_name.into(),
        }
    }

    /// Registry key: `library:export_name`
    pub fn key(&self) -> String {
        registry_key(&self.library, &self.export_name)
    }

    pub fn symbol_id(&self) -> String {
        symbol_id(&self.library, &self.export_name)
    }
}

impl fmt::Display for IconPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.library, self.export_name)
    }
}

pub(crate) fn registry_key(library: &str, export_name: &str) -> String {
    format!("{library}:{export_name}")
}

/// Normalize a library id into the dashed alias used inside symbol ids.
///
/// Drops a leading `@`, collapses every run of non-alphanumeric characters
/// into one `-` and trims dashes from both ends.
///
/// ```
/// assert_eq!(sprig::library_alias("@mui/icons-material"), "mui-icons-material");
/// assert_eq!(sprig::library_alias("react-icons/fa6"), "react-icons-fa6");
/// ```
pub fn library_alias(library: &str) -> String {
    let unscoped = library.strip_prefix('@').unwrap_or(library);
    let mut alias = String::with_capacity(unscoped.len());
    let mut pending_dash = false;

    for ch in unscoped.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !alias.is_empty() {
                alias.push('-');
            }
            pending_dash = false;
            alias.push(ch);
        } else {
            pending_dash = true;
        }
    }

    alias
}

/// Symbol id for an icon: `ri-<alias>-<export_name>`
pub fn symbol_id(library: &str, export_name: &str) -> String {
    format!(
        "{SYMBOL_ID_PREFIX}-{}-{export_name}",
        library_alias(library)
    )
}
