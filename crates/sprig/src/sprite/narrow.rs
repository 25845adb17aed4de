//! Per-icon module paths
//!
//! Several libraries ship every icon as its own module. Loading that module
//! is far cheaper than loading the whole collection, so the renderer tries
//! these paths first.

use regex::Regex;

/// How an export name maps to a sub-path of the library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarrowTemplate {
    /// Directory between the library id and the icon file
    pub dir: Option<&'static str>,
    /// Use the dashed form of the export name
    pub dashed: bool,
    /// File suffix, including the dot
    pub suffix: &'static str,
}

impl NarrowTemplate {
    /// `<library>/<ExportName>`
    pub const VERBATIM: Self = Self {
        dir: None,
        dashed: false,
        suffix: "",
    };

    pub fn build(&self, library: &str, export_name: &str) -> String {
        let file = if self.dashed {
            to_dashed(export_name)
        } else {
            export_name.to_string()
        };
        match self.dir {
            Some(dir) => format!("{library}/{dir}/{file}{}", self.suffix),
            None => format!("{library}/{file}{}", self.suffix),
        }
    }
}

const BUILTIN: &[(&str, NarrowTemplate)] = &[
    (r"^@mui/icons-material$", NarrowTemplate::VERBATIM),
    (
        r"^@fortawesome/(?:free|pro)-[\w-]+-svg-icons$",
        NarrowTemplate::VERBATIM,
    ),
    (
        r"^lucide-react$",
        NarrowTemplate {
            dir: Some("dist/esm/icons"),
            dashed: true,
            suffix: ".js",
        },
    ),
    (
        r"^@tabler/icons-react$",
        NarrowTemplate {
            dir: Some("dist/esm/icons"),
            dashed: false,
            suffix: ".mjs",
        },
    ),
    (
        r"^@heroicons/react/.+$",
        NarrowTemplate {
            dir: Some("esm"),
            dashed: false,
            suffix: ".js",
        },
    ),
];

/// Table of narrow path conventions keyed by library-id pattern
#[derive(Debug, Clone)]
pub struct NarrowPaths {
    conventions: Vec<(Regex, NarrowTemplate)>,
}

impl NarrowPaths {
    /// The conventions of the libraries known to ship per-icon modules
    pub fn builtin() -> Self {
        let conventions = BUILTIN
            .iter()
            .filter_map(|(pattern, template)| Regex::new(pattern).ok().map(|re| (re, *template)))
            .collect();
        Self { conventions }
    }

    /// No narrow paths: always load the whole library
    pub fn none() -> Self {
        Self {
            conventions: Vec::new(),
        }
    }

    pub fn with_convention(mut self, pattern: Regex, template: NarrowTemplate) -> Self {
        self.conventions.push((pattern, template));
        self
    }

    pub fn narrow_path(&self, library: &str, export_name: &str) -> Option<String> {
        self.conventions
            .iter()
            .find(|(pattern, _)| pattern.is_match(library))
            .map(|(_, template)| template.build(library, export_name))
    }
}

impl Default for NarrowPaths {
    fn default() -> Self {
        Self::builtin()
    }
}

/// `ArrowUpRight` → `arrow-up-right`, `Clock12` → `clock-12`
pub fn to_dashed(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;

    for ch in name.chars() {
        if let Some(p) = prev {
            let lower_to_upper = (p.is_ascii_lowercase() || p.is_ascii_digit()) && ch.is_ascii_uppercase();
            let letter_to_digit = p.is_ascii_alphabetic() && ch.is_ascii_digit();
            if lower_to_upper || letter_to_digit {
                out.push('-');
            }
        }
        out.push(ch.to_ascii_lowercase());
        prev = Some(ch);
    }

    out
}
