//! Built-in tables of recognized icon libraries.

/// Import sources recognized out of the box.
///
/// Only packages exporting individual icon components (or icon data objects)
/// are listed. Patterns are matched against the raw import path.
pub const DEFAULT_ICON_SOURCES: &[&str] = &[
    r"^react-icons/[\w-]+$",
    r"^lucide-react$",
    r"^@radix-ui/react-icons$",
    r"^@heroicons/react(?:/.*)?$",
    r"^@tabler/icons-react$",
    r"^phosphor-react$",
    r"^@phosphor-icons/react$",
    r"^react-feather$",
    r"^react-bootstrap-icons$",
    r"^grommet-icons$",
    r"^remixicon-react$",
    r"^devicons-react$",
    r"^typicons-react$",
    r"^boxicons-react$",
    r"^@mui/icons-material(?:/.*)?$",
    r"^@fortawesome/react-fontawesome$",
    r"^@fortawesome/(?:free|pro)-[\w-]+-svg-icons$",
];

pub const DEFAULT_COMPONENT_SOURCE: &str = "react-icons-sprite";
pub const DEFAULT_COMPONENT_NAME: &str = "ReactIconsSpriteIcon";
pub const DEFAULT_ID_ATTRIBUTE: &str = "iconId";

pub(crate) fn default_sources() -> Vec<String> {
    DEFAULT_ICON_SOURCES.iter().map(|s| s.to_string()).collect()
}
