//! Fixtures for tests of code built on sprig
//!
//! Enabled with the `test-utils` feature.

use crate::sprite::{IconModule, IconValue, StaticResolver};

/// Markup in the shape react-icons renders
pub const FA_BEER_SVG: &str = r#"<svg stroke="currentColor" fill="currentColor" stroke-width="0" viewBox="0 0 448 512" height="1em" width="1em" xmlns="http://www.w3.org/2000/svg"><path d="M368 96h-48V56"></path></svg>"#;

pub const FA_HOME_SVG: &str = r#"<svg stroke="currentColor" fill="currentColor" stroke-width="0" viewBox="0 0 576 512" height="1em" width="1em" xmlns="http://www.w3.org/2000/svg"><path d="M280.37 148.26L96 300.11"></path></svg>"#;

pub const BI_ALARM_SVG: &str = r#"<svg stroke="currentColor" fill="currentColor" stroke-width="0" viewBox="0 0 24 24" height="1em" width="1em" xmlns="http://www.w3.org/2000/svg"><path d="M12 4c-4.879 0-9 4.121-9 9"></path><path d="M13 8h-2v6h5v-2h-3z"></path></svg>"#;

/// lucide renders a nested `<svg>` inside its own wrapper
pub const LUCIDE_CLOCK_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="lucide lucide-clock"><svg><circle cx="12" cy="12" r="10"></circle><polyline points="12 6 12 12 16 14"></polyline></svg></svg>"#;

pub const MUI_ALARM_SVG: &str = r#"<svg class="MuiSvgIcon-root" focusable="false" aria-hidden="true" viewBox="0 0 24 24"><path d="M22 5.72l-4.6-3.86"></path></svg>"#;

/// A resolver preloaded with representative modules of several libraries:
///
/// - `react-icons/fa`: `FaBeer`, `FaHome`
/// - `icon-pack/bi`: `BiAlarm`
/// - `lucide-react/dist/esm/icons/clock.js`: narrow module for `Clock`
/// - `@mui/icons-material/Alarm`: default export only
/// - `@fortawesome/free-solid-svg-icons`: `faCoffee` as glyph data
pub fn fixture_resolver() -> StaticResolver {
    StaticResolver::new()
        .with_module(
            "react-icons/fa",
            IconModule::new()
                .with_export("FaBeer", IconValue::markup(FA_BEER_SVG))
                .with_export("FaHome", IconValue::markup(FA_HOME_SVG)),
        )
        .with_module(
            "icon-pack/bi",
            IconModule::new().with_export("BiAlarm", IconValue::markup(BI_ALARM_SVG)),
        )
        .with_module(
            "lucide-react/dist/esm/icons/clock.js",
            IconModule::new().with_export(
                "default",
                IconValue::default_holder(IconValue::markup(LUCIDE_CLOCK_SVG)),
            ),
        )
        .with_module(
            "@mui/icons-material/Alarm",
            IconModule::new().with_export("default", IconValue::markup(MUI_ALARM_SVG)),
        )
        .with_module(
            "@fortawesome/free-solid-svg-icons",
            IconModule::new().with_export(
                "faCoffee",
                IconValue::data(
                    640.0,
                    512.0,
                    vec!["M96 64c0-17.7 14.3-32 32-32h320".to_string()],
                ),
            ),
        )
}
