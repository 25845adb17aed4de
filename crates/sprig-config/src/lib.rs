//! Configuration for the sprig icon sprite transform.
//!
//! Hosts either build a [`SprigConfig`] programmatically or discover one from
//! `sprig.toml` / the `"sprig"` field of `package.json`.

pub mod config;
pub mod defaults;
pub mod discovery;
pub mod error;

pub use config::*;
pub use defaults::{
    DEFAULT_COMPONENT_NAME, DEFAULT_COMPONENT_SOURCE, DEFAULT_ICON_SOURCES, DEFAULT_ID_ATTRIBUTE,
};
pub use discovery::{ConfigDiscovery, ENV_PREFIX, discover};
pub use error::*;
