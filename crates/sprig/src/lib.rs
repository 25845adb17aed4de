//! # sprig
//!
//! Rewrites imports of individual icon components (react-icons, lucide,
//! heroicons, MUI, FontAwesome, ...) so every icon renders through one shared
//! component backed by a single SVG sprite, and assembles that sprite.
//!
//! A build has two phases:
//!
//! 1. **Transform** each module with [`IconTransformer`]. Icon elements become
//!    `<ReactIconsSpriteIcon iconId="ri-..." />`, unused icon imports are
//!    pruned, and every referenced icon is registered in an
//!    [`IconCollector`].
//! 2. **Assemble** the sprite with [`SpriteAssembler`], which renders each
//!    registered icon once through an [`IconResolver`] into a `<symbol>`.
//!
//! [`BuildSession`] wires both phases to one collector per build.
//!
//! ```rust
//! use sprig::{BuildSession, IconModule, IconValue, SprigConfig, StaticResolver};
//!
//! let session = BuildSession::start(&SprigConfig::default());
//! let out = session.transform(
//!     "import { Clock } from 'lucide-react';\nexport const A = () => <Clock />;",
//!     "src/A.tsx",
//! );
//! assert!(out.modified);
//! assert!(out.code.contains("iconId=\"ri-lucide-react-Clock\""));
//!
//! let resolver = StaticResolver::new().with_module(
//!     "lucide-react",
//!     IconModule::new().with_export("Clock", IconValue::markup("<svg viewBox=\"0 0 24 24\"><circle r=\"10\"/></svg>")),
//! );
//! let sprite = session.sprite(&resolver)?;
//! assert!(sprite.to_svg().contains("<symbol id=\"ri-lucide-react-Clock\""));
//! # Ok::<(), sprig::SpriteError>(())
//! ```

pub mod collector;
pub mod error;
pub mod icon;
pub mod session;
pub mod sources;
pub mod sprite;
pub mod transform;

#[cfg(feature = "logging")]
pub mod logging;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use collector::IconCollector;
pub use error::{ResolveError, Result, SpriteError, TransformError};
pub use icon::{IconPair, SYMBOL_ID_PREFIX, library_alias, symbol_id};
pub use session::BuildSession;
pub use sources::LibrarySources;
pub use sprite::{
    CachedResolver, ChainResolver, FsResolver, IconData, IconModule, IconRenderer, IconResolver,
    IconValue, NarrowPaths, SpriteAssembler, SpriteDocument, StaticRender, StaticResolver,
    SymbolDefinition, build_sprite,
};
pub use transform::{
    IconTransformer, ModuleSource, TransformOptions, TransformOutput, transform_module,
};

pub use sprig_config::{ComponentConfig, ProxyComponent, SpriteOptions, SprigConfig};
