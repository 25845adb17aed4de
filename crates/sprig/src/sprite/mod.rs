//! Sprite side: resolve icons, render `<symbol>`s, assemble the document

pub mod assembler;
pub mod document;
pub mod narrow;
pub mod render;
pub mod resolver;

pub use assembler::{SpriteAssembler, build_sprite};
pub use document::SpriteDocument;
pub use narrow::{NarrowPaths, NarrowTemplate, to_dashed};
pub use render::{DEFAULT_VIEW_BOX, IconRenderer, SymbolDefinition};
pub use resolver::{
    CachedResolver, ChainResolver, DEFAULT_EXPORT, FsResolver, IconData, IconModule,
    IconResolver, IconValue, StaticRender, StaticResolver,
};
