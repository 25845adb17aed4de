//! Pluggable icon module resolution
//!
//! A resolver turns a module specifier (`lucide-react`,
//! `@mui/icons-material/Alarm`, ...) into an [`IconModule`]: the ordered set
//! of values that module exports. Hosts plug in whatever loading facility
//! their platform has; [`StaticResolver`] and [`FsResolver`] cover offline
//! tables and unpacked packages on disk.

use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use rustc_hash::{FxBuildHasher, FxHashMap};
use serde_json::Value;
use tracing::debug;

use crate::error::ResolveError;

/// A renderable unit that produces static markup when invoked with no input
pub trait StaticRender: Send + Sync + fmt::Debug {
    fn render_static(&self) -> String;
}

impl StaticRender for String {
    fn render_static(&self) -> String {
        self.clone()
    }
}

/// Glyph data for libraries that export icons as plain objects
#[derive(Debug, Clone, PartialEq)]
pub struct IconData {
    pub width: f64,
    pub height: f64,
    pub paths: Vec<String>,
}

/// A value exported by an icon module
#[derive(Debug, Clone)]
pub enum IconValue {
    Data(IconData),
    Component(Arc<dyn StaticRender>),
    /// `{ default: ... }` wrapper around the real export
    DefaultHolder(Box<IconValue>),
}

impl IconValue {
    /// Component that renders to fixed markup
    pub fn markup(svg: impl Into<String>) -> Self {
        Self::Component(Arc::new(svg.into()))
    }

    pub fn data(width: f64, height: f64, paths: Vec<String>) -> Self {
        Self::Data(IconData {
            width,
            height,
            paths,
        })
    }

    pub fn default_holder(inner: IconValue) -> Self {
        Self::DefaultHolder(Box::new(inner))
    }

    /// Decode a JSON description of an export.
    ///
    /// Strings are markup, objects with an `icon` array are glyph data
    /// (`[width, height, ligatures, unicode, pathData]`), objects with a
    /// `default` key are default holders.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(svg) => Some(Self::markup(svg.clone())),
            Value::Object(map) => {
                if let Some(icon) = map.get("icon") {
                    return icon_data(icon).map(Self::Data);
                }
                map.get("default")
                    .and_then(Self::from_json)
                    .map(Self::default_holder)
            }
            _ => None,
        }
    }
}

fn icon_data(icon: &Value) -> Option<IconData> {
    let parts = icon.as_array()?;
    let width = parts.first()?.as_f64()?;
    let height = parts.get(1)?.as_f64()?;
    let paths = match parts.get(4)? {
        Value::String(path) => vec![path.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => return None,
    };
    Some(IconData {
        width,
        height,
        paths,
    })
}

/// Name of the default export
pub const DEFAULT_EXPORT: &str = "default";

/// Ordered exports of one icon module
#[derive(Debug, Clone, Default)]
pub struct IconModule {
    exports: IndexMap<String, IconValue, FxBuildHasher>,
}

impl IconModule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_export(mut self, name: impl Into<String>, value: IconValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: IconValue) {
        self.exports.insert(name.into(), value);
    }

    pub fn export(&self, name: &str) -> Option<&IconValue> {
        self.exports.get(name)
    }

    pub fn default_export(&self) -> Option<&IconValue> {
        self.exports.get(DEFAULT_EXPORT)
    }

    pub fn export_names(&self) -> impl Iterator<Item = &str> {
        self.exports.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.exports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }
}

/// Loads icon modules by specifier
pub trait IconResolver: Send + Sync {
    fn load_module(&self, specifier: &str) -> Result<Arc<IconModule>, ResolveError>;
}

impl<R: IconResolver + ?Sized> IconResolver for Arc<R> {
    fn load_module(&self, specifier: &str) -> Result<Arc<IconModule>, ResolveError> {
        (**self).load_module(specifier)
    }
}

impl<R: IconResolver + ?Sized> IconResolver for &R {
    fn load_module(&self, specifier: &str) -> Result<Arc<IconModule>, ResolveError> {
        (**self).load_module(specifier)
    }
}

/// In-memory module table
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    modules: FxHashMap<String, Arc<IconModule>>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module(mut self, specifier: impl Into<String>, module: IconModule) -> Self {
        self.insert(specifier, module);
        self
    }

    pub fn insert(&mut self, specifier: impl Into<String>, module: IconModule) {
        self.modules.insert(specifier.into(), Arc::new(module));
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl IconResolver for StaticResolver {
    fn load_module(&self, specifier: &str) -> Result<Arc<IconModule>, ResolveError> {
        self.modules
            .get(specifier)
            .cloned()
            .ok_or_else(|| ResolveError::not_found(specifier))
    }
}

/// Resolves specifiers against a directory of unpacked icon packages.
///
/// `<root>/<specifier>/` is a module whose exports are the `*.svg` and
/// `*.json` files in it, named by file stem. `<root>/<specifier>` with an
/// optional `.svg`/`.json` extension is a module with a single default
/// export. A trailing `.js`/`.mjs`/`.cjs` on the specifier is ignored.
/// Specifiers that are absolute or contain `.`/`..` segments are never
/// looked up, so a lookup cannot leave `root`.
#[derive(Debug, Clone)]
pub struct FsResolver {
    root: PathBuf,
}

impl FsResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn load_dir(&self, specifier: &str, dir: &Path) -> Result<IconModule, ResolveError> {
        let mut files: Vec<PathBuf> = fs::read_dir(dir)
            .map_err(|err| ResolveError::load(specifier, err))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .collect();
        files.sort();

        let mut module = IconModule::new();
        for path in files {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Some(value) = read_value(specifier, &path)? {
                module.insert(stem.to_string(), value);
            }
        }
        Ok(module)
    }
}

impl IconResolver for FsResolver {
    fn load_module(&self, specifier: &str) -> Result<Arc<IconModule>, ResolveError> {
        let relative = Path::new(strip_script_extension(specifier));
        if !stays_inside(relative) {
            debug!(specifier, "refusing specifier outside the icon root");
            return Err(ResolveError::not_found(specifier));
        }
        let base = self.root.join(relative);

        if base.is_dir() {
            debug!(specifier, path = %base.display(), "loading icon directory");
            return self.load_dir(specifier, &base).map(Arc::new);
        }

        for candidate in [base.clone(), with_suffix(&base, ".svg"), with_suffix(&base, ".json")] {
            if !candidate.is_file() {
                continue;
            }
            if let Some(value) = read_value(specifier, &candidate)? {
                return Ok(Arc::new(IconModule::new().with_export(DEFAULT_EXPORT, value)));
            }
        }

        Err(ResolveError::not_found(specifier))
    }
}

fn strip_script_extension(specifier: &str) -> &str {
    [".js", ".mjs", ".cjs"]
        .iter()
        .find_map(|ext| specifier.strip_suffix(ext))
        .unwrap_or(specifier)
}

fn stays_inside(relative: &Path) -> bool {
    let mut components = relative.components().peekable();
    components.peek().is_some() && components.all(|c| matches!(c, Component::Normal(_)))
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(suffix);
    PathBuf::from(os)
}

/// Read one export file; files that are neither svg nor json are skipped
fn read_value(specifier: &str, path: &Path) -> Result<Option<IconValue>, ResolveError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    match extension {
        "svg" => {
            let svg = fs::read_to_string(path).map_err(|err| ResolveError::load(specifier, err))?;
            Ok(Some(IconValue::markup(svg)))
        }
        "json" => {
            let text = fs::read_to_string(path).map_err(|err| ResolveError::load(specifier, err))?;
            let json: Value =
                serde_json::from_str(&text).map_err(|err| ResolveError::load(specifier, err))?;
            IconValue::from_json(&json).map(Some).ok_or_else(|| {
                ResolveError::load(specifier, format!("unsupported icon JSON in {}", path.display()))
            })
        }
        _ => Ok(None),
    }
}

/// Tries each resolver in order; the first module found wins
#[derive(Clone, Default)]
pub struct ChainResolver {
    resolvers: Vec<Arc<dyn IconResolver>>,
}

impl fmt::Debug for ChainResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainResolver")
            .field("resolvers", &self.resolvers.len())
            .finish()
    }
}

impl ChainResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, resolver: impl IconResolver + 'static) -> Self {
        self.resolvers.push(Arc::new(resolver));
        self
    }
}

impl IconResolver for ChainResolver {
    fn load_module(&self, specifier: &str) -> Result<Arc<IconModule>, ResolveError> {
        let mut last_error = None;
        for resolver in &self.resolvers {
            match resolver.load_module(specifier) {
                Ok(module) => return Ok(module),
                Err(err) if err.is_not_found() => {}
                Err(err) => last_error = Some(err),
            }
        }
        Err(last_error.unwrap_or_else(|| ResolveError::not_found(specifier)))
    }
}

type CacheSlot = Arc<OnceCell<Result<Arc<IconModule>, ResolveError>>>;

/// Memoizes every specifier's outcome, failures included.
///
/// Concurrent requests for one specifier block on a single load, so a whole
/// library module is loaded once no matter how many icons fall back to it.
pub struct CachedResolver<R> {
    inner: R,
    cache: DashMap<String, CacheSlot, FxBuildHasher>,
}

impl<R> CachedResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: DashMap::default(),
        }
    }

    /// Number of specifiers seen so far
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: IconResolver> IconResolver for CachedResolver<R> {
    fn load_module(&self, specifier: &str) -> Result<Arc<IconModule>, ResolveError> {
        let slot = self.cache.entry(specifier.to_string()).or_default().clone();
        slot.get_or_init(|| self.inner.load_module(specifier)).clone()
    }
}
