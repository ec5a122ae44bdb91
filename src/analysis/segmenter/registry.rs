//! Name → constructor registry for segmenters.
//!
//! Configuration names a segmenter by string (`"jieba"`, `"lindera"`, or the
//! component-style aliases `"jieba_segment"`, `"lindera_segment"`). The
//! registry maps those names to constructor functions. Backends that are not
//! compiled in stay registered and fail with `BackendUnavailable` when built.
//!
//! # Examples
//!
//! ```no_run
//! use zhseg::analysis::segmenter::registry::default_registry;
//! use zhseg::config::SegmenterConfig;
//!
//! let segmenter = default_registry().create(&SegmenterConfig::default()).unwrap();
//! assert_eq!(segmenter.name(), "jieba");
//! ```

use std::sync::{Arc, LazyLock};

use ahash::AHashMap;

use crate::analysis::segmenter::Segmenter;
use crate::config::SegmenterConfig;
use crate::error::{Result, ZhsegError};

/// Builds a segmenter from its configuration.
pub type SegmenterFactory = fn(&SegmenterConfig) -> Result<Arc<dyn Segmenter>>;

static DEFAULT_REGISTRY: LazyLock<SegmenterRegistry> = LazyLock::new(SegmenterRegistry::with_defaults);

/// The process-wide registry holding the built-in backends.
pub fn default_registry() -> &'static SegmenterRegistry {
    &DEFAULT_REGISTRY
}

/// A mapping from segmenter names to constructor functions.
#[derive(Clone, Default)]
pub struct SegmenterRegistry {
    factories: AHashMap<String, SegmenterFactory>,
}

impl SegmenterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        SegmenterRegistry::default()
    }

    /// Create a registry with the built-in backends and their aliases.
    pub fn with_defaults() -> Self {
        let mut registry = SegmenterRegistry::new();
        registry.register("jieba", build_jieba);
        registry.register("jieba_segment", build_jieba);
        registry.register("lindera", build_lindera);
        registry.register("lindera_segment", build_lindera);
        registry
    }

    /// Register (or replace) a constructor under `name`.
    pub fn register<S: Into<String>>(&mut self, name: S, factory: SegmenterFactory) {
        self.factories.insert(name.into().to_ascii_lowercase(), factory);
    }

    /// Check if a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(&name.to_ascii_lowercase())
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Build the segmenter named by `config.kind`.
    pub fn create(&self, config: &SegmenterConfig) -> Result<Arc<dyn Segmenter>> {
        let factory = self
            .factories
            .get(&config.kind.to_ascii_lowercase())
            .ok_or_else(|| {
                ZhsegError::config(format!(
                    "Unknown segmenter '{}', expected one of: {}",
                    config.kind,
                    self.names().join(", ")
                ))
            })?;
        factory(config)
    }
}

#[cfg(feature = "jieba")]
fn build_jieba(config: &SegmenterConfig) -> Result<Arc<dyn Segmenter>> {
    use crate::analysis::segmenter::jieba::JiebaSegmenter;

    Ok(Arc::new(JiebaSegmenter::new(config.settings())?))
}

#[cfg(not(feature = "jieba"))]
fn build_jieba(_config: &SegmenterConfig) -> Result<Arc<dyn Segmenter>> {
    Err(crate::analysis::segmenter::BackendKind::Jieba.unavailable())
}

#[cfg(feature = "lindera")]
fn build_lindera(config: &SegmenterConfig) -> Result<Arc<dyn Segmenter>> {
    use crate::analysis::segmenter::lindera::{DEFAULT_DICT_URI, DEFAULT_MODE, LinderaSegmenter};

    let segmenter = LinderaSegmenter::with_dictionary(
        config.settings(),
        config.dict_uri.as_deref().unwrap_or(DEFAULT_DICT_URI),
        config.mode.as_deref().unwrap_or(DEFAULT_MODE),
    )?;
    Ok(Arc::new(segmenter))
}

#[cfg(not(feature = "lindera"))]
fn build_lindera(_config: &SegmenterConfig) -> Result<Arc<dyn Segmenter>> {
    Err(crate::analysis::segmenter::BackendKind::Lindera.unavailable())
}
