//! Configuration sources and stores.
//!
//! The engine never reaches for configuration on its own; callers fetch a
//! snapshot through a [`ConfigSource`] and pass it in. [`CachedConfigSource`]
//! layers a primary store over a local cache the way the admin and calculator
//! surfaces expect: reads fall back to the cache, writes fall back to the cache
//! unless the primary rejected the credentials.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tierwise_core::PricingConfig;
use tracing::{debug, warn};

use crate::{ConfigError, ConfigFormat};

/// Read access to the current pricing configuration.
pub trait ConfigSource: Send + Sync {
    /// Returns the latest stored configuration.
    fn fetch(&self) -> Result<PricingConfig, ConfigError>;
}

/// Read/write access to a pricing configuration.
pub trait ConfigStore: ConfigSource {
    /// Persists `config`, returning the configuration as stored.
    fn save(&self, config: &PricingConfig) -> Result<PricingConfig, ConfigError>;
}

/// Returns the current configuration, or the defaults if retrieval fails.
///
/// # Example
///
/// ```
/// use tierwise_config::{get_current_config, MemoryConfigStore};
/// use tierwise_core::PricingConfig;
///
/// let empty = MemoryConfigStore::new();
/// assert_eq!(get_current_config(&empty), PricingConfig::default());
/// ```
pub fn get_current_config(source: &dyn ConfigSource) -> PricingConfig {
    match source.fetch() {
        Ok(config) => config,
        Err(err) => {
            warn!(event = "config_fallback", fallback = "defaults", error = %err);
            PricingConfig::default()
        }
    }
}

/// In-process store, used as a local cache or in tests.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    config: RwLock<Option<PricingConfig>>,
}

impl MemoryConfigStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `config`.
    pub fn with_config(config: PricingConfig) -> Self {
        Self {
            config: RwLock::new(Some(config)),
        }
    }

    /// Removes the stored configuration.
    pub fn clear(&self) -> Result<(), ConfigError> {
        let mut guard = self.config.write().map_err(|_| lock_poisoned())?;
        *guard = None;
        Ok(())
    }
}

fn lock_poisoned() -> ConfigError {
    ConfigError::Unavailable("memory store lock poisoned".into())
}

impl ConfigSource for MemoryConfigStore {
    fn fetch(&self) -> Result<PricingConfig, ConfigError> {
        let guard = self.config.read().map_err(|_| lock_poisoned())?;
        guard.clone().ok_or(ConfigError::Missing)
    }
}

impl ConfigStore for MemoryConfigStore {
    fn save(&self, config: &PricingConfig) -> Result<PricingConfig, ConfigError> {
        let mut guard = self.config.write().map_err(|_| lock_poisoned())?;
        *guard = Some(config.clone());
        Ok(config.clone())
    }
}

/// Store backed by a single file; format is chosen by extension.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
    format: ConfigFormat,
}

impl FileConfigStore {
    /// Creates a store for `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] for an unknown extension.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let format = ConfigFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file format.
    pub fn format(&self) -> ConfigFormat {
        self.format
    }
}

impl ConfigSource for FileConfigStore {
    fn fetch(&self) -> Result<PricingConfig, ConfigError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(ConfigError::Missing)
            }
            Err(err) => return Err(err.into()),
        };
        self.format.parse(&contents)
    }
}

impl ConfigStore for FileConfigStore {
    fn save(&self, config: &PricingConfig) -> Result<PricingConfig, ConfigError> {
        let rendered = self.format.render(config)?;
        std::fs::write(&self.path, rendered)?;
        debug!(event = "config_written", path = %self.path.display());
        Ok(config.clone())
    }
}

/// A primary store with a local cache in front of failures.
///
/// - `fetch` reads the primary and writes the result through to the cache; if
///   the primary fails, the cached copy is returned instead.
/// - `save` writes the primary and caches what it stored. A primary failure
///   other than [`ConfigError::Unauthorized`] is absorbed by saving to the
///   cache alone.
#[derive(Debug)]
pub struct CachedConfigSource<P, C> {
    primary: P,
    cache: C,
}

impl<P, C> CachedConfigSource<P, C>
where
    P: ConfigStore,
    C: ConfigStore,
{
    /// Creates a cached source.
    pub fn new(primary: P, cache: C) -> Self {
        Self { primary, cache }
    }

    /// Returns the primary store.
    pub fn primary(&self) -> &P {
        &self.primary
    }

    /// Returns the cache store.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    fn refresh_cache(&self, config: &PricingConfig) {
        if let Err(err) = self.cache.save(config) {
            warn!(event = "cache_write_failed", error = %err);
        }
    }
}

impl<P, C> ConfigSource for CachedConfigSource<P, C>
where
    P: ConfigStore,
    C: ConfigStore,
{
    fn fetch(&self) -> Result<PricingConfig, ConfigError> {
        match self.primary.fetch() {
            Ok(config) => {
                self.refresh_cache(&config);
                Ok(config)
            }
            Err(err) => {
                warn!(event = "config_fallback", fallback = "cache", error = %err);
                self.cache.fetch()
            }
        }
    }
}

impl<P, C> ConfigStore for CachedConfigSource<P, C>
where
    P: ConfigStore,
    C: ConfigStore,
{
    fn save(&self, config: &PricingConfig) -> Result<PricingConfig, ConfigError> {
        match self.primary.save(config) {
            Ok(saved) => {
                self.refresh_cache(&saved);
                Ok(saved)
            }
            Err(err @ ConfigError::Unauthorized(_)) => Err(err),
            Err(err) => {
                warn!(event = "save_fallback", fallback = "cache", error = %err);
                self.cache.save(config)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn test_poisoned_memory_store_reports_unavailable() {
        let store = Arc::new(MemoryConfigStore::with_config(PricingConfig::default()));
        let holder = Arc::clone(&store);
        let outcome = thread::spawn(move || {
            let _guard = holder.config.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(outcome.is_err());

        assert!(matches!(store.clear(), Err(ConfigError::Unavailable(_))));
        assert!(matches!(store.fetch(), Err(ConfigError::Unavailable(_))));
        assert!(matches!(
            store.save(&PricingConfig::default()),
            Err(ConfigError::Unavailable(_))
        ));
    }
}
