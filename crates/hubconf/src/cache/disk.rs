//! # Cache Policy

use anyhow::bail;
use burn::config::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Cache Policy
#[derive(Config, Debug)]
pub struct DiskCacheConfig {
    /// Key for the root cache directory.
    #[config(default = "\"hubconf\".to_string()")]
    pub root_cache_key: String,

    /// Optional override for the cache home directory.
    ///
    /// Defaults to ``~/.cache``.
    #[config(default = "None")]
    pub cache_home: Option<String>,
}

impl Default for DiskCacheConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DiskCacheConfig {
    /// Fetch the base cache directory.
    ///
    /// If the cache directory does not exist, does not create it.
    pub fn base_cache_dir(&self) -> anyhow::Result<PathBuf> {
        let home = match &self.cache_home {
            Some(home) => PathBuf::from(home),
            None => dirs::home_dir()
                .expect("Should be able to get home directory")
                .join(".cache"),
        };
        Ok(home.join(&self.root_cache_key))
    }

    /// Fetch the base cache directory.
    ///
    /// If the cache directory does not exist, creates it.
    pub fn ensure_base_cache_dir(&self) -> anyhow::Result<PathBuf> {
        let dir = self.base_cache_dir()?;
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(dir)
    }

    /// Map a resource key to a cache path.
    ///
    /// Does not ensure that the path (or any of the parents) exist.
    pub fn resource_to_path(
        &self,
        resource_key: &[String],
    ) -> anyhow::Result<PathBuf> {
        let path = self.base_cache_dir()?;
        Ok(resource_key.iter().fold(path, |acc, s| acc.join(s)))
    }

    /// Map a resource key to a cache path and ensure the parent directory exists.
    pub fn ensure_resource_parent_dir(
        &self,
        resource_key: &[String],
    ) -> anyhow::Result<PathBuf> {
        let path = self.resource_to_path(resource_key)?;
        if !path.exists() {
            fs::create_dir_all(path.parent().unwrap())?;
        }
        Ok(path)
    }

    /// Install a local file as a cache resource.
    ///
    /// If the resource already exists, the existing copy wins.
    ///
    /// # Returns
    ///
    /// The cache path of the resource.
    pub fn install_resource(
        &self,
        source: &Path,
        resource: &[String],
    ) -> anyhow::Result<PathBuf> {
        if !source.exists() {
            bail!("source file does not exist: {}", source.display());
        }
        let cache_file_path = self.ensure_resource_parent_dir(resource)?;
        if !cache_file_path.exists() {
            fs::copy(source, &cache_file_path)?;
        }
        Ok(cache_file_path)
    }

    /// Resolve a cache resource to its path, if present.
    pub fn resolve_resource(
        &self,
        resource: &[String],
    ) -> anyhow::Result<Option<PathBuf>> {
        let path = self.resource_to_path(resource)?;
        Ok(path.exists().then_some(path))
    }
}
