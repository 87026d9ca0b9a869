//! # Config Archive Descriptors
//!
//! Hubs publish a `config.json` per model at a well-known URL. A
//! [`ConfigArchiveDescriptor`] records where a config is published;
//! the URLs are provenance metadata, retrieval itself happens outside
//! this crate. A published document that has been placed in the local
//! disk cache can be decoded into any [`ModelConfig`] record.

use crate::cache::disk::DiskCacheConfig;
use crate::config::ModelConfig;
use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const X25: crc::Crc<u16> = crc::Crc::<u16>::new(&crc::CRC_16_IBM_SDLC);

/// Build a cache key (bare cache file name) from a name and URL.
pub fn url_to_cache_key(
    name: Option<&str>,
    url: &str,
) -> String {
    let hash = X25.checksum(url.as_bytes()).to_string();
    let base_name = url.rsplit_once('/').unwrap().1;
    match name {
        Some(n) => format!("{}-{}-{}", n, hash, base_name),
        None => format!("{}-{}", hash, base_name),
    }
}

/// Get the cache resource key for a published config document.
///
/// # Arguments
///
/// - `cache_key`: the cache key (the bare cache file name).
///
/// # Returns
///
/// The cache resource key.
pub fn config_resource_key(cache_key: &str) -> Vec<String> {
    vec!["configs".to_string(), cache_key.to_string()]
}

/// Static [`ConfigArchiveDescriptor`] provider.
#[derive(Debug)]
pub struct StaticConfigArchiveDescriptor<'a> {
    /// Name of the published config.
    pub name: &'a str,

    /// Description of the published config.
    pub description: &'a str,

    /// License.
    pub license: Option<&'a str>,

    /// Source URL.
    pub origin: Option<&'a str>,

    /// URLs the config document is published at.
    pub urls: &'a [&'a str],
}

impl<'a> StaticConfigArchiveDescriptor<'a> {
    /// Convert to a [`ConfigArchiveDescriptor`].
    pub fn to_descriptor(&self) -> ConfigArchiveDescriptor {
        ConfigArchiveDescriptor {
            name: self.name.to_string(),
            description: self.description.to_string(),
            license: self.license.map(|s| s.to_string()),
            origin: self.origin.map(|s| s.to_string()),
            urls: self.urls.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl From<&StaticConfigArchiveDescriptor<'_>> for ConfigArchiveDescriptor {
    fn from(descriptor: &StaticConfigArchiveDescriptor) -> Self {
        descriptor.to_descriptor()
    }
}

/// A descriptor for a published config document.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ConfigArchiveDescriptor {
    /// Name of the published config.
    pub name: String,

    /// Description of the published config.
    pub description: String,

    /// License.
    pub license: Option<String>,

    /// Source URL.
    pub origin: Option<String>,

    /// URLs the config document is published at.
    pub urls: Vec<String>,
}

impl ConfigArchiveDescriptor {
    /// Cache Key
    ///
    /// The key is ``{name}-{url crc hash}-{url basename}``.
    pub fn cache_key(&self) -> String {
        url_to_cache_key(Some(&self.name), self.urls.first().unwrap())
    }

    /// Install a local copy of the published document into the cache.
    ///
    /// # Returns
    ///
    /// The disk location of the cached document.
    pub fn install_to_disk_cache(
        &self,
        disk_cache: &DiskCacheConfig,
        source: &Path,
    ) -> anyhow::Result<PathBuf> {
        let resource = config_resource_key(&self.cache_key());
        disk_cache.install_resource(source, &resource)
    }

    /// The disk cache location of the document, if installed.
    pub fn resolve_in_disk_cache(
        &self,
        disk_cache: &DiskCacheConfig,
    ) -> anyhow::Result<Option<PathBuf>> {
        let resource = config_resource_key(&self.cache_key());
        disk_cache.resolve_resource(&resource)
    }

    /// Decode the cached document as a typed record.
    pub fn load_from_disk_cache<C: ModelConfig>(
        &self,
        disk_cache: &DiskCacheConfig,
    ) -> anyhow::Result<C> {
        match self.resolve_in_disk_cache(disk_cache)? {
            Some(path) => C::load_config(path),
            None => bail!("config not cached: {}", self.name),
        }
    }
}

/// Static [`ConfigArchiveMap`] builder.
#[derive(Debug)]
pub struct StaticConfigArchiveMap<'a> {
    /// List of static descriptors.
    pub items: &'a [&'a StaticConfigArchiveDescriptor<'a>],
}

impl<'a> StaticConfigArchiveMap<'a> {
    /// Convert to a [`ConfigArchiveMap`].
    pub fn to_directory(&self) -> ConfigArchiveMap {
        ConfigArchiveMap {
            items: self
                .items
                .iter()
                .map(|d| {
                    let desc = d.to_descriptor();
                    (desc.name.clone(), desc)
                })
                .collect(),
        }
    }
}

impl<'a> From<&StaticConfigArchiveMap<'a>> for ConfigArchiveMap {
    fn from(directory: &StaticConfigArchiveMap) -> Self {
        directory.to_directory()
    }
}

/// Directory of [`ConfigArchiveDescriptor`]s.
#[derive(Debug, Clone)]
pub struct ConfigArchiveMap {
    /// Map of descriptors.
    pub items: BTreeMap<String, ConfigArchiveDescriptor>,
}

impl ConfigArchiveMap {
    /// Lookup a descriptor by name.
    pub fn lookup_by_name(
        &self,
        name: &str,
    ) -> Option<ConfigArchiveDescriptor> {
        self.items.get(name).cloned()
    }

    /// Lookup a descriptor.
    pub fn try_lookup_by_name(
        &self,
        name: &str,
    ) -> anyhow::Result<ConfigArchiveDescriptor> {
        match self.lookup_by_name(name) {
            Some(d) => Ok(d),
            None => bail!("Descriptor not found: {}", name),
        }
    }

    /// Lookup a descriptor.
    pub fn expect_lookup_by_name(
        &self,
        name: &str,
    ) -> ConfigArchiveDescriptor {
        match self.try_lookup_by_name(name) {
            Ok(d) => d,
            Err(e) => panic!("{}", e),
        }
    }
}
