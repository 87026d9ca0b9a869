//! # Config Prefabs for Well-Known Model Configurations

use crate::cache::archive::{ConfigArchiveMap, StaticConfigArchiveMap};
use crate::config::ModelConfig;
use anyhow::bail;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Static builder for a [`PreFabConfig`]
pub struct StaticPreFabConfig<C>
where
    C: 'static + ModelConfig,
{
    /// Name of the model config pre-fab.
    pub name: &'static str,

    /// Description of the model config pre-fab.
    pub description: &'static str,

    /// Builder function for the config.
    pub builder: fn() -> C,

    /// Published config documents for this pre-fab.
    pub archive: Option<&'static StaticConfigArchiveMap<'static>>,
}

impl<C> StaticPreFabConfig<C>
where
    C: 'static + ModelConfig,
{
    /// Convert to a [`PreFabConfig<C>`].
    pub fn to_prefab(&self) -> PreFabConfig<C> {
        let builder = self.builder;
        PreFabConfig {
            name: self.name.to_string(),
            description: self.description.to_string(),
            builder: Arc::new(builder),
            archive: self.archive.map(|a| a.to_directory()),
        }
    }
}

impl<C> From<&StaticPreFabConfig<C>> for PreFabConfig<C>
where
    C: 'static + ModelConfig,
{
    fn from(config: &StaticPreFabConfig<C>) -> Self {
        config.to_prefab()
    }
}

impl<C> Debug for StaticPreFabConfig<C>
where
    C: 'static + ModelConfig,
{
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        self.to_prefab().fmt(f)
    }
}

/// A [`ModelConfig`] Well-Known Pre-Fab.
pub struct PreFabConfig<C>
where
    C: 'static + ModelConfig,
{
    /// Name of the model config pre-fab.
    pub name: String,

    /// Description of the model config pre-fab.
    pub description: String,

    /// Builder function for the config.
    pub builder: Arc<dyn Fn() -> C + Send + Sync>,

    /// Published config documents for this pre-fab.
    pub archive: Option<ConfigArchiveMap>,
}

impl<C> Debug for PreFabConfig<C>
where
    C: 'static + ModelConfig,
{
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        let pretty = f.alternate();

        let type_name = std::any::type_name::<C>();
        let mut handle = f.debug_struct(&format!("PreFabConfig<{}>", type_name));

        handle
            .field("name", &self.name)
            .field("description", &self.description);

        if pretty {
            handle.field("config", &self.new_config());
        }

        handle.finish()
    }
}

impl<C> PreFabConfig<C>
where
    C: 'static + ModelConfig,
{
    /// Build a new config.
    pub fn new_config(&self) -> C {
        (self.builder)()
    }
}

/// Static [`PreFabMap`] builder.
pub struct StaticPreFabMap<C>
where
    C: 'static + ModelConfig,
{
    /// Name of the pre-fab family.
    pub name: &'static str,

    /// Description of the pre-fab family.
    pub description: &'static str,

    /// List of static pre-fabs.
    pub items: &'static [&'static StaticPreFabConfig<C>],
}

impl<C> StaticPreFabMap<C>
where
    C: 'static + ModelConfig,
{
    /// Convert to a [`PreFabMap`].
    pub fn to_directory(&self) -> PreFabMap<C> {
        PreFabMap {
            name: self.name.to_string(),
            description: self.description.to_string(),
            items: self
                .items
                .iter()
                .map(|p| {
                    let prefab = p.to_prefab();
                    (prefab.name.clone(), prefab)
                })
                .collect(),
        }
    }
}

impl<C> From<&StaticPreFabMap<C>> for PreFabMap<C>
where
    C: 'static + ModelConfig,
{
    fn from(map: &StaticPreFabMap<C>) -> Self {
        map.to_directory()
    }
}

impl<C> Debug for StaticPreFabMap<C>
where
    C: 'static + ModelConfig,
{
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        self.to_directory().fmt(f)
    }
}

/// Directory of [`PreFabConfig`]s.
#[derive(Debug)]
pub struct PreFabMap<C>
where
    C: 'static + ModelConfig,
{
    /// Name of the pre-fab family.
    pub name: String,

    /// Description of the pre-fab family.
    pub description: String,

    /// Map of pre-fabs.
    pub items: BTreeMap<String, PreFabConfig<C>>,
}

impl<C> PreFabMap<C>
where
    C: 'static + ModelConfig,
{
    /// Lookup a pre-fab by name.
    pub fn lookup_by_name(
        &self,
        name: &str,
    ) -> Option<&PreFabConfig<C>> {
        self.items.get(name)
    }

    /// Lookup a pre-fab.
    pub fn try_lookup_by_name(
        &self,
        name: &str,
    ) -> anyhow::Result<&PreFabConfig<C>> {
        match self.lookup_by_name(name) {
            Some(p) => Ok(p),
            None => bail!("Pre-fab not found: {}", name),
        }
    }

    /// Lookup a pre-fab.
    pub fn expect_lookup_by_name(
        &self,
        name: &str,
    ) -> &PreFabConfig<C> {
        match self.try_lookup_by_name(name) {
            Ok(p) => p,
            Err(e) => panic!("{}", e),
        }
    }
}
