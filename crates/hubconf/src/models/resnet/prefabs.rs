//! # Well-Known `ResNet` Configuration Records

use crate::cache::archive::{StaticConfigArchiveDescriptor, StaticConfigArchiveMap};
use crate::cache::prefabs::{StaticPreFabConfig, StaticPreFabMap};
use crate::models::resnet::{
    BOTTLENECK_HIDDEN_SIZES, LayerType, RESNET18_DEPTHS, RESNET26_DEPTHS, RESNET34_DEPTHS,
    RESNET50_DEPTHS, ResNetConfig,
};

/// Published config documents for ResNet-18.
pub static RESNET18_ARCHIVE: StaticConfigArchiveMap = StaticConfigArchiveMap {
    items: &[&StaticConfigArchiveDescriptor {
        name: "ms_in1k",
        description: "ResNet-18 trained on ImageNet-1k",
        license: Some("apache-2.0"),
        origin: Some("https://huggingface.co/microsoft/resnet-18"),
        urls: &["https://huggingface.co/microsoft/resnet-18/resolve/main/config.json"],
    }],
};

/// Published config documents for ResNet-26.
pub static RESNET26_ARCHIVE: StaticConfigArchiveMap = StaticConfigArchiveMap {
    items: &[&StaticConfigArchiveDescriptor {
        name: "ms_in1k",
        description: "ResNet-26 trained on ImageNet-1k",
        license: Some("apache-2.0"),
        origin: Some("https://huggingface.co/microsoft/resnet-26"),
        urls: &["https://huggingface.co/microsoft/resnet-26/resolve/main/config.json"],
    }],
};

/// Published config documents for ResNet-34.
pub static RESNET34_ARCHIVE: StaticConfigArchiveMap = StaticConfigArchiveMap {
    items: &[&StaticConfigArchiveDescriptor {
        name: "ms_in1k",
        description: "ResNet-34 trained on ImageNet-1k",
        license: Some("apache-2.0"),
        origin: Some("https://huggingface.co/microsoft/resnet-34"),
        urls: &["https://huggingface.co/microsoft/resnet-34/resolve/main/config.json"],
    }],
};

/// Published config documents for ResNet-50.
pub static RESNET50_ARCHIVE: StaticConfigArchiveMap = StaticConfigArchiveMap {
    items: &[&StaticConfigArchiveDescriptor {
        name: "ms_in1k",
        description: "ResNet-50 trained on ImageNet-1k",
        license: Some("apache-2.0"),
        origin: Some("https://huggingface.co/microsoft/resnet-50"),
        urls: &["https://huggingface.co/microsoft/resnet-50/resolve/main/config.json"],
    }],
};

/// Well-known [`ResNetConfig`] pre-fabs.
pub static PREFAB_RESNET_MAP: StaticPreFabMap<ResNetConfig> = StaticPreFabMap {
    name: "resnet",
    description: "Well-known ResNet configuration records",

    items: &[
        &StaticPreFabConfig {
            name: "resnet18",
            description: "ResNet-18; [2, 2, 2, 2] basic blocks",
            builder: || ResNetConfig::new().with_depths(RESNET18_DEPTHS.to_vec()),
            archive: Some(&RESNET18_ARCHIVE),
        },
        &StaticPreFabConfig {
            name: "resnet26",
            description: "ResNet-26; [2, 2, 2, 2] bottleneck blocks",
            builder: || {
                ResNetConfig::new()
                    .with_depths(RESNET26_DEPTHS.to_vec())
                    .with_hidden_sizes(BOTTLENECK_HIDDEN_SIZES.to_vec())
                    .with_layer_type(LayerType::Bottleneck)
            },
            archive: Some(&RESNET26_ARCHIVE),
        },
        &StaticPreFabConfig {
            name: "resnet34",
            description: "ResNet-34; [3, 4, 6, 3] basic blocks",
            builder: || ResNetConfig::new().with_depths(RESNET34_DEPTHS.to_vec()),
            archive: Some(&RESNET34_ARCHIVE),
        },
        &StaticPreFabConfig {
            name: "resnet50",
            description: "ResNet-50; [3, 4, 6, 3] bottleneck blocks",
            builder: || {
                ResNetConfig::new()
                    .with_depths(RESNET50_DEPTHS.to_vec())
                    .with_hidden_sizes(BOTTLENECK_HIDDEN_SIZES.to_vec())
                    .with_layer_type(LayerType::Bottleneck)
            },
            archive: Some(&RESNET50_ARCHIVE),
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::disk::DiskCacheConfig;
    use crate::config::ModelConfig;

    #[test]
    fn test_prefab_lookup_and_build() {
        let map = PREFAB_RESNET_MAP.to_directory();

        let prefab = map.expect_lookup_by_name("resnet18");
        let config = prefab.new_config();
        assert_eq!(config.depths, vec![2, 2, 2, 2]);
        assert_eq!(config.layer_type, LayerType::Basic);
        assert_eq!(config.model_type(), "resnet");

        let prefab = map.expect_lookup_by_name("resnet50");
        let config = prefab.new_config();
        assert_eq!(config.depths, vec![3, 4, 6, 3]);
        assert_eq!(config.layer_type, LayerType::Bottleneck);
        assert_eq!(config.hidden_sizes, vec![64, 256, 512, 1024, 2048]);

        assert!(map.lookup_by_name("resnet9000").is_none());
        assert!(map.try_lookup_by_name("resnet9000").is_err());
    }

    #[test]
    fn test_prefab_archive_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let disk_cache = DiskCacheConfig::new()
            .with_cache_home(Some(dir.path().to_string_lossy().to_string()));

        let map = PREFAB_RESNET_MAP.to_directory();
        let prefab = map.expect_lookup_by_name("resnet34");

        let archive = prefab.archive.as_ref().unwrap();
        let descriptor = archive.expect_lookup_by_name("ms_in1k");

        // Nothing installed yet.
        assert!(
            descriptor
                .load_from_disk_cache::<ResNetConfig>(&disk_cache)
                .is_err()
        );

        // Stand in for an externally retrieved hub document.
        let source = dir.path().join("config.json");
        prefab.new_config().save_config(&source).unwrap();

        descriptor
            .install_to_disk_cache(&disk_cache, &source)
            .unwrap();

        let loaded: ResNetConfig = descriptor.load_from_disk_cache(&disk_cache).unwrap();
        assert_eq!(loaded, prefab.new_config());
    }
}
