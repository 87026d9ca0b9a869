//! # `ResNet` Configuration Records

pub mod config;
pub mod prefabs;

pub use config::{EmbeddingsType, HiddenAct, LayerType, ResNetConfig};

/// ResNet-18 stage depths.
pub const RESNET18_DEPTHS: [usize; 4] = [2, 2, 2, 2];
/// ResNet-26 stage depths.
pub const RESNET26_DEPTHS: [usize; 4] = [2, 2, 2, 2];
/// ResNet-34 stage depths.
pub const RESNET34_DEPTHS: [usize; 4] = [3, 4, 6, 3];
/// ResNet-50 stage depths.
pub const RESNET50_DEPTHS: [usize; 4] = [3, 4, 6, 3];
/// ResNet-101 stage depths.
pub const RESNET101_DEPTHS: [usize; 4] = [3, 4, 23, 3];
/// ResNet-152 stage depths.
pub const RESNET152_DEPTHS: [usize; 4] = [3, 8, 36, 3];

/// Per-stage hidden sizes for basic-block models.
pub const BASIC_HIDDEN_SIZES: [usize; 5] = [64, 64, 128, 256, 512];
/// Per-stage hidden sizes for bottleneck models.
pub const BOTTLENECK_HIDDEN_SIZES: [usize; 5] = [64, 256, 512, 1024, 2048];
