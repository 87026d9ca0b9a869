//! # `ResNet` Configuration Record
//!
//! [`ResNetConfig`] is the hub configuration record for the `ResNet`
//! family. It is a passive hyperparameter bag: construction performs
//! no validation, and a record built entirely from defaults describes
//! the stock 4-stage basic-block network.
//!
//! [`ResNetConfig`] implements [`ModelConfig`], and persists as a
//! `config.json` document tagged ``"model_type": "resnet"``.
//!
//! Consistency checks are advisory and opt-in via
//! [`ResNetConfig::try_validate`]; published configs with mismatched
//! stage sequences must still load.

use crate::config::{ExtraFields, ModelConfig};
use burn::config::Config;
use serde::{Deserialize, Serialize};

/// Non-linear activation selector for the residual blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiddenAct {
    /// Rectified linear unit.
    #[default]
    Relu,

    /// Gaussian error linear unit.
    Gelu,

    /// Scaled exponential linear unit.
    Selu,

    /// Tanh-approximated gelu.
    GeluNew,
}

impl HiddenAct {
    /// The persisted tag for this activation.
    pub fn as_str(&self) -> &'static str {
        match self {
            HiddenAct::Relu => "relu",
            HiddenAct::Gelu => "gelu",
            HiddenAct::Selu => "selu",
            HiddenAct::GeluNew => "gelu_new",
        }
    }
}

/// Residual block variant selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerType {
    /// Two 3x3 conv/norm layers per block.
    #[default]
    Basic,

    /// 1x1 / 3x3 / 1x1 conv/norm layers with channel expansion.
    Bottleneck,
}

/// Embedding (input stem) variant selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbeddingsType {
    /// Single 7x7 convolution with stride 2.
    #[default]
    Classic,

    /// Three 3x3 convolutions of uniform width.
    Deep,

    /// Three 3x3 convolutions with tiered widths.
    DeepTiered,
}

/// [`ResNet`] family configuration record.
///
/// Every field takes a literal default when omitted, both in [`new`]
/// and when decoding a config.json with missing keys. Unrecognized
/// keys land in [`extra`] and survive a round-trip verbatim.
///
/// [`ResNet`]: https://arxiv.org/abs/1512.03385
/// [`new`]: ResNetConfig::new
/// [`extra`]: ResNetConfig::extra
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResNetConfig {
    /// Number of input image channels.
    pub num_channels: usize,

    /// Hidden dimensionality at each stage.
    pub hidden_sizes: Vec<usize>,

    /// Number of blocks at each stage.
    ///
    /// Kept independent of `hidden_sizes`; the lengths are not
    /// reconciled here. See [`ResNetConfig::num_stages`].
    pub depths: Vec<usize>,

    /// Embedding layer variant.
    pub embeddings_type: EmbeddingsType,

    /// Residual block variant.
    pub layer_type: LayerType,

    /// Block activation function.
    pub hidden_act: HiddenAct,

    /// Standard deviation of the truncated-normal weight initializer.
    pub initializer_range: f64,

    /// Epsilon used by the normalization layers.
    pub layer_norm_eps: f64,

    /// Generic base metadata; always `false` for a pure vision encoder.
    pub is_encoder_decoder: bool,

    /// Initial value for the per-channel learned layer scale.
    pub layer_scale_init_value: f64,

    /// Drop rate for stochastic depth.
    pub drop_path_rate: f64,

    /// Unrecognized config keys, preserved verbatim.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Default for ResNetConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for ResNetConfig {}

impl ModelConfig for ResNetConfig {
    const MODEL_TYPE: &'static str = "resnet";
}

impl ResNetConfig {
    /// Create a record with the stock defaults.
    pub fn new() -> Self {
        Self {
            num_channels: 3,
            hidden_sizes: vec![64, 64, 128, 256, 512],
            depths: vec![3, 4, 6, 3],
            embeddings_type: EmbeddingsType::Classic,
            layer_type: LayerType::Basic,
            hidden_act: HiddenAct::Relu,
            initializer_range: 0.02,
            layer_norm_eps: 1e-12,
            is_encoder_decoder: false,
            layer_scale_init_value: 1e-6,
            drop_path_rate: 0.0,
            extra: ExtraFields::new(),
        }
    }

    /// Update the number of input channels.
    pub fn with_num_channels(
        mut self,
        num_channels: usize,
    ) -> Self {
        self.num_channels = num_channels;
        self
    }

    /// Update the per-stage hidden sizes.
    pub fn with_hidden_sizes(
        mut self,
        hidden_sizes: Vec<usize>,
    ) -> Self {
        self.hidden_sizes = hidden_sizes;
        self
    }

    /// Update the per-stage depths.
    pub fn with_depths(
        mut self,
        depths: Vec<usize>,
    ) -> Self {
        self.depths = depths;
        self
    }

    /// Update the embedding variant.
    pub fn with_embeddings_type(
        mut self,
        embeddings_type: EmbeddingsType,
    ) -> Self {
        self.embeddings_type = embeddings_type;
        self
    }

    /// Update the residual block variant.
    pub fn with_layer_type(
        mut self,
        layer_type: LayerType,
    ) -> Self {
        self.layer_type = layer_type;
        self
    }

    /// Update the block activation.
    pub fn with_hidden_act(
        mut self,
        hidden_act: HiddenAct,
    ) -> Self {
        self.hidden_act = hidden_act;
        self
    }

    /// Update the weight initializer standard deviation.
    pub fn with_initializer_range(
        mut self,
        initializer_range: f64,
    ) -> Self {
        self.initializer_range = initializer_range;
        self
    }

    /// Update the normalization epsilon.
    pub fn with_layer_norm_eps(
        mut self,
        layer_norm_eps: f64,
    ) -> Self {
        self.layer_norm_eps = layer_norm_eps;
        self
    }

    /// Update the layer scale initial value.
    pub fn with_layer_scale_init_value(
        mut self,
        layer_scale_init_value: f64,
    ) -> Self {
        self.layer_scale_init_value = layer_scale_init_value;
        self
    }

    /// Update the stochastic depth rate.
    pub fn with_drop_path_rate(
        mut self,
        drop_path_rate: f64,
    ) -> Self {
        self.drop_path_rate = drop_path_rate;
        self
    }

    /// The effective stage count.
    ///
    /// Model builders zip `hidden_sizes` against `depths`, so a
    /// mismatched record yields the shorter of the two.
    pub fn num_stages(&self) -> usize {
        self.hidden_sizes.len().min(self.depths.len())
    }

    /// Check if the record is internally consistent.
    ///
    /// Advisory only. Construction and decoding never call this;
    /// an inconsistent record is accepted and surfaces downstream
    /// at model-build time.
    ///
    /// # Returns
    ///
    /// A `Result<(), String>`
    pub fn try_validate(&self) -> Result<(), String> {
        if self.num_channels == 0 {
            return Err("num_channels is zero".to_string());
        }
        if self.depths.len() != self.hidden_sizes.len() {
            return Err(format!(
                "depths.len({}) != hidden_sizes.len({})",
                self.depths.len(),
                self.hidden_sizes.len(),
            ));
        }
        if self.initializer_range < 0.0 {
            return Err(format!(
                "initializer_range is negative: {}",
                self.initializer_range,
            ));
        }
        if self.layer_norm_eps <= 0.0 {
            return Err(format!(
                "layer_norm_eps is not positive: {}",
                self.layer_norm_eps,
            ));
        }
        if !(0.0..=1.0).contains(&self.drop_path_rate) {
            return Err(format!(
                "drop_path_rate is not a probability: {}",
                self.drop_path_rate,
            ));
        }
        Ok(())
    }

    /// Panic if `try_validate` returns an error.
    pub fn expect_valid(&self) {
        match self.try_validate() {
            Ok(_) => (),
            Err(err) => panic!("{}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::peek_model_type;
    use serde_json::Value;

    #[test]
    fn test_default_record() {
        let config = ResNetConfig::new();

        assert_eq!(config.num_channels, 3);
        assert_eq!(config.hidden_sizes, vec![64, 64, 128, 256, 512]);
        assert_eq!(config.depths, vec![3, 4, 6, 3]);
        assert_eq!(config.embeddings_type, EmbeddingsType::Classic);
        assert_eq!(config.layer_type, LayerType::Basic);
        assert_eq!(config.hidden_act, HiddenAct::Relu);
        assert_eq!(config.initializer_range, 0.02);
        assert_eq!(config.layer_norm_eps, 1e-12);
        assert!(!config.is_encoder_decoder);
        assert_eq!(config.layer_scale_init_value, 1e-6);
        assert_eq!(config.drop_path_rate, 0.0);
        assert!(config.extra.is_empty());

        assert_eq!(config, ResNetConfig::default());
        assert_eq!(config.model_type(), "resnet");
    }

    #[test]
    fn test_overrides_pass_through() {
        let config = ResNetConfig::new()
            .with_num_channels(1)
            .with_depths(vec![2, 2]);

        assert_eq!(config.num_channels, 1);
        assert_eq!(config.depths, vec![2, 2]);
        // The mismatched 5-element default is accepted, not corrected.
        assert_eq!(config.hidden_sizes, vec![64, 64, 128, 256, 512]);
        assert_eq!(config.num_stages(), 2);

        assert!(config.try_validate().is_err());
    }

    #[test]
    fn test_construction_is_idempotent() {
        let a = ResNetConfig::new()
            .with_hidden_act(HiddenAct::GeluNew)
            .with_drop_path_rate(0.1);
        let b = ResNetConfig::new()
            .with_hidden_act(HiddenAct::GeluNew)
            .with_drop_path_rate(0.1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_stages_accepted() {
        let config = ResNetConfig::new()
            .with_hidden_sizes(vec![])
            .with_depths(vec![]);

        assert_eq!(config.num_stages(), 0);
        // Consistent, just empty; the advisory check passes.
        assert!(config.try_validate().is_ok());
    }

    #[test]
    fn test_validate_flags_bad_scalars() {
        assert!(
            ResNetConfig::new()
                .with_num_channels(0)
                .try_validate()
                .is_err()
        );
        assert!(
            ResNetConfig::new()
                .with_layer_norm_eps(0.0)
                .try_validate()
                .is_err()
        );
        assert!(
            ResNetConfig::new()
                .with_drop_path_rate(1.5)
                .try_validate()
                .is_err()
        );
        assert!(
            ResNetConfig::new()
                .with_initializer_range(-0.1)
                .try_validate()
                .is_err()
        );
    }

    #[test]
    #[should_panic(expected = "depths.len(2) != hidden_sizes.len(5)")]
    fn test_expect_valid_panics_on_mismatch() {
        ResNetConfig::new().with_depths(vec![2, 2]).expect_valid();
    }

    #[test]
    fn test_config_map_round_trip() {
        let config = ResNetConfig::new()
            .with_layer_type(LayerType::Bottleneck)
            .with_hidden_sizes(vec![256, 512, 1024, 2048])
            .with_depths(vec![3, 4, 6, 3]);

        let map = config.to_config_map().unwrap();
        assert_eq!(peek_model_type(&map), Some("resnet"));
        assert_eq!(map.get("layer_type"), Some(&Value::from("bottleneck")));
        assert_eq!(map.get("hidden_act"), Some(&Value::from("relu")));

        let restored = ResNetConfig::from_config_map(map).unwrap();
        assert_eq!(restored, config);
        assert!(restored.extra.is_empty());
    }

    #[test]
    fn test_enum_tags() {
        assert_eq!(HiddenAct::GeluNew.as_str(), "gelu_new");
        assert_eq!(
            serde_json::to_value(HiddenAct::GeluNew).unwrap(),
            Value::from("gelu_new")
        );
        assert_eq!(
            serde_json::to_value(EmbeddingsType::DeepTiered).unwrap(),
            Value::from("deep_tiered")
        );
        assert_eq!(
            serde_json::from_value::<LayerType>(Value::from("bottleneck")).unwrap(),
            LayerType::Bottleneck
        );
    }

    #[test]
    fn test_hub_document_decode() {
        let doc = indoc::indoc! {r#"
            {
              "model_type": "resnet",
              "num_channels": 1,
              "depths": [2, 2, 2, 2],
              "hidden_sizes": [64, 128, 256, 512],
              "hidden_act": "gelu",
              "torch_dtype": "float32",
              "architectures": ["ResNetModel"]
            }
        "#};

        let config = ResNetConfig::from_json_str(doc).unwrap();

        assert_eq!(config.num_channels, 1);
        assert_eq!(config.depths, vec![2, 2, 2, 2]);
        assert_eq!(config.hidden_act, HiddenAct::Gelu);
        // Omitted keys take the literal defaults.
        assert_eq!(config.layer_norm_eps, 1e-12);
        assert_eq!(config.layer_type, LayerType::Basic);

        // Unknown keys are captured, and survive re-encoding.
        assert_eq!(config.extra.get("torch_dtype"), Some(&Value::from("float32")));
        let map = config.to_config_map().unwrap();
        assert_eq!(
            map.get("architectures"),
            Some(&Value::from(vec!["ResNetModel"]))
        );
    }
}
