//! # Configuration Record Capability
//!
//! Hub configuration records are flat key/value bags that persist as
//! `config.json` documents. [`ModelConfig`] is the capability a record
//! composes with to participate in that convention:
//!
//! * conversion to and from a flat [`Map`] form,
//! * a fixed `model_type` tag for loader-side dispatch,
//! * config.json file IO.
//!
//! Records capture unknown keys in an [`ExtraFields`] map (via
//! `#[serde(flatten)]`) so that fields written by newer framework
//! versions survive a round-trip verbatim.

use anyhow::bail;
use burn::config::Config;
use serde_json::{Map, Value};
use std::fmt::Debug;
use std::fs;
use std::path::Path;

/// The map key carrying the dispatch tag in a persisted config.
pub const MODEL_TYPE_KEY: &str = "model_type";

/// Catch-all for unrecognized config keys.
///
/// Preserved verbatim when a record round-trips through its map form.
pub type ExtraFields = Map<String, Value>;

/// Read the dispatch tag of a raw config map, if present.
pub fn peek_model_type(map: &Map<String, Value>) -> Option<&str> {
    map.get(MODEL_TYPE_KEY).and_then(|v| v.as_str())
}

/// Capability trait for model hub configuration records.
///
/// Extends [`Config`] (serde + config save/load) with the flat-map
/// conversion and `model_type` dispatch used by hub `config.json`
/// documents.
pub trait ModelConfig: Config + Clone + Debug {
    /// The fixed dispatch tag for this record family.
    const MODEL_TYPE: &'static str;

    /// The dispatch tag of this record.
    fn model_type(&self) -> &'static str {
        Self::MODEL_TYPE
    }

    /// Convert to the flat map form.
    ///
    /// The map is the serialized field set plus the fixed
    /// `model_type` tag.
    fn to_config_map(&self) -> anyhow::Result<Map<String, Value>> {
        let value = serde_json::to_value(self)?;
        let Value::Object(mut map) = value else {
            bail!("config did not serialize to a map: {value}");
        };
        map.insert(
            MODEL_TYPE_KEY.to_string(),
            Value::String(Self::MODEL_TYPE.to_string()),
        );
        Ok(map)
    }

    /// Reconstruct a record from its flat map form.
    ///
    /// A `model_type` tag, when present, must match
    /// [`Self::MODEL_TYPE`]; it is stripped before decoding so it does
    /// not land in the record's extra fields. Maps without a tag are
    /// accepted. Unknown keys are captured, not rejected.
    fn from_config_map(mut map: Map<String, Value>) -> anyhow::Result<Self> {
        if let Some(tag) = map.remove(MODEL_TYPE_KEY) {
            match tag.as_str() {
                Some(t) if t == Self::MODEL_TYPE => (),
                _ => bail!(
                    "model_type mismatch: expected {:?}, found {tag}",
                    Self::MODEL_TYPE,
                ),
            }
        }
        Ok(serde_json::from_value(Value::Object(map))?)
    }

    /// Render as a pretty-printed config.json document.
    fn to_json_pretty(&self) -> anyhow::Result<String> {
        let map = self.to_config_map()?;
        Ok(serde_json::to_string_pretty(&Value::Object(map))?)
    }

    /// Decode from a config.json document.
    fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(map) = value else {
            bail!("config document is not a map: {value}");
        };
        Self::from_config_map(map)
    }

    /// Write a config.json file.
    fn save_config<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> anyhow::Result<()> {
        let mut doc = self.to_json_pretty()?;
        doc.push('\n');
        fs::write(path, doc)?;
        Ok(())
    }

    /// Read a config.json file.
    fn load_config<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let doc = fs::read_to_string(path)?;
        Self::from_json_str(&doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    #[serde(default)]
    struct ToyConfig {
        width: usize,
        #[serde(flatten)]
        extra: ExtraFields,
    }

    impl Default for ToyConfig {
        fn default() -> Self {
            Self {
                width: 8,
                extra: ExtraFields::new(),
            }
        }
    }

    impl Config for ToyConfig {}

    impl ModelConfig for ToyConfig {
        const MODEL_TYPE: &'static str = "toy";
    }

    #[test]
    fn test_config_map_round_trip() {
        let config = ToyConfig::default();
        let map = config.to_config_map().unwrap();

        assert_eq!(peek_model_type(&map), Some("toy"));
        assert_eq!(map.get("width"), Some(&Value::from(8)));

        let restored = ToyConfig::from_config_map(map).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_unknown_keys_survive_round_trip() {
        let mut map = Map::new();
        map.insert("width".to_string(), Value::from(4));
        map.insert("torch_dtype".to_string(), Value::from("float32"));

        let config = ToyConfig::from_config_map(map).unwrap();
        assert_eq!(config.extra.get("torch_dtype"), Some(&Value::from("float32")));

        let map = config.to_config_map().unwrap();
        assert_eq!(map.get("torch_dtype"), Some(&Value::from("float32")));
    }

    #[test]
    fn test_missing_tag_accepted() {
        let mut map = Map::new();
        map.insert("width".to_string(), Value::from(3));

        let config = ToyConfig::from_config_map(map).unwrap();
        assert_eq!(config.width, 3);
    }

    #[test]
    fn test_mismatched_tag_rejected() {
        let mut map = Map::new();
        map.insert(MODEL_TYPE_KEY.to_string(), Value::from("swin"));

        let err = ToyConfig::from_config_map(map).unwrap_err();
        assert!(err.to_string().contains("model_type mismatch"));
    }

    #[test]
    fn test_save_and_load_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = ToyConfig::default();
        config.save_config(&path).unwrap();

        let doc = std::fs::read_to_string(&path).unwrap();
        assert!(doc.contains("\"model_type\": \"toy\""));

        let restored = ToyConfig::load_config(&path).unwrap();
        assert_eq!(restored, config);
    }
}
