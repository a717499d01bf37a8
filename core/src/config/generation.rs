//! Generation parameter objects
//!
//! [`GenerationParams`] is the backend-neutral set of sampling controls.
//! [`VllmGenerationParams`] reshapes it into the field names vLLM's
//! sampling layer expects.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Token ids vLLM stops on unless told otherwise (Phi-3 end-of-turn family)
pub const DEFAULT_STOP_TOKEN_IDS: [u32; 3] = [32007, 32001, 32000];

/// Backend-neutral sampling controls.
///
/// `temperature` and `top_p` only take effect while `do_sample` is true;
/// keeping the combination meaningful is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Temperature for sampling
    pub temperature: f32,

    /// Top-p (nucleus) sampling threshold
    pub top_p: f32,

    /// Maximum number of new tokens to generate
    pub max_new_tokens: u32,

    /// Whether to sample or decode greedily
    pub do_sample: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.1,
            top_p: 0.95,
            max_new_tokens: 1000,
            do_sample: true,
        }
    }
}

impl GenerationParams {
    /// Parse parameters out of a loose JSON mapping.
    ///
    /// Omitted fields resolve to the documented defaults. A field carrying
    /// a value of the wrong primitive type is a configuration error.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| {
            ConfigError::InvalidGenerationParams {
                message: e.to_string(),
            }
            .into()
        })
    }
}

/// Sampling controls shaped for vLLM.
///
/// vLLM takes `max_tokens` instead of `max_new_tokens` and has no
/// `do_sample` switch, so conversion renames the former and drops the
/// latter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VllmGenerationParams {
    /// Temperature for sampling
    pub temperature: f32,

    /// Top-p (nucleus) sampling threshold
    pub top_p: f32,

    /// Maximum number of tokens to generate
    pub max_tokens: u32,

    /// Token ids that terminate generation
    pub stop_token_ids: Vec<u32>,
}

impl From<GenerationParams> for VllmGenerationParams {
    fn from(params: GenerationParams) -> Self {
        Self {
            temperature: params.temperature,
            top_p: params.top_p,
            max_tokens: params.max_new_tokens,
            // every instance gets its own buffer
            stop_token_ids: DEFAULT_STOP_TOKEN_IDS.to_vec(),
        }
    }
}

impl Default for VllmGenerationParams {
    fn default() -> Self {
        GenerationParams::default().into()
    }
}

impl VllmGenerationParams {
    /// Replace the default stop-token ids
    pub fn with_stop_token_ids(mut self, stop_token_ids: Vec<u32>) -> Self {
        self.stop_token_ids = stop_token_ids;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn defaults_match_documented_values() {
        let params = GenerationParams::default();
        assert_eq!(params.temperature, 0.1);
        assert_eq!(params.top_p, 0.95);
        assert_eq!(params.max_new_tokens, 1000);
        assert!(params.do_sample);
    }

    #[test]
    fn from_value_fills_omitted_fields_with_defaults() {
        let params = GenerationParams::from_value(json!({ "temperature": 0.7 })).unwrap();
        assert_eq!(params.temperature, 0.7);
        assert_eq!(params.top_p, 0.95);
        assert_eq!(params.max_new_tokens, 1000);
        assert!(params.do_sample);
    }

    #[test]
    fn from_value_rejects_mistyped_fields() {
        let err = GenerationParams::from_value(json!({ "temperature": "hot" })).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidGenerationParams { .. })
        ));
    }

    #[test]
    fn vllm_params_rename_the_token_limit() {
        let params = GenerationParams {
            max_new_tokens: 256,
            ..Default::default()
        };
        let vllm = VllmGenerationParams::from(params.clone());
        assert_eq!(vllm.max_tokens, 256);
        assert_eq!(vllm.temperature, params.temperature);
        assert_eq!(vllm.top_p, params.top_p);
    }

    #[test]
    fn vllm_params_serialize_without_generic_fields() {
        let value = serde_json::to_value(VllmGenerationParams::default()).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("max_tokens"));
        assert!(!object.contains_key("max_new_tokens"));
        assert!(!object.contains_key("do_sample"));
    }

    #[test]
    fn each_instance_owns_its_stop_token_ids() {
        let mut first = VllmGenerationParams::default();
        let second = VllmGenerationParams::default();
        first.stop_token_ids.push(2);
        assert_eq!(second.stop_token_ids, DEFAULT_STOP_TOKEN_IDS.to_vec());
    }

    #[test]
    fn stop_token_ids_can_be_overridden() {
        let vllm = VllmGenerationParams::default().with_stop_token_ids(vec![1, 2]);
        assert_eq!(vllm.stop_token_ids, vec![1, 2]);
    }
}
