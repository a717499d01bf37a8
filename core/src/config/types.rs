//! Model configuration structures

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::generation::GenerationParams;

/// Serving backend family a model configuration targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    /// Hugging Face Transformers
    Transformers,
    /// vLLM, synchronous engine
    Vllm,
    /// vLLM, asynchronous engine
    VllmAsync,
    /// Llamafile single-binary runtime
    Llamafile,
    /// vLLM hosted behind an OpenAI-compatible API (Baseten)
    BasetenVllm,
}

impl ModelType {
    /// Get the model type as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::Transformers => "transformers",
            ModelType::Vllm => "vllm",
            ModelType::VllmAsync => "vllm_async",
            ModelType::Llamafile => "llamafile",
            ModelType::BasetenVllm => "baseten_vllm",
        }
    }
}

/// Internal identifier for the engine driving a local model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Engine {
    /// vLLM, synchronous
    Vllm,
    /// vLLM, asynchronous
    VllmAsync,
    /// HF stands for Hugging Face (Transformers)
    Hf,
    /// Llamafile
    Llamafile,
}

impl Engine {
    /// Get the engine identifier as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Vllm => "vllm",
            Engine::VllmAsync => "vllm_async",
            Engine::Hf => "hf",
            Engine::Llamafile => "llamafile",
        }
    }
}

/// Configuration for a single judge model.
///
/// A value object: built once at setup time and read-only afterwards.
/// `kwargs` is an open bag of backend-specific options; unknown keys pass
/// through unvalidated and are never checked against the model type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model name/identifier
    pub model_id: String,

    /// Serving backend family
    pub model_type: ModelType,

    /// Sampling controls
    pub generation_params: GenerationParams,

    /// Backend-specific extra options
    #[serde(default)]
    pub kwargs: HashMap<String, serde_json::Value>,
}

impl ModelConfig {
    /// Create a new model configuration
    pub fn new(
        model_id: impl Into<String>,
        model_type: ModelType,
        generation_params: GenerationParams,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            model_type,
            generation_params,
            kwargs: HashMap::new(),
        }
    }

    /// Attach an extra option
    pub fn with_kwarg(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.kwargs.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn model_type_tags_match_backend_names() {
        assert_eq!(ModelType::Transformers.as_str(), "transformers");
        assert_eq!(ModelType::VllmAsync.as_str(), "vllm_async");
        assert_eq!(ModelType::BasetenVllm.as_str(), "baseten_vllm");
        assert_eq!(
            serde_json::to_value(ModelType::BasetenVllm).unwrap(),
            json!("baseten_vllm")
        );
    }

    #[test]
    fn engine_tags_round_trip_through_serde() {
        for engine in [Engine::Vllm, Engine::VllmAsync, Engine::Hf, Engine::Llamafile] {
            let value = serde_json::to_value(engine).unwrap();
            assert_eq!(value, json!(engine.as_str()));
            assert_eq!(serde_json::from_value::<Engine>(value).unwrap(), engine);
        }
    }

    #[test]
    fn kwargs_pass_through_unvalidated() {
        let config = ModelConfig::new(
            "flowaicom/Flow-Judge-v0.1",
            ModelType::Vllm,
            GenerationParams::default(),
        )
        .with_kwarg("quantization", json!("awq"))
        .with_kwarg("gpu_memory_utilization", json!(0.9));

        assert_eq!(config.kwargs["quantization"], json!("awq"));
        assert_eq!(config.kwargs["gpu_memory_utilization"], json!(0.9));

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["kwargs"]["quantization"], json!("awq"));
    }
}
