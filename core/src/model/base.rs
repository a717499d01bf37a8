//! Judge model capability contracts and shared metadata

use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;

use crate::config::{GenerationParams, ModelType};
use crate::error::Result;

/// Immutable snapshot of the configuration a model was constructed with.
///
/// Kept for introspection and logging; nothing on the generation path reads
/// it back, and no write path exists after construction.
#[derive(Debug, Clone, Serialize)]
pub struct ModelMetadata {
    /// Model name/identifier
    pub model_id: String,

    /// Serving backend family
    pub model_type: ModelType,

    /// Sampling controls the model was set up with
    pub generation_params: GenerationParams,

    /// Extra named options, absorbed unvalidated
    pub kwargs: HashMap<String, serde_json::Value>,
}

impl ModelMetadata {
    /// Create a metadata snapshot
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
}

/// Contract every synchronous judge model satisfies
pub trait JudgeModel: Send + Sync {
    /// Generate a response for a single prompt
    fn generate(&self, prompt: &str) -> Result<String>;

    /// Generate responses for multiple prompts, preserving input order.
    ///
    /// `show_progress` is reserved for implementations that render their
    /// own progress display; the rest accept and ignore it.
    fn batch_generate(&self, prompts: &[String], show_progress: bool) -> Result<Vec<String>>;

    /// Configuration snapshot taken at construction
    fn metadata(&self) -> &ModelMetadata;
}

/// Contract every asynchronous judge model satisfies.
///
/// Mirrors [`JudgeModel`] with suspending calls. Concurrent invocations on
/// one instance are independent; the contract implies no shared mutable
/// state beyond the read-only metadata.
#[async_trait]
pub trait AsyncJudgeModel: Send + Sync {
    /// Generate a response for a single prompt
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Generate responses for multiple prompts, preserving input order
    async fn batch_generate(&self, prompts: &[String], show_progress: bool)
        -> Result<Vec<String>>;

    /// Configuration snapshot taken at construction
    fn metadata(&self) -> &ModelMetadata;
}
