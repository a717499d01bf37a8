//! Remote judge models delegating to an API adapter
//!
//! The models here own no transport. Each call shapes the prompt into a
//! single-turn conversation and hands it to the injected adapter; whatever
//! the adapter returns, or raises, goes back to the caller untouched. No
//! retry, no post-processing, no validation of adapter output.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use super::adapters::{ApiAdapter, AsyncApiAdapter};
use super::base::{AsyncJudgeModel, JudgeModel, ModelMetadata};
use super::message::{ChatMessage, Conversation};
use crate::config::{GenerationParams, ModelConfig, ModelType};
use crate::error::Result;

fn to_conversation(prompt: &str) -> Conversation {
    vec![ChatMessage::user(prompt.trim())]
}

/// Judge model hosted remotely behind a blocking adapter.
///
/// Holds a shared reference to the adapter; the adapter's lifetime is
/// managed by its creator.
pub struct FlowJudgeRemoteModel {
    metadata: ModelMetadata,
    adapter: Arc<dyn ApiAdapter>,
}

impl FlowJudgeRemoteModel {
    /// Create a new remote model around an adapter
    pub fn new(
        model_id: impl Into<String>,
        model_type: ModelType,
        generation_params: GenerationParams,
        adapter: Arc<dyn ApiAdapter>,
    ) -> Self {
        Self {
            metadata: ModelMetadata::new(model_id, model_type, generation_params),
            adapter,
        }
    }

    /// Create a remote model from a model configuration
    pub fn from_config(config: &ModelConfig, adapter: Arc<dyn ApiAdapter>) -> Self {
        let mut model = Self::new(
            config.model_id.clone(),
            config.model_type,
            config.generation_params.clone(),
            adapter,
        );
        model.metadata.kwargs = config.kwargs.clone();
        model
    }

    /// Absorb extra named options into the metadata snapshot
    pub fn with_kwargs(mut self, kwargs: HashMap<String, serde_json::Value>) -> Self {
        self.metadata.kwargs = kwargs;
        self
    }
}

impl JudgeModel for FlowJudgeRemoteModel {
    fn generate(&self, prompt: &str) -> Result<String> {
        self.adapter.fetch_response(&to_conversation(prompt))
    }

    fn batch_generate(&self, prompts: &[String], _show_progress: bool) -> Result<Vec<String>> {
        let conversations: Vec<Conversation> = prompts.iter().map(|p| to_conversation(p)).collect();
        self.adapter.fetch_batched_response(&conversations)
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}

/// Judge model hosted remotely behind a suspending adapter
pub struct AsyncFlowJudgeRemoteModel {
    metadata: ModelMetadata,
    adapter: Arc<dyn AsyncApiAdapter>,
}

impl AsyncFlowJudgeRemoteModel {
    /// Create a new async remote model around an adapter
    pub fn new(
        model_id: impl Into<String>,
        model_type: ModelType,
        generation_params: GenerationParams,
        adapter: Arc<dyn AsyncApiAdapter>,
    ) -> Self {
        Self {
            metadata: ModelMetadata::new(model_id, model_type, generation_params),
            adapter,
        }
    }

    /// Create an async remote model from a model configuration
    pub fn from_config(config: &ModelConfig, adapter: Arc<dyn AsyncApiAdapter>) -> Self {
        let mut model = Self::new(
            config.model_id.clone(),
            config.model_type,
            config.generation_params.clone(),
            adapter,
        );
        model.metadata.kwargs = config.kwargs.clone();
        model
    }

    /// Absorb extra named options into the metadata snapshot
    pub fn with_kwargs(mut self, kwargs: HashMap<String, serde_json::Value>) -> Self {
        self.metadata.kwargs = kwargs;
        self
    }
}

#[async_trait]
impl AsyncJudgeModel for AsyncFlowJudgeRemoteModel {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.adapter.fetch_response(&to_conversation(prompt)).await
    }

    async fn batch_generate(
        &self,
        prompts: &[String],
        _show_progress: bool,
    ) -> Result<Vec<String>> {
        let conversations: Vec<Conversation> = prompts.iter().map(|p| to_conversation(p)).collect();
        self.adapter.fetch_batched_response(&conversations).await
    }

    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}
