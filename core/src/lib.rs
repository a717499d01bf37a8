//! # Flow Judge Core
//!
//! Core library for Flow Judge - a typed interface layer for invoking
//! large-language-model "judges" that score text outputs against rubrics.
//!
//! This library provides the configuration objects, the model capability
//! contracts, and the remote-model plumbing that evaluation pipelines build
//! on. Transport lives behind the [`ApiAdapter`]/[`AsyncApiAdapter`] traits,
//! so serving backends can be swapped without touching callers.

// Core modules
pub mod config;
pub mod error;
pub mod model;

// Re-export commonly used types
pub use config::{Engine, GenerationParams, ModelConfig, ModelType, VllmGenerationParams};
pub use error::{AdapterError, ConfigError, Error, Result};
pub use model::{
    ApiAdapter, AsyncApiAdapter, AsyncFlowJudgeRemoteModel, AsyncJudgeModel, ChatMessage,
    Conversation, FlowJudgeRemoteModel, JudgeModel, MessageRole, ModelMetadata,
    OpenAiCompatAdapter,
};

/// Current version of the flow-judge-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
