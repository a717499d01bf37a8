//! Configuration types for judge models
//!
//! Only pure data types live here. Callers construct these directly and
//! hand them to a model at setup time.

pub mod generation;
pub mod types;

pub use generation::{GenerationParams, VllmGenerationParams, DEFAULT_STOP_TOKEN_IDS};
pub use types::{Engine, ModelConfig, ModelType};
