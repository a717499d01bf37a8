//! Judge model abstractions and implementations

pub mod adapters;
pub mod base;
pub mod message;
pub mod remote;

pub use adapters::{ApiAdapter, AsyncApiAdapter, OpenAiCompatAdapter};
pub use base::{AsyncJudgeModel, JudgeModel, ModelMetadata};
pub use message::{ChatMessage, Conversation, MessageRole};
pub use remote::{AsyncFlowJudgeRemoteModel, FlowJudgeRemoteModel};
