//! API adapter abstractions for remote-hosted judge models
//!
//! An adapter owns the transport to one serving backend and exposes it as
//! conversation-in, text-out. Models hold adapters behind these traits and
//! stay ignorant of how requests travel. Adapters decide their own timeout,
//! retry, and authentication behavior; nothing is layered on top here.

pub mod openai;

pub use openai::OpenAiCompatAdapter;

use async_trait::async_trait;

use super::message::{ChatMessage, Conversation};
use crate::error::Result;

/// Blocking transport to a remote judge backend
pub trait ApiAdapter: Send + Sync {
    /// Send one conversation and return the model's reply
    fn fetch_response(&self, conversation: &[ChatMessage]) -> Result<String>;

    /// Send a batch of conversations and return one reply per input,
    /// in input order
    fn fetch_batched_response(&self, conversations: &[Conversation]) -> Result<Vec<String>>;
}

/// Suspending transport to a remote judge backend
#[async_trait]
pub trait AsyncApiAdapter: Send + Sync {
    /// Send one conversation and return the model's reply
    async fn fetch_response(&self, conversation: &[ChatMessage]) -> Result<String>;

    /// Send a batch of conversations and return one reply per input,
    /// in input order
    async fn fetch_batched_response(&self, conversations: &[Conversation]) -> Result<Vec<String>>;
}
