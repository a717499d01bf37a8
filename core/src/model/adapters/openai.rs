//! OpenAI-compatible chat-completions adapter
//!
//! Targets hosted vLLM deployments that speak the OpenAI chat API, such as
//! Baseten endpoints. One HTTP request per conversation; batches fan out
//! concurrently and are collected in input order. Failures are reported as
//! [`AdapterError`] values and never retried here.

use async_trait::async_trait;
use futures::future::try_join_all;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::AsyncApiAdapter;
use crate::config::VllmGenerationParams;
use crate::error::{AdapterError, Result};
use crate::model::message::{ChatMessage, Conversation};

/// Adapter for OpenAI-compatible chat-completions endpoints
pub struct OpenAiCompatAdapter {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    params: VllmGenerationParams,
}

impl OpenAiCompatAdapter {
    /// Create a new adapter for one endpoint/model pair
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            params: VllmGenerationParams::default(),
        }
    }

    /// Replace the default sampling parameters
    pub fn with_params(mut self, params: VllmGenerationParams) -> Self {
        self.params = params;
        self
    }

    fn build_request<'a>(&'a self, conversation: &'a [ChatMessage]) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.model,
            messages: conversation,
            temperature: self.params.temperature,
            top_p: self.params.top_p,
            max_tokens: self.params.max_tokens,
            stop_token_ids: &self.params.stop_token_ids,
        }
    }
}

#[async_trait]
impl AsyncApiAdapter for OpenAiCompatAdapter {
    async fn fetch_response(&self, conversation: &[ChatMessage]) -> Result<String> {
        let request = self.build_request(conversation);

        tracing::debug!(
            "Sending chat completion request for {} to {}",
            self.model,
            self.base_url
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| AdapterError::Network {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            tracing::error!("Chat completion request failed: {} - {}", status, message);
            return Err(AdapterError::Api { status, message }.into());
        }

        let completion: ChatCompletionResponse =
            response.json().await.map_err(|e| AdapterError::MalformedResponse {
                message: e.to_string(),
            })?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                AdapterError::MalformedResponse {
                    message: "response contained no choices".to_string(),
                }
                .into()
            })
    }

    async fn fetch_batched_response(&self, conversations: &[Conversation]) -> Result<Vec<String>> {
        // try_join_all keeps results in input order and fails the whole
        // batch on the first error
        try_join_all(conversations.iter().map(|c| self.fetch_response(c))).await
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
    stop_token_ids: &'a [u32],
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: ChatCompletionMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_payload_uses_vllm_parameter_names() {
        let adapter = OpenAiCompatAdapter::new("https://example.com/v1", "key", "judge-v1");
        let conversation = vec![ChatMessage::user("Is 2+2=4?")];
        let value = serde_json::to_value(adapter.build_request(&conversation)).unwrap();

        assert_eq!(value["model"], "judge-v1");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "Is 2+2=4?");
        assert_eq!(value["max_tokens"], 1000);
        assert_eq!(value["stop_token_ids"], json!([32007, 32001, 32000]));
        assert!(value.get("max_new_tokens").is_none());
        assert!(value.get("do_sample").is_none());
    }

    #[test]
    fn request_payload_reflects_overridden_params() {
        let params = VllmGenerationParams::default().with_stop_token_ids(vec![7]);
        let adapter = OpenAiCompatAdapter::new("https://example.com/v1", "key", "judge-v1")
            .with_params(params);
        let conversation = vec![ChatMessage::user("p")];
        let value = serde_json::to_value(adapter.build_request(&conversation)).unwrap();

        assert_eq!(value["stop_token_ids"], json!([7]));
    }

    #[test]
    fn response_parsing_takes_the_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"PASS"}}]}"#;
        let completion: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(completion.choices[0].message.content, "PASS");
    }
}
