use anyhow::Result;

use super::client::{LlmClient, MockLlmClient};
use super::client_impl::{AnthropicClient, OpenAIClient};
use crate::config::{LlmConfig, Provider};

const DEFAULT_COMPATIBLE_BASE_URL: &str = "http://localhost:11434/v1";

/// Create an LLM client from configuration.
///
/// The API key is resolved here, so a missing credential fails the run
/// before any request is sent.
pub fn create_client(llm_config: &LlmConfig, dry_run: bool) -> Result<Box<dyn LlmClient>> {
    if dry_run {
        return Ok(Box::new(MockLlmClient::new()));
    }

    let api_key = llm_config.api_key()?;
    let model = llm_config.model.clone();
    let temperature = llm_config.temperature;
    let timeout = llm_config.timeout_secs;

    match llm_config.provider {
        Provider::OpenAI => match llm_config.base_url.clone() {
            Some(base_url) => Ok(Box::new(OpenAIClient::with_base_url(
                api_key,
                model,
                base_url,
                temperature,
                timeout,
            )?)),
            None => Ok(Box::new(OpenAIClient::new(
                api_key,
                model,
                temperature,
                timeout,
            )?)),
        },

        Provider::OpenAICompatible => {
            let base_url = llm_config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_COMPATIBLE_BASE_URL.to_string());
            Ok(Box::new(OpenAIClient::with_base_url(
                api_key,
                model,
                base_url,
                temperature,
                timeout,
            )?))
        }

        Provider::Anthropic => match llm_config.base_url.clone() {
            Some(base_url) => Ok(Box::new(AnthropicClient::with_base_url(
                api_key,
                model,
                base_url,
                temperature,
                timeout,
            )?)),
            None => Ok(Box::new(AnthropicClient::new(
                api_key,
                model,
                temperature,
                timeout,
            )?)),
        },
    }
}
