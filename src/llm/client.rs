use anyhow::Result;
use async_trait::async_trait;

/// A single-shot text completion service.
///
/// Implementations send exactly one request per call and return the text of
/// the first generated choice with surrounding whitespace trimmed.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String>;
}

/// Offline client used by `--dry-run` and tests. Answers each of the six
/// content prompts with fixed copy.
pub struct MockLlmClient;

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, prompt: &str, _max_tokens: u32) -> Result<String> {
        let text = if prompt.contains("main title for the product") {
            "Best Widget Ever"
        } else if prompt.contains("list of relevant SEO keywords") {
            "widget, durable, affordable, lightweight"
        } else if prompt.contains("comprehensive SEO article") {
            "Introducing the widget.\n\nFeatures: durable housing, affordable price.\n\nBenefits: lasts for years."
        } else if prompt.starts_with("Summarize the following article") {
            "A durable, affordable widget built to last."
        } else if prompt.contains("detailed product specifications") {
            "- Material: aluminium\n- Weight: 120 g\n- Warranty: 2 years"
        } else if prompt.contains("SEO meta description") {
            "Shop the durable, affordable widget that lasts for years."
        } else {
            "mock"
        };
        Ok(text.to_string())
    }
}
