use anyhow::{Context, Result};
use tracing::{debug, info};

use super::content::ProductContent;
use crate::config::{GenerationConfig, PromptsConfig};
use crate::llm::client::LlmClient;
use crate::llm::prompts;

/// Split a keyword completion on commas.
///
/// Each piece is trimmed and empty pieces are dropped, so a trailing comma or
/// a blank response never yields empty keywords. A response without commas
/// becomes a single keyword.
pub fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// Runs the six content steps against one completion client.
pub struct Generator {
    client: Box<dyn LlmClient>,
    generation: GenerationConfig,
    prompts_config: PromptsConfig,
}

impl Generator {
    pub fn new(client: Box<dyn LlmClient>) -> Self {
        Self {
            client,
            generation: GenerationConfig::default(),
            prompts_config: PromptsConfig::default(),
        }
    }

    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation = config;
        self
    }

    pub fn with_prompts_config(mut self, config: PromptsConfig) -> Self {
        self.prompts_config = config;
        self
    }

    pub async fn main_title(&self, product_name: &str) -> Result<String> {
        let prompt = prompts::main_title(product_name, self.prompts_config.title_custom.as_deref());
        self.client
            .complete(&prompt, self.generation.title_max_tokens)
            .await
    }

    pub async fn seo_keywords(&self, product_name: &str) -> Result<Vec<String>> {
        let prompt =
            prompts::seo_keywords(product_name, self.prompts_config.keywords_custom.as_deref());
        let raw = self
            .client
            .complete(&prompt, self.generation.keywords_max_tokens)
            .await?;
        let keywords = parse_keywords(&raw);
        debug!("Parsed {} keywords", keywords.len());
        Ok(keywords)
    }

    pub async fn seo_article(&self, product_name: &str, keywords: &[String]) -> Result<String> {
        let prompt = prompts::seo_article(
            product_name,
            keywords,
            self.prompts_config.article_custom.as_deref(),
        );
        self.client
            .complete(&prompt, self.generation.article_max_tokens)
            .await
    }

    pub async fn summary(&self, article: &str) -> Result<String> {
        let prompt = prompts::summary(article, self.prompts_config.summary_custom.as_deref());
        self.client
            .complete(&prompt, self.generation.summary_max_tokens)
            .await
    }

    pub async fn product_specifications(&self, product_name: &str) -> Result<String> {
        let prompt = prompts::product_specifications(
            product_name,
            self.prompts_config.specs_custom.as_deref(),
        );
        self.client
            .complete(&prompt, self.generation.specs_max_tokens)
            .await
    }

    pub async fn meta_description(&self, product_name: &str, keywords: &[String]) -> Result<String> {
        let prompt = prompts::meta_description(
            product_name,
            keywords,
            self.generation.meta_keyword_count,
            self.prompts_config.meta_custom.as_deref(),
        );
        self.client
            .complete(&prompt, self.generation.meta_max_tokens)
            .await
    }

    /// Run all six steps in order and assemble the result.
    /// The first failing step aborts the run.
    pub async fn generate(&self, product_name: &str) -> Result<ProductContent> {
        info!("Generating content for {:?}", product_name);

        info!("Step 1/6: main title");
        let main_title = self
            .main_title(product_name)
            .await
            .context("failed to generate main title")?;

        info!("Step 2/6: SEO keywords");
        let keywords = self
            .seo_keywords(product_name)
            .await
            .context("failed to generate SEO keywords")?;

        info!("Step 3/6: SEO article");
        let seo_article = self
            .seo_article(product_name, &keywords)
            .await
            .context("failed to generate SEO article")?;

        info!("Step 4/6: summary");
        let summary = self
            .summary(&seo_article)
            .await
            .context("failed to generate summary")?;

        info!("Step 5/6: product specifications");
        let product_specifications = self
            .product_specifications(product_name)
            .await
            .context("failed to generate product specifications")?;

        info!("Step 6/6: meta description");
        let meta_description = self
            .meta_description(product_name, &keywords)
            .await
            .context("failed to generate meta description")?;

        Ok(ProductContent::assemble(
            product_name,
            main_title,
            &keywords,
            seo_article,
            summary,
            product_specifications,
            meta_description,
        ))
    }
}
