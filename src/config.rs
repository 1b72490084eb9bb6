use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::util::SecretString;

pub const DEFAULT_OUTPUT_FILE: &str = "product_content.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    #[serde(rename = "openai")]
    OpenAI,
    #[serde(rename = "openai-compatible")]
    OpenAICompatible,
    #[serde(rename = "anthropic")]
    Anthropic,
}

impl Provider {
    /// Environment variable consulted when `api_key_env` is not configured
    pub fn default_api_key_env(&self) -> &'static str {
        match self {
            Provider::OpenAI | Provider::OpenAICompatible => "OPENAI_API_KEY",
            Provider::Anthropic => "ANTHROPIC_API_KEY",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAI => "openai",
            Provider::OpenAICompatible => "openai-compatible",
            Provider::Anthropic => "anthropic",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Provider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Provider::OpenAI),
            "openai-compatible" => Ok(Provider::OpenAICompatible),
            "anthropic" => Ok(Provider::Anthropic),
            other => anyhow::bail!("Unknown LLM provider: {}", other),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub prompts: PromptsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_provider")]
    pub provider: Provider,
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API key. "none" disables the key.
    /// Falls back to the provider's conventional variable when unset.
    #[serde(default)]
    pub api_key_env: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>, // For OpenAI-compatible APIs
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            api_key_env: None,
            base_url: None,
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_provider() -> Provider {
    Provider::OpenAI
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_secs() -> u64 {
    120
}

/// Per-step output ceilings, in tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_title_tokens")]
    pub title_max_tokens: u32,
    #[serde(default = "default_keywords_tokens")]
    pub keywords_max_tokens: u32,
    #[serde(default = "default_article_tokens")]
    pub article_max_tokens: u32,
    #[serde(default = "default_summary_tokens")]
    pub summary_max_tokens: u32,
    #[serde(default = "default_specs_tokens")]
    pub specs_max_tokens: u32,
    #[serde(default = "default_meta_tokens")]
    pub meta_max_tokens: u32,
    /// How many leading keywords the meta description prompt embeds
    #[serde(default = "default_meta_keyword_count")]
    pub meta_keyword_count: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            title_max_tokens: default_title_tokens(),
            keywords_max_tokens: default_keywords_tokens(),
            article_max_tokens: default_article_tokens(),
            summary_max_tokens: default_summary_tokens(),
            specs_max_tokens: default_specs_tokens(),
            meta_max_tokens: default_meta_tokens(),
            meta_keyword_count: default_meta_keyword_count(),
        }
    }
}

fn default_title_tokens() -> u32 {
    50
}

fn default_keywords_tokens() -> u32 {
    100
}

fn default_article_tokens() -> u32 {
    500
}

fn default_summary_tokens() -> u32 {
    150
}

fn default_specs_tokens() -> u32 {
    200
}

fn default_meta_tokens() -> u32 {
    50
}

fn default_meta_keyword_count() -> usize {
    3
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

/// Extra instructions appended to the built-in prompt of each step
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptsConfig {
    #[serde(default)]
    pub title_custom: Option<String>,
    #[serde(default)]
    pub keywords_custom: Option<String>,
    #[serde(default)]
    pub article_custom: Option<String>,
    #[serde(default)]
    pub summary_custom: Option<String>,
    #[serde(default)]
    pub specs_custom: Option<String>,
    #[serde(default)]
    pub meta_custom: Option<String>,
}

impl LlmConfig {
    /// Name of the environment variable the key is read from, or None when
    /// the key is explicitly disabled
    pub fn resolved_api_key_env(&self) -> Option<&str> {
        match self.api_key_env.as_deref() {
            Some(var) if var.eq_ignore_ascii_case("none") => None,
            Some(var) => Some(var),
            None => Some(self.provider.default_api_key_env()),
        }
    }

    /// Read the API key from the environment.
    /// openai-compatible gateways may run without one, so a missing key is
    /// only an error for the hosted providers.
    pub fn api_key(&self) -> Result<SecretString> {
        let Some(env_var) = self.resolved_api_key_env() else {
            return Ok(SecretString::new(String::new()));
        };

        if self.provider == Provider::OpenAICompatible {
            return Ok(env::var(env_var).unwrap_or_default().into());
        }

        match env::var(env_var).map(SecretString::from) {
            Ok(key) if !key.is_absent() => Ok(key),
            _ => anyhow::bail!("API key not found in environment variable: {}", env_var),
        }
    }
}

impl Config {
    /// Load configuration from a specific path, or use default search paths
    pub fn load_with_path(path: Option<String>) -> Result<Self> {
        if let Some(config_path) = path {
            debug!("Loading config from explicit path: {}", config_path);
            return Self::load_from_path(&config_path);
        }

        if Path::new("prodcopy.toml").exists() {
            debug!("Loading config from ./prodcopy.toml");
            return Self::load_from_path("prodcopy.toml");
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("prodcopy").join("config.toml");
            if config_path.exists() {
                debug!("Loading config from {:?}", config_path);
                return Self::load_from_path(&config_path);
            }
        }

        debug!("Using default config");
        Ok(Self::default())
    }

    fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}
