//! prodcopy - Generate SEO product copy with an LLM
//!
//! Asks a completion API for a title, keywords, article, summary,
//! specifications and meta description for one product, then saves the
//! result as a single CSV row. Supports OpenAI, OpenAI-compatible gateways
//! and Anthropic, plus an offline mock client for dry runs.

pub mod cli;
pub mod config;
pub mod llm;
pub mod output;
pub mod pipeline;
pub mod util;
