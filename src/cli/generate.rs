use anyhow::Result;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{Config, Provider};
use crate::llm::factory;
use crate::output;
use crate::pipeline::collector;
use crate::pipeline::content::ProductContent;
use crate::pipeline::generator::Generator;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    product: Option<String>,
    output_override: Option<String>,
    config_path: Option<String>,
    model_override: Option<String>,
    provider_override: Option<String>,
    base_url_override: Option<String>,
    dry_run: bool,
) -> Result<()> {
    if let Some(ref cfg) = config_path {
        info!("Config: {}", cfg);
    }
    info!("Dry run: {}", dry_run);

    // Load config (explicit path, working directory, or user config dir)
    let mut config = Config::load_with_path(config_path)?;

    // Apply CLI overrides
    if let Some(ref provider) = provider_override {
        info!("CLI override: provider = {}", provider);
        config.llm.provider = provider.parse::<Provider>()?;
    }
    if let Some(ref model) = model_override {
        info!("CLI override: model = {}", model);
        config.llm.model = model.clone();
    }
    if let Some(ref base_url) = base_url_override {
        info!("CLI override: base_url = {}", base_url);
        config.llm.base_url = Some(base_url.clone());
    }
    if let Some(ref path) = output_override {
        info!("CLI override: output = {}", path);
        config.output.path = path.clone();
    }

    // Build the client before asking for input so a missing key fails fast
    let client = factory::create_client(&config.llm, dry_run)?;
    if dry_run {
        info!("Using mock LLM client");
    } else {
        info!(
            "Using {} LLM provider (model: {})",
            config.llm.provider, config.llm.model
        );
    }

    let product_name = match product {
        Some(name) => name,
        None => collector::read_product_name(io::stdin().lock(), io::stdout())?,
    };

    let generator = Generator::new(client)
        .with_generation_config(config.generation.clone())
        .with_prompts_config(config.prompts.clone());

    let path = PathBuf::from(&config.output.path);
    generate_and_save(&generator, &product_name, &path).await?;

    println!("Content saved to {}", path.display());
    Ok(())
}

/// Generate all content, then write the CSV. Nothing touches the file system
/// unless all six steps succeed.
pub async fn generate_and_save(
    generator: &Generator,
    product_name: &str,
    path: &Path,
) -> Result<ProductContent> {
    let content = generator.generate(product_name).await?;
    output::save_csv(&content, path)?;
    info!("Wrote {}", path.display());
    Ok(content)
}
