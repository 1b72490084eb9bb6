use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use prodcopy::cli;

#[derive(Parser)]
#[command(name = "prodcopy", version)]
#[command(about = "Generate SEO product copy with an LLM and save it as CSV", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate title, keywords, article, summary, specs and meta description for a product
    Generate {
        /// Product name (prompted for on stdin when omitted)
        product: Option<String>,

        /// Output CSV path (default: product_content.csv, or [output].path from config)
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Path to config file (defaults to ./prodcopy.toml or ~/.config/prodcopy/config.toml)
        #[arg(long)]
        config: Option<String>,

        /// Override LLM model (e.g., "gpt-4o-mini", "claude-sonnet-4-20250514")
        #[arg(long)]
        model: Option<String>,

        /// Override LLM provider: openai, openai-compatible, anthropic
        #[arg(long)]
        provider: Option<String>,

        /// Override API base URL (for OpenAI-compatible gateways)
        #[arg(long)]
        base_url: Option<String>,

        /// Use mock LLM client (no network calls)
        #[arg(long)]
        dry_run: bool,
    },

    /// Check configuration and API key setup
    ConfigCheck {
        /// Path to config file
        #[arg(long)]
        config: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the prompt and the result line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            product,
            output,
            config,
            model,
            provider,
            base_url,
            dry_run,
        } => {
            cli::generate::run(product, output, config, model, provider, base_url, dry_run).await?;
        }
        Commands::ConfigCheck { config } => {
            cli::config_check::run(config)?;
        }
    }

    Ok(())
}
