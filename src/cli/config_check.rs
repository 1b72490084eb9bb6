use anyhow::Result;
use std::env;

use crate::config::{Config, LlmConfig, Provider};
use crate::util::SecretString;

struct CheckResult {
    passed: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl CheckResult {
    fn new() -> Self {
        Self {
            passed: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn pass(&mut self, msg: impl Into<String>) {
        self.passed.push(msg.into());
    }

    fn warn(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }
}

pub fn run(config_path: Option<String>) -> Result<()> {
    let results = check(config_path);
    print_results(&results);

    if !results.errors.is_empty() {
        anyhow::bail!("{} config error(s) found", results.errors.len());
    }
    Ok(())
}

fn check(config_path: Option<String>) -> CheckResult {
    let mut results = CheckResult::new();

    let config = match Config::load_with_path(config_path.clone()) {
        Ok(config) => {
            let source = config_path.as_deref().unwrap_or("default search path");
            results.pass(format!("Config loaded from {}", source));
            config
        }
        Err(e) => {
            results.error(format!("Failed to load config: {:#}", e));
            return results;
        }
    };

    results.pass(format!(
        "LLM provider: {} (model: {})",
        config.llm.provider, config.llm.model
    ));

    check_api_key(&config.llm, &mut results);

    if config.llm.provider == Provider::OpenAICompatible && config.llm.base_url.is_none() {
        results.warn(
            "openai-compatible provider without base_url; will use default http://localhost:11434/v1",
        );
    }

    // Anthropic rejects temperatures above 1.0; OpenAI-style APIs accept up to 2.0
    let max_temperature = match config.llm.provider {
        Provider::Anthropic => 1.0,
        Provider::OpenAI | Provider::OpenAICompatible => 2.0,
    };
    if !(0.0..=max_temperature).contains(&config.llm.temperature) {
        results.error(format!(
            "temperature {} is outside the accepted range 0.0-{:.1} for {}",
            config.llm.temperature, max_temperature, config.llm.provider
        ));
    }

    let budgets = [
        ("title", config.generation.title_max_tokens),
        ("keywords", config.generation.keywords_max_tokens),
        ("article", config.generation.article_max_tokens),
        ("summary", config.generation.summary_max_tokens),
        ("specs", config.generation.specs_max_tokens),
        ("meta", config.generation.meta_max_tokens),
    ];
    for (step, budget) in budgets {
        if budget == 0 {
            results.error(format!("{}_max_tokens must be greater than 0", step));
        }
    }
    if results.errors.is_empty() {
        results.pass(format!(
            "Token budgets: {}",
            budgets
                .iter()
                .map(|(step, budget)| format!("{}={}", step, budget))
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    if config.generation.meta_keyword_count == 0 {
        results.warn("meta_keyword_count = 0; the meta description prompt will carry no keywords");
    }

    results.pass(format!("Output: {}", config.output.path));

    results
}

fn check_api_key(llm: &LlmConfig, results: &mut CheckResult) {
    let is_oai_compat = llm.provider == Provider::OpenAICompatible;
    let Some(env_var) = llm.resolved_api_key_env() else {
        results.pass("API key: no API key needed");
        return;
    };

    match env::var(env_var).map(SecretString::from) {
        Ok(key) if !key.is_absent() => {
            results.pass(format!("API key: {} is set", env_var));
        }
        Ok(_) if is_oai_compat => {
            results.warn(format!(
                "API key: {} is set but blank (OK for local models, needed for gateways)",
                env_var
            ));
        }
        Ok(_) => {
            results.error(format!("API key: {} is set but blank", env_var));
        }
        Err(_) if is_oai_compat => {
            results.warn(format!(
                "API key: {} is not set (OK for local models, needed for gateways)",
                env_var
            ));
        }
        Err(_) => {
            results.error(format!("API key: {} is not set", env_var));
        }
    }
}

fn print_results(results: &CheckResult) {
    for msg in &results.passed {
        println!("  ✓ {}", msg);
    }
    for msg in &results.warnings {
        println!("  ⚠ {}", msg);
    }
    for msg in &results.errors {
        println!("  ✗ {}", msg);
    }
    println!(
        "\n{} passed, {} warning(s), {} error(s)",
        results.passed.len(),
        results.warnings.len(),
        results.errors.len()
    );
}
