// Generator behaviour against a scripted completion client
mod common;

use common::{ScriptedClient, ARTICLE, KEYWORDS, META, SPECS, SUMMARY, TITLE};
use prodcopy::config::{GenerationConfig, PromptsConfig};
use prodcopy::llm::client::MockLlmClient;
use prodcopy::output::render_csv;
use prodcopy::pipeline::content::ProductContent;
use prodcopy::pipeline::generator::Generator;

#[tokio::test]
async fn test_keywords_parsed_from_mocked_response() {
    let (client, _calls) = ScriptedClient::new(&[KEYWORDS]);
    let generator = Generator::new(Box::new(client));

    let keywords = generator.seo_keywords("Widget").await.unwrap();
    assert_eq!(keywords, vec!["widget", "durable", "affordable"]);
}

#[tokio::test]
async fn test_six_calls_in_order_with_budgets() {
    let (client, calls) = ScriptedClient::standard();
    let generator = Generator::new(Box::new(client));

    generator.generate("Widget").await.unwrap();

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 6);
    let budgets: Vec<u32> = calls.iter().map(|c| c.max_tokens).collect();
    assert_eq!(budgets, vec![50, 100, 500, 150, 200, 50]);

    assert!(calls[0].prompt.contains("main title for the product: Widget"));
    assert!(calls[1].prompt.contains("SEO keywords for the product: Widget"));
    assert!(calls[2].prompt.contains("comprehensive SEO article"));
    assert!(calls[3].prompt.starts_with("Summarize the following article"));
    assert!(calls[4].prompt.contains("product specifications for Widget"));
    assert!(calls[5].prompt.contains("SEO meta description for Widget"));
}

#[tokio::test]
async fn test_article_and_summary_prompts_carry_prior_output() {
    let (client, calls) = ScriptedClient::standard();
    let generator = Generator::new(Box::new(client));

    generator.generate("Widget").await.unwrap();

    let calls = calls.lock().unwrap();
    assert!(calls[2]
        .prompt
        .contains("Include the following keywords naturally: widget, durable, affordable."));
    assert!(calls[3].prompt.ends_with(&format!("\n\n{}", ARTICLE)));
    // Specifications never see the keywords
    assert!(!calls[4].prompt.contains("durable"));
}

#[tokio::test]
async fn test_meta_description_prompt_embeds_first_three_keywords() {
    let (client, calls) = ScriptedClient::new(&[
        TITLE,
        "widget, durable, affordable, compact, red",
        ARTICLE,
        SUMMARY,
        SPECS,
        META,
    ]);
    let generator = Generator::new(Box::new(client));

    let content = generator.generate("Widget").await.unwrap();

    let calls = calls.lock().unwrap();
    assert!(calls[5]
        .prompt
        .ends_with("Keywords: widget, durable, affordable"));
    assert!(!calls[5].prompt.contains("compact"));
    // The stored keyword column keeps all of them
    assert_eq!(content.seo_keywords, "widget, durable, affordable, compact, red");
}

#[tokio::test]
async fn test_generated_content_fields() {
    let (client, _calls) = ScriptedClient::standard();
    let generator = Generator::new(Box::new(client));

    let content = generator.generate("Widget").await.unwrap();

    assert_eq!(
        content,
        ProductContent {
            product_name: "Widget".to_string(),
            main_title: TITLE.to_string(),
            seo_keywords: KEYWORDS.to_string(),
            seo_article: ARTICLE.to_string(),
            summary: SUMMARY.to_string(),
            product_specifications: SPECS.to_string(),
            meta_description: META.to_string(),
        }
    );
}

#[tokio::test]
async fn test_fixed_field_names_regardless_of_input() {
    for name in ["Widget", "", "Ünïcödé, \"quoted\" name\nwith newline"] {
        let generator = Generator::new(Box::new(MockLlmClient::new()));
        let content = generator.generate(name).await.unwrap();
        let csv = String::from_utf8(render_csv(&content).unwrap()).unwrap();
        let header = csv.lines().next().unwrap();
        assert_eq!(header, ProductContent::FIELD_NAMES.join(","));
        assert_eq!(content.product_name, name);
    }
}

#[tokio::test]
async fn test_comma_free_keyword_response() {
    let (client, calls) = ScriptedClient::new(&[
        TITLE,
        "widget",
        ARTICLE,
        SUMMARY,
        SPECS,
        META,
    ]);
    let generator = Generator::new(Box::new(client));

    let content = generator.generate("Widget").await.unwrap();

    assert_eq!(content.seo_keywords, "widget");
    assert!(calls.lock().unwrap()[5].prompt.ends_with("Keywords: widget"));
}

#[tokio::test]
async fn test_configured_budgets_and_custom_instructions() {
    let (client, calls) = ScriptedClient::standard();
    let generation = GenerationConfig {
        article_max_tokens: 900,
        meta_keyword_count: 1,
        ..GenerationConfig::default()
    };
    let prompts = PromptsConfig {
        article_custom: Some("Write in British English.".to_string()),
        ..PromptsConfig::default()
    };
    let generator = Generator::new(Box::new(client))
        .with_generation_config(generation)
        .with_prompts_config(prompts);

    generator.generate("Widget").await.unwrap();

    let calls = calls.lock().unwrap();
    assert_eq!(calls[2].max_tokens, 900);
    assert!(calls[2].prompt.contains("Write in British English."));
    assert!(!calls[0].prompt.contains("British"));
    assert!(calls[5].prompt.ends_with("Keywords: widget"));
}

#[tokio::test]
async fn test_failure_stops_remaining_steps() {
    let (client, calls) = ScriptedClient::standard();
    let generator = Generator::new(Box::new(client.failing_on(2)));

    let err = generator.generate("Widget").await.unwrap_err();

    assert!(err.to_string().contains("failed to generate SEO article"));
    assert_eq!(calls.lock().unwrap().len(), 3);
}
