// Prompt templates for the six content steps

fn with_custom(mut prompt: String, custom_instructions: Option<&str>) -> String {
    if let Some(custom) = custom_instructions {
        prompt.push_str(&format!("\n\n## Additional Instructions\n\n{}\n", custom));
    }
    prompt
}

pub fn main_title(product_name: &str, custom_instructions: Option<&str>) -> String {
    with_custom(
        format!(
            "Generate an SEO-friendly and appealing main title for the product: {}",
            product_name
        ),
        custom_instructions,
    )
}

pub fn seo_keywords(product_name: &str, custom_instructions: Option<&str>) -> String {
    with_custom(
        format!(
            "Generate a list of relevant SEO keywords for the product: {}. \
             Prioritize keywords with high relevance and search volume.",
            product_name
        ),
        custom_instructions,
    )
}

pub fn seo_article(
    product_name: &str,
    keywords: &[String],
    custom_instructions: Option<&str>,
) -> String {
    with_custom(
        format!(
            "Write a comprehensive SEO article about the product: {}. \
             Include the following keywords naturally: {}. \
             Ensure the article has a logical flow, with sections that highlight \
             the product's features, benefits, and unique selling points.",
            product_name,
            keywords.join(", ")
        ),
        custom_instructions,
    )
}

pub fn summary(article: &str, custom_instructions: Option<&str>) -> String {
    with_custom(
        format!(
            "Summarize the following article, highlighting key points in a format \
             suitable for quick reads or product descriptions:\n\n{}",
            article
        ),
        custom_instructions,
    )
}

pub fn product_specifications(product_name: &str, custom_instructions: Option<&str>) -> String {
    with_custom(
        format!(
            "Draft detailed product specifications for {}, including technical details, \
             features, and benefits. Use a structured, bulleted format for clarity.",
            product_name
        ),
        custom_instructions,
    )
}

/// Only the first `keyword_count` keywords are embedded
pub fn meta_description(
    product_name: &str,
    keywords: &[String],
    keyword_count: usize,
    custom_instructions: Option<&str>,
) -> String {
    let leading = &keywords[..keywords.len().min(keyword_count)];
    with_custom(
        format!(
            "Create an SEO meta description for {} that includes essential keywords, \
             is engaging, and fits within 150-160 characters. Keywords: {}",
            product_name,
            leading.join(", ")
        ),
        custom_instructions,
    )
}
