use serde::Serialize;

/// The generated copy for one product, in the column order of the CSV output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductContent {
    #[serde(rename = "Product Name")]
    pub product_name: String,
    #[serde(rename = "Main Title")]
    pub main_title: String,
    #[serde(rename = "SEO Keywords")]
    pub seo_keywords: String,
    #[serde(rename = "SEO Article")]
    pub seo_article: String,
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(rename = "Product Specifications")]
    pub product_specifications: String,
    #[serde(rename = "Meta Description")]
    pub meta_description: String,
}

impl ProductContent {
    pub const FIELD_NAMES: [&'static str; 7] = [
        "Product Name",
        "Main Title",
        "SEO Keywords",
        "SEO Article",
        "Summary",
        "Product Specifications",
        "Meta Description",
    ];

    /// Combine the product name and the six generated pieces. Keywords are
    /// stored joined with ", ".
    pub fn assemble(
        product_name: &str,
        main_title: String,
        keywords: &[String],
        seo_article: String,
        summary: String,
        product_specifications: String,
        meta_description: String,
    ) -> Self {
        Self {
            product_name: product_name.to_string(),
            main_title,
            seo_keywords: keywords.join(", "),
            seo_article,
            summary,
            product_specifications,
            meta_description,
        }
    }
}
