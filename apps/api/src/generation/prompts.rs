// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::MARKDOWN_OUTPUT_INSTRUCTION;
use crate::seo::SeoMetrics;

/// System prompt for blog generation.
pub const BLOG_SYSTEM: &str =
    "You are a professional blog writer specializing in creating SEO-optimized content.";

/// Blog prompt template. Replace `{keyword}` and the metric placeholders
/// before sending. `{AFF_LINK_n}` is NOT a placeholder; it is emitted
/// verbatim so the model uses that literal format in its output.
pub const BLOG_PROMPT_TEMPLATE: &str = r#"Write a comprehensive blog post about {keyword}.
The post should be informative, engaging, and optimized for SEO.

SEO Metrics:
- Search Volume: {search_volume}
- Keyword Difficulty: {keyword_difficulty}
- Average CPC: ${avg_cpc}

Requirements:
1. Start with a compelling title as a level-1 Markdown heading (`# Title`).
2. Write an engaging introduction.
3. Include at least 3 main sections with subheadings.
4. Add a conclusion.
5. Include 3-5 affiliate link placeholders using the {AFF_LINK_n} format.
6. End with a `## Sources` section listing 3-5 references, one per line, formatted exactly as `- Title: (URL)`.
7. Keep the tone professional but conversational.
8. Include relevant statistics and data where appropriate.
"#;

/// Builds the full generation prompt for one keyword.
pub fn build_blog_prompt(keyword: &str, metrics: &SeoMetrics) -> String {
    let prompt = BLOG_PROMPT_TEMPLATE
        .replace("{keyword}", keyword)
        .replace("{search_volume}", &metrics.search_volume.to_string())
        .replace("{keyword_difficulty}", &metrics.keyword_difficulty.to_string())
        .replace("{avg_cpc}", &format!("{:.2}", metrics.avg_cpc));

    format!("{prompt}\n{MARKDOWN_OUTPUT_INSTRUCTION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> SeoMetrics {
        SeoMetrics {
            search_volume: 12_345,
            keyword_difficulty: 67,
            avg_cpc: 3.5,
        }
    }

    #[test]
    fn test_build_blog_prompt_interpolates_keyword_and_metrics() {
        let prompt = build_blog_prompt("wireless earbuds", &metrics());

        assert!(prompt.contains("wireless earbuds"));
        assert!(prompt.contains("Search Volume: 12345"));
        assert!(prompt.contains("Keyword Difficulty: 67"));
        assert!(prompt.contains("Average CPC: $3.50"));
        assert!(!prompt.contains("{keyword}"));
        assert!(!prompt.contains("{search_volume}"));
    }

    #[test]
    fn test_build_blog_prompt_keeps_affiliate_placeholder_literal() {
        let prompt = build_blog_prompt("standing desks", &metrics());
        assert!(prompt.contains("{AFF_LINK_n}"));
    }

    #[test]
    fn test_build_blog_prompt_appends_markdown_instruction() {
        let prompt = build_blog_prompt("standing desks", &metrics());
        assert!(prompt.contains(MARKDOWN_OUTPUT_INSTRUCTION));
    }
}
