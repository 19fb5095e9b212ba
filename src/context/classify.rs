use super::rules::{ContextCategory, ContextRules};
use crate::models::PageEvent;
use crate::utils::url::{parse_web_url, strip_www};

/// Assign `page` to the first category, in priority order, whose rule
/// matches its host, path or title. Unparseable URLs are `General`.
pub fn classify_page_context(page: &PageEvent, rules: &ContextRules) -> ContextCategory {
    let Some(url) = parse_web_url(&page.url) else {
        return ContextCategory::General;
    };
    let host = url.host_str().map(strip_www).unwrap_or_default().to_ascii_lowercase();
    let path = url.path().to_lowercase();
    let title = page.title.to_lowercase();

    ContextCategory::PRIORITY
        .into_iter()
        .find(|&category| {
            rules
                .rule_for(category)
                .is_some_and(|rule| rule.matches(&host, &path, &title))
        })
        .unwrap_or(ContextCategory::General)
}

/// Whether two pages fall in the same activity context.
pub fn is_same_context(a: &PageEvent, b: &PageEvent, rules: &ContextRules) -> bool {
    classify_page_context(a, rules) == classify_page_context(b, rules)
}
