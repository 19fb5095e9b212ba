//! URL → resource identity.
//!
//! Collapses cosmetically different URLs for the same content into one key
//! without any per-site table. Rules are tried in order and the first match
//! wins; the order is part of the identifier contract, since stored keys
//! must stay stable across versions.

use url::Url;

use crate::models::{ExtractedResource, Specificity};
use crate::utils::url::{parse_web_url, strip_www};

/// Query parameters that identify a single item, in priority order.
pub const IDENTIFYING_PARAMS: [&str; 8] = ["v", "id", "q", "p", "post", "article", "list", "playlist"];

/// Normalise `url` into a resource identity, or `None` when it is not a
/// trackable web URL.
pub fn extract_resource_identifier(url: &str) -> Option<ExtractedResource> {
    let parsed = parse_web_url(url)?;
    let domain = strip_www(parsed.host_str()?).to_string();
    let path = parsed.path();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let (specificity, identifier) = if path.is_empty() || path == "/" || path == "/index.html" {
        (Specificity::Homepage, format!("{domain}/"))
    } else if let Some((name, value)) = identifying_param(&parsed) {
        let first = segments.first().copied().unwrap_or_default();
        (Specificity::Specific, format!("{domain}/{first}?{name}={value}"))
    } else if segments.len() == 1 {
        (Specificity::Category, format!("{domain}/{}", segments[0]))
    } else if segments.len() >= 4 {
        (Specificity::Deep, format!("{domain}/{}", segments[..4].join("/")))
    } else if segments.len() >= 2 {
        let take = segments.len().min(3);
        (Specificity::Specific, format!("{domain}/{}", segments[..take].join("/")))
    } else {
        (Specificity::Category, format!("{domain}{path}"))
    };

    Some(ExtractedResource {
        domain,
        specificity,
        identifier,
    })
}

/// First identifying parameter present with a non-empty value, by priority.
fn identifying_param(url: &Url) -> Option<(&'static str, String)> {
    IDENTIFYING_PARAMS.iter().find_map(|&name| {
        url.query_pairs()
            .find(|(key, value)| key == name && !value.is_empty())
            .map(|(_, value)| (name, value.into_owned()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(url: &str) -> (Specificity, String) {
        let r = extract_resource_identifier(url).expect("trackable url");
        (r.specificity, r.identifier)
    }

    #[test]
    fn homepage_variants() {
        let r = extract_resource_identifier("https://github.com/").unwrap();
        assert_eq!(r.domain, "github.com");
        assert_eq!(r.specificity, Specificity::Homepage);
        assert_eq!(r.identifier, "github.com/");

        assert_eq!(extract("https://www.github.com").1, "github.com/");
        assert_eq!(extract("https://example.com/index.html").0, Specificity::Homepage);
    }

    #[test]
    fn homepage_beats_identifying_param() {
        assert_eq!(
            extract("https://youtube.com/?v=abc"),
            (Specificity::Homepage, "youtube.com/".to_string())
        );
    }

    #[test]
    fn single_segment_is_category() {
        assert_eq!(
            extract("https://news.ycombinator.com/newest"),
            (Specificity::Category, "news.ycombinator.com/newest".to_string())
        );
        assert_eq!(extract("https://example.com/docs/").1, "example.com/docs");
    }

    #[test]
    fn identifying_param_yields_specific() {
        assert_eq!(
            extract("https://youtube.com/watch?v=abc123"),
            (Specificity::Specific, "youtube.com/watch?v=abc123".to_string())
        );
        assert_eq!(
            extract("https://www.youtube.com/watch?v=abc123&t=42s").1,
            "youtube.com/watch?v=abc123"
        );
    }

    #[test]
    fn identifying_params_follow_priority_order() {
        assert_eq!(
            extract("https://example.com/a/b?list=L1&id=7").1,
            "example.com/a?id=7"
        );
        assert_eq!(
            extract("https://example.com/a/b/c/d/e?playlist=P&q=search").1,
            "example.com/a?q=search"
        );
    }

    #[test]
    fn empty_param_value_is_ignored() {
        assert_eq!(
            extract("https://example.com/watch?v="),
            (Specificity::Category, "example.com/watch".to_string())
        );
    }

    #[test]
    fn two_or_three_segments_are_specific() {
        assert_eq!(
            extract("https://github.com/facebook/react"),
            (Specificity::Specific, "github.com/facebook/react".to_string())
        );
        assert_eq!(
            extract("https://github.com/facebook/react/issues?state=open"),
            (Specificity::Specific, "github.com/facebook/react/issues".to_string())
        );
    }

    #[test]
    fn four_or_more_segments_are_deep() {
        assert_eq!(
            extract("https://github.com/facebook/react/blob/main/README.md"),
            (Specificity::Deep, "github.com/facebook/react/blob/main".to_string())
        );
    }

    #[test]
    fn fragments_are_ignored() {
        assert_eq!(
            extract("https://docs.rs/serde/latest#section").1,
            "docs.rs/serde/latest"
        );
    }

    #[test]
    fn empty_segments_fall_through_to_raw_path() {
        assert_eq!(
            extract("https://example.com//"),
            (Specificity::Category, "example.com//".to_string())
        );
    }

    #[test]
    fn untrackable_urls_return_none() {
        assert!(extract_resource_identifier("about:blank").is_none());
        assert!(extract_resource_identifier("chrome://settings").is_none());
        assert!(extract_resource_identifier("::not a url::").is_none());
    }
}
