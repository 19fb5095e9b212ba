//! URL helpers shared by the extractor, the classifier and title inference.

use url::Url;

use crate::log_debug;

const ENABLE_LOGS: bool = false;

/// Parse `raw` and return it only when it is an http(s) URL with a host.
///
/// Browser history routinely contains `about:`, `chrome:` and `mailto:`
/// entries; those are treated the same as a parse failure.
pub fn parse_web_url(raw: &str) -> Option<Url> {
    match Url::parse(raw) {
        Ok(url)
            if matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|h| !h.is_empty()) =>
        {
            Some(url)
        }
        Ok(_) => {
            log_debug!("skipping non-web url {raw}");
            None
        }
        Err(err) => {
            log_debug!("skipping unparseable url {raw}: {err}");
            None
        }
    }
}

/// Hostname with a single leading `www.` removed.
pub fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

/// True when `host` is `domain` or one of its subdomains.
pub fn host_matches(host: &str, domain: &str) -> bool {
    host == domain
        || (host.len() > domain.len()
            && host.ends_with(domain)
            && host.as_bytes()[host.len() - domain.len() - 1] == b'.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_web_url_rejects_non_web_schemes() {
        assert!(parse_web_url("about:blank").is_none());
        assert!(parse_web_url("chrome://settings").is_none());
        assert!(parse_web_url("file:///tmp/a.html").is_none());
        assert!(parse_web_url("mailto:someone@example.com").is_none());
        assert!(parse_web_url("not a url").is_none());
        assert!(parse_web_url("https://example.com/a").is_some());
        assert!(parse_web_url("http://localhost:3000/").is_some());
    }

    #[test]
    fn strip_www_removes_one_prefix() {
        assert_eq!(strip_www("www.github.com"), "github.com");
        assert_eq!(strip_www("github.com"), "github.com");
        assert_eq!(strip_www("www.www.a.com"), "www.a.com");
    }

    #[test]
    fn host_matches_domain_and_subdomains() {
        assert!(host_matches("github.com", "github.com"));
        assert!(host_matches("gist.github.com", "github.com"));
        assert!(!host_matches("notgithub.com", "github.com"));
        assert!(!host_matches("github.com.evil.io", "github.com"));
    }
}
