//! URL normalization.

/// True if `url` starts with `http://` or `https://` (scheme compared
/// case-insensitively).
pub fn has_http_scheme(url: &str) -> bool {
    let lower = |prefix: &str| {
        url.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    };
    lower("http://") || lower("https://")
}

/// Normalizes a URL by adding the `https://` prefix when no http(s) scheme
/// is present.
///
/// URLs that already carry `http://` or `https://` are returned unchanged.
/// No other validation happens here; the analysis service reports malformed
/// URLs as a bad request.
pub fn normalize_url(url: &str) -> String {
    if has_http_scheme(url) {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

#[cfg(test)]
mod tests {
    use super::{has_http_scheme, normalize_url};

    #[test]
    fn test_normalize_url_adds_https() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_url_preserves_https() {
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_url_preserves_http() {
        // HTTP should be preserved (not upgraded to HTTPS)
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
    }

    #[test]
    fn test_normalize_url_scheme_case_insensitive() {
        assert_eq!(normalize_url("HTTPS://Example.com"), "HTTPS://Example.com");
        assert_eq!(normalize_url("Http://example.com"), "Http://example.com");
    }

    #[test]
    fn test_normalize_url_with_path_and_port() {
        assert_eq!(
            normalize_url("example.com:8080/path?query=value"),
            "https://example.com:8080/path?query=value"
        );
    }

    #[test]
    fn test_normalize_url_host_starting_with_http() {
        // A host that merely starts with "http" has no scheme
        assert_eq!(normalize_url("httpbin.org"), "https://httpbin.org");
        assert_eq!(normalize_url("https-example.com"), "https://https-example.com");
    }

    #[test]
    fn test_normalize_url_other_schemes_get_prefix() {
        assert_eq!(normalize_url("ftp://example.com"), "https://ftp://example.com");
    }

    #[test]
    fn test_has_http_scheme_short_inputs() {
        assert!(!has_http_scheme(""));
        assert!(!has_http_scheme("http"));
        assert!(!has_http_scheme("http:/"));
        assert!(has_http_scheme("http://"));
    }

    #[test]
    fn test_has_http_scheme_multibyte_input() {
        // Slicing must not panic on a non-char boundary
        assert!(!has_http_scheme("例え.テスト"));
        assert_eq!(normalize_url("例え.テスト"), "https://例え.テスト");
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_bare_hosts_get_https_prefix(host in "[a-z]{3,20}\\.[a-z]{2,5}") {
            prop_assert_eq!(normalize_url(&host), format!("https://{}", host));
        }

        #[test]
        fn test_schemed_urls_unchanged(
            scheme in "(http|https)",
            host in "[a-z]{3,20}\\.[a-z]{2,5}",
            path in "[a-z/]{0,30}"
        ) {
            let url = format!("{}://{}/{}", scheme, host, path);
            prop_assert_eq!(normalize_url(&url), url.clone());
        }

        #[test]
        fn test_normalization_idempotent(input in "\\PC{0,40}") {
            let once = normalize_url(&input);
            prop_assert_eq!(normalize_url(&once), once.clone());
        }
    }
}
