use regex::Regex;

fn absolute_href_pattern() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(?:/|#|[\w-]*:)").expect("invalid absolute href regex"))
}

fn templated_href_pattern() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\{.*\}\}|\[\[.*\]\]").expect("invalid template regex"))
}

/// Determine whether an href is independent of the document's base URL.
///
/// Server-absolute paths (`/img.png`, `//cdn.example.com/x.js`), fragment-only references
/// (`#top`) and anything starting with a scheme (`https://…`, `data:…`, `mailto:…`) resolve to
/// the same target wherever the document lives, so they never need rewriting.
pub fn is_absolute_path(href: &str) -> bool {
    absolute_href_pattern().is_match(href)
}

/// Determine whether an href is a template expression such as `{{url}}` or `[[src]]`.
pub fn is_templated_url(href: &str) -> bool {
    templated_href_pattern().is_match(href)
}

#[cfg(test)]
mod tests {
    use super::{is_absolute_path, is_templated_url};

    #[test]
    fn treats_server_paths_as_absolute() {
        assert!(is_absolute_path("/foo"));
        assert!(is_absolute_path("//cdn.example.com/lib.js"));
    }

    #[test]
    fn treats_scheme_urls_as_absolute() {
        assert!(is_absolute_path("http://x/y"));
        assert!(is_absolute_path("HTTPS://example.com"));
        assert!(is_absolute_path("data:image/png;base64,abc"));
        assert!(is_absolute_path("mailto:user@example.com"));
        assert!(is_absolute_path("chrome-extension://abc/x.js"));
    }

    #[test]
    fn treats_fragments_as_absolute() {
        assert!(is_absolute_path("#section"));
    }

    #[test]
    fn keeps_relative_paths() {
        assert!(!is_absolute_path("../foo"));
        assert!(!is_absolute_path("foo/bar.html"));
        assert!(!is_absolute_path("./x.png?v=1"));
        assert!(!is_absolute_path("?query"));
        assert!(!is_absolute_path(""));
    }

    #[test]
    fn scheme_must_start_the_href() {
        assert!(!is_absolute_path("img/a:b.png"));
        assert!(!is_absolute_path("a.b:c"));
    }

    #[test]
    fn detects_template_placeholders_anywhere() {
        assert!(is_templated_url("{{base}}/img.png"));
        assert!(is_templated_url("img/[[name]].png"));
        assert!(is_templated_url("prefix-{{ value }}-suffix"));
    }

    #[test]
    fn ignores_unbalanced_or_single_braces() {
        assert!(!is_templated_url("img/{name}.png"));
        assert!(!is_templated_url("img/[0].png"));
        assert!(!is_templated_url("{{unterminated.png"));
        assert!(!is_templated_url("a]]b[[c"));
    }
}
