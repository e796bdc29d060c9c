use super::parsed::ParsedUrl;

/// Append a `/` unless the value already ends with one.
pub fn ensure_trailing_slash(href: &str) -> String {
    if href.ends_with('/') {
        href.to_string()
    } else {
        format!("{href}/")
    }
}

/// Return the URL of the directory containing `href`.
///
/// The filename, query and fragment are removed while the scheme and host are kept, and the
/// resulting pathname always ends with `/`. A pathname that already ends with `/` is taken to
/// name a directory and is kept rather than replaced by its parent.
///
/// The output has the same type as the input, so a [`crate::models::ResolvedUrl`] stays resolved.
pub fn strip_url_file_search_and_hash<T>(href: T) -> T
where
    T: AsRef<str> + From<String>,
{
    T::from(ParsedUrl::parse(href.as_ref()).into_directory().to_string())
}

/// Directory of a pathname with a guaranteed trailing `/`.
///
/// A placeholder filename is appended first so that `/a/b/` yields `/a/b/` rather than `/a/`.
pub(crate) fn directory_of(pathname: &str) -> String {
    let with_placeholder = format!("{pathname}_");
    ensure_trailing_slash(posix_dirname(&with_placeholder))
}

/// POSIX `dirname`: everything before the last separator, ignoring trailing separators.
fn posix_dirname(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }

    match trimmed.rfind('/') {
        None => ".",
        Some(index) => {
            let parent = trimmed[..index].trim_end_matches('/');
            if parent.is_empty() { "/" } else { parent }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResolvedUrl;
    use quickcheck_macros::quickcheck;

    #[test]
    fn appends_missing_trailing_slash() {
        assert_eq!(ensure_trailing_slash("foo"), "foo/");
        assert_eq!(ensure_trailing_slash("foo/"), "foo/");
        assert_eq!(ensure_trailing_slash(""), "/");
    }

    #[quickcheck]
    fn trailing_slash_is_idempotent(value: String) -> bool {
        let once = ensure_trailing_slash(&value);
        ensure_trailing_slash(&once) == once
    }

    #[test]
    fn dirname_matches_posix_semantics() {
        assert_eq!(posix_dirname("/a/b/c.html"), "/a/b");
        assert_eq!(posix_dirname("/a/b/"), "/a");
        assert_eq!(posix_dirname("/a"), "/");
        assert_eq!(posix_dirname("/"), "/");
        assert_eq!(posix_dirname("a"), ".");
        assert_eq!(posix_dirname("a//b"), "a");
        assert_eq!(posix_dirname(""), ".");
    }

    #[test]
    fn strips_file_search_and_hash_from_paths() {
        assert_eq!(strip_url_file_search_and_hash("/a/b/c.html?x=1#h".to_string()), "/a/b/");
    }

    #[test]
    fn keeps_directories_instead_of_climbing() {
        assert_eq!(strip_url_file_search_and_hash("/a/b/".to_string()), "/a/b/");
        assert_eq!(strip_url_file_search_and_hash("/".to_string()), "/");
    }

    #[test]
    fn strips_full_urls_and_keeps_origin() {
        let base = ResolvedUrl::new("https://example.com:8080/docs/guide/intro.html?lang=en#setup");
        let stripped = strip_url_file_search_and_hash(base);
        assert_eq!(stripped.as_str(), "https://example.com:8080/docs/guide/");
    }

    #[test]
    fn host_only_urls_map_to_root() {
        assert_eq!(
            strip_url_file_search_and_hash("http://example.com".to_string()),
            "http://example.com/"
        );
        assert_eq!(
            strip_url_file_search_and_hash("http://example.com?x#y".to_string()),
            "http://example.com/"
        );
    }

    #[test]
    fn relative_references_keep_relative_directories() {
        assert_eq!(strip_url_file_search_and_hash("a/b.html".to_string()), "a/");
        assert_eq!(strip_url_file_search_and_hash("index.html".to_string()), "./");
        assert_eq!(strip_url_file_search_and_hash("?x=1".to_string()), "");
        assert_eq!(strip_url_file_search_and_hash(String::new()), "");
    }

    #[quickcheck]
    fn stripping_is_idempotent(segments: Vec<u8>, absolute: bool, trailing: bool) -> bool {
        let names = ["a", "b", "docs", "x.html", ".", "..", "img.png"];
        let mut path = segments
            .iter()
            .map(|index| names[*index as usize % names.len()])
            .collect::<Vec<_>>()
            .join("/");
        if trailing {
            path.push('/');
        }

        let candidates = [
            if absolute { format!("/{path}") } else { path.clone() },
            format!("http://example.com/{path}?q=1#frag"),
        ];

        candidates.into_iter().all(|url| {
            let once = strip_url_file_search_and_hash(url);
            strip_url_file_search_and_hash(once.clone()) == once
        })
    }
}
