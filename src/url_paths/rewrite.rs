use tracing::trace;

use super::filters::is_absolute_path;
use super::parsed::{ParsedUrl, format_reference, resolve_url};
use super::relative::relative_path;
use crate::models::{FileRelativeUrl, ResolvedUrl, RewrittenHref};

/// Rewrite `href` so that, resolved against `new_base_url`, it reaches the same target it
/// reached when resolved against `old_base_url`.
///
/// Base-independent hrefs (see [`super::is_absolute_path`]) are returned unchanged. When the
/// target and the new base share an origin the result is a relative path from the new base's
/// directory, carrying the target's query and fragment. Otherwise no relative form exists and
/// the fully resolved target URL is returned.
///
/// Template placeholders are not recognised here; filter them with
/// [`super::is_templated_url`] before calling.
pub fn rewrite_href_base_url<T>(
    href: T,
    old_base_url: &ResolvedUrl,
    new_base_url: &ResolvedUrl,
) -> RewrittenHref<T>
where
    T: AsRef<str>,
{
    if is_absolute_path(href.as_ref()) {
        return RewrittenHref::Unchanged(href);
    }

    let target = resolve_url(old_base_url.as_str(), href.as_ref());
    let parsed_from = ParsedUrl::parse(new_base_url.as_str());
    let parsed_to = ParsedUrl::parse(&target);

    if !parsed_from.same_origin(&parsed_to) {
        trace!(href = href.as_ref(), %target, "target is cross-origin, using absolute URL");
        return RewrittenHref::Rewritten(FileRelativeUrl::from(target));
    }

    let mut from_dir = parsed_from.directory_pathname();
    let mut to_path = parsed_to.pathname().to_string();
    if is_absolute_path(old_base_url.as_str()) || is_absolute_path(new_base_url.as_str()) {
        from_dir = make_absolute_path(from_dir);
        to_path = make_absolute_path(to_path);
    }

    let pathname = spell_relative_pathname(relative_path(&from_dir, &to_path), &to_path);
    RewrittenHref::Rewritten(FileRelativeUrl::from(format_reference(
        &pathname,
        parsed_to.search(),
        parsed_to.hash(),
    )))
}

fn make_absolute_path(path: String) -> String {
    if path.starts_with('/') {
        path
    } else {
        format!("/{path}")
    }
}

/// Turn a bare POSIX relative path into an href that resolves to `to_path`.
///
/// A path that is empty or ends in `..` resolves to a directory, so a file target is reached by
/// climbing once more and naming it. A directory target needs its trailing `/`, and a leading
/// segment containing `:` would be read as a scheme.
fn spell_relative_pathname(relative: String, to_path: &str) -> String {
    let mut pathname = relative;

    if to_path.ends_with('/') {
        if pathname.is_empty() {
            return "./".to_string();
        }
        if !pathname.ends_with('/') {
            pathname.push('/');
        }
    } else if pathname.is_empty() || pathname.rsplit('/').next() == Some("..") {
        if let Some(name) = to_path.rsplit('/').next().filter(|name| !name.is_empty()) {
            pathname = if pathname.is_empty() {
                format!("../{name}")
            } else {
                format!("{pathname}/../{name}")
            };
        }
    }

    let first_segment = pathname.split('/').next().unwrap_or_default();
    if first_segment.contains(':') {
        pathname.insert_str(0, "./");
    }

    pathname
}
