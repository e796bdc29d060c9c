//! Structural decomposition of hrefs and standard reference resolution.

use std::fmt;
use std::sync::OnceLock;

use tracing::debug;
use url::{Position, Url};

use super::directory::directory_of;

/// Scheme and host stand-in used to resolve references against path-only bases.
const PATH_ROOT: &str = "http://path-root.invalid/";

fn path_root() -> &'static Url {
    static ROOT: OnceLock<Url> = OnceLock::new();
    ROOT.get_or_init(|| Url::parse(PATH_ROOT).expect("invalid path root URL"))
}

/// An href split into the components the rewrite engine works with.
///
/// Anything the `url` crate accepts as an absolute URL is kept as a [`Url`] so that it can be
/// serialised again without loss. A scheme-relative `//host/...` reference keeps its host but has
/// no scheme. Everything else is treated as a bare reference made of a pathname, an optional
/// query and an optional fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParsedUrl {
    Absolute(Url),
    /// Parsed against the placeholder root; only its authority and later components are real.
    NetworkPath(Url),
    Reference {
        pathname: String,
        search: Option<String>,
        hash: Option<String>,
    },
}

impl ParsedUrl {
    pub(crate) fn parse(input: &str) -> Self {
        match Url::parse(input) {
            Ok(url) => Self::Absolute(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => match parse_network_path(input) {
                Some(url) => Self::NetworkPath(url),
                None => split_reference(input),
            },
            Err(err) => {
                debug!(href = input, error = %err, "treating unparseable URL as a bare reference");
                split_reference(input)
            }
        }
    }

    pub(crate) fn scheme(&self) -> Option<&str> {
        match self {
            Self::Absolute(url) => Some(url.scheme()),
            Self::NetworkPath(_) | Self::Reference { .. } => None,
        }
    }

    /// Host including an explicit port, if any.
    pub(crate) fn host(&self) -> Option<String> {
        let (Self::Absolute(url) | Self::NetworkPath(url)) = self else {
            return None;
        };
        let host = url.host_str()?;
        Some(match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        })
    }

    pub(crate) fn pathname(&self) -> &str {
        match self {
            Self::Absolute(url) | Self::NetworkPath(url) => url.path(),
            Self::Reference { pathname, .. } => pathname,
        }
    }

    pub(crate) fn search(&self) -> Option<&str> {
        match self {
            Self::Absolute(url) | Self::NetworkPath(url) => url.query(),
            Self::Reference { search, .. } => search.as_deref(),
        }
    }

    pub(crate) fn hash(&self) -> Option<&str> {
        match self {
            Self::Absolute(url) | Self::NetworkPath(url) => url.fragment(),
            Self::Reference { hash, .. } => hash.as_deref(),
        }
    }

    /// Two hrefs share an origin when both scheme and host match, including when both lack them.
    pub(crate) fn same_origin(&self, other: &Self) -> bool {
        self.scheme() == other.scheme() && self.host() == other.host()
    }

    /// Pathname of the directory containing this href, always ending in `/`.
    ///
    /// A host without a pathname maps to the root. A bare reference without a pathname has no
    /// directory to speak of and stays empty.
    pub(crate) fn directory_pathname(&self) -> String {
        let pathname = self.pathname();
        if pathname.is_empty() {
            return if self.host().is_some() {
                "/".to_string()
            } else {
                String::new()
            };
        }
        directory_of(pathname)
    }

    /// Replace the pathname with its directory and drop the query and fragment.
    pub(crate) fn into_directory(self) -> Self {
        let directory = self.directory_pathname();
        match self {
            Self::Absolute(mut url) => {
                clear_to_directory(&mut url, &directory);
                Self::Absolute(url)
            }
            Self::NetworkPath(mut url) => {
                clear_to_directory(&mut url, &directory);
                Self::NetworkPath(url)
            }
            Self::Reference { .. } => Self::Reference {
                pathname: directory,
                search: None,
                hash: None,
            },
        }
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(url) => f.write_str(url.as_str()),
            Self::NetworkPath(url) => write!(f, "//{}", &url[Position::BeforeUsername..]),
            Self::Reference {
                pathname,
                search,
                hash,
            } => f.write_str(&format_reference(
                pathname,
                search.as_deref(),
                hash.as_deref(),
            )),
        }
    }
}

/// Join a pathname with an optional query and fragment.
pub(crate) fn format_reference(pathname: &str, search: Option<&str>, hash: Option<&str>) -> String {
    let mut out = String::from(pathname);
    if let Some(search) = search {
        out.push('?');
        out.push_str(search);
    }
    if let Some(hash) = hash {
        out.push('#');
        out.push_str(hash);
    }
    out
}

fn clear_to_directory(url: &mut Url, directory: &str) {
    url.set_path(directory);
    url.set_query(None);
    url.set_fragment(None);
}

fn parse_network_path(input: &str) -> Option<Url> {
    let authority = input.strip_prefix("//")?;
    if authority.is_empty() || authority.starts_with('/') {
        return None;
    }
    let url = path_root().join(input).ok()?;
    url.host_str()?;
    Some(url)
}

fn split_reference(input: &str) -> ParsedUrl {
    let (rest, hash) = match input.split_once('#') {
        Some((rest, hash)) => (rest, Some(hash.to_string())),
        None => (input, None),
    };
    let (pathname, search) = match rest.split_once('?') {
        Some((pathname, search)) => (pathname, Some(search.to_string())),
        None => (rest, None),
    };

    ParsedUrl::Reference {
        pathname: pathname.to_string(),
        search,
        hash,
    }
}

/// Resolve `href` against `base` following standard URL reference resolution.
///
/// Absolute bases are resolved with the `url` crate directly. Path-only bases such as
/// `/docs/index.html` or `docs/index.html` are resolved as if they were served from a
/// placeholder origin, which is stripped again afterwards; a base without a leading `/` yields
/// a result without one. Dot segments climbing above the root are clamped at the root.
///
/// Resolution never fails: if the `url` crate rejects the input, `href` is returned as given.
pub fn resolve_url(base: &str, href: &str) -> String {
    match Url::parse(base) {
        Ok(base_url) => match base_url.join(href) {
            Ok(resolved) => resolved.into(),
            Err(err) => {
                debug!(base, href, error = %err, "failed to resolve href, keeping it as given");
                href.to_string()
            }
        },
        Err(_) => resolve_against_path(base, href),
    }
}

fn resolve_against_path(base: &str, href: &str) -> String {
    if let Ok(url) = Url::parse(href) {
        return url.into();
    }

    let root = path_root();
    let resolved = match root.join(base).and_then(|base_url| base_url.join(href)) {
        Ok(resolved) => resolved,
        Err(err) => {
            debug!(base, href, error = %err, "failed to resolve href, keeping it as given");
            return href.to_string();
        }
    };

    if resolved.origin() != root.origin() {
        // scheme-relative href pointing at another host
        return format!("//{}", &resolved[Position::BeforeUsername..]);
    }

    let reference = &resolved[Position::BeforePath..];
    if base.starts_with('/') || href.starts_with('/') {
        reference.to_string()
    } else {
        reference.trim_start_matches('/').to_string()
    }
}
