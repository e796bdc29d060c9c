#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod logging;
pub mod models;
pub mod relocation;
pub mod url_paths;

pub use config::{ConfigError, RelocationConfig};
pub use models::{FileRelativeUrl, ResolvedUrl, RewrittenHref};
pub use relocation::HrefRelocator;
pub use url_paths::{
    ensure_trailing_slash, is_absolute_path, is_templated_url, relative_path, resolve_url,
    rewrite_href_base_url, strip_url_file_search_and_hash,
};
