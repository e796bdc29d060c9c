//! Helpers for classifying, normalising and rebasing hrefs.
//!
//! The responsibilities are split into focused submodules so that classification, directory
//! normalisation, relative path computation and the rewrite itself can be tested
//! independently. Every function here is pure: parsing happens per call and nothing is cached,
//! so the helpers can be used from any number of threads at once.

mod directory;
mod filters;
mod parsed;
mod relative;
mod rewrite;

pub use directory::{ensure_trailing_slash, strip_url_file_search_and_hash};
pub use filters::{is_absolute_path, is_templated_url};
pub use parsed::resolve_url;
pub use relative::relative_path;
pub use rewrite::rewrite_href_base_url;
