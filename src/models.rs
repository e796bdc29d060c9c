//! String types exchanged with callers of the rewrite engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A URL believed to be fully resolved: either `scheme://host/...` or a server-absolute path.
///
/// Base URLs are always of this type. Nothing validates the claim at runtime; the type only
/// records the caller's promise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ResolvedUrl(String);

/// A URL that may be relative to some base which is not carried alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FileRelativeUrl(String);

macro_rules! url_string {
  ($name:ident) => {
    impl $name {
      /// Wrap an owned string.
      pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
      }

      /// Borrow the underlying string.
      pub fn as_str(&self) -> &str {
        &self.0
      }

      /// Unwrap into the underlying string.
      pub fn into_inner(self) -> String {
        self.0
      }
    }

    impl AsRef<str> for $name {
      fn as_ref(&self) -> &str {
        &self.0
      }
    }

    impl From<String> for $name {
      fn from(value: String) -> Self {
        Self(value)
      }
    }

    impl From<&str> for $name {
      fn from(value: &str) -> Self {
        Self(value.to_string())
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
      }
    }
  };
}

url_string!(ResolvedUrl);
url_string!(FileRelativeUrl);

/// Result of rebasing an href.
///
/// Absolute hrefs come back untouched with the caller's own type; anything that had to be
/// recomputed comes back as a [`FileRelativeUrl`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewrittenHref<T> {
  /// The href was base-independent and is returned as given.
  Unchanged(T),
  /// The href was recomputed against the new base.
  Rewritten(FileRelativeUrl),
}

impl<T: AsRef<str>> RewrittenHref<T> {
  /// Borrow the resulting href.
  pub fn as_str(&self) -> &str {
    match self {
      Self::Unchanged(href) => href.as_ref(),
      Self::Rewritten(href) => href.as_str(),
    }
  }

  /// Returns `true` when the engine produced a new href.
  pub fn is_rewritten(&self) -> bool {
    matches!(self, Self::Rewritten(_))
  }
}

impl<T: Into<String>> RewrittenHref<T> {
  /// Collapse both variants into a plain string.
  pub fn into_string(self) -> String {
    match self {
      Self::Unchanged(href) => href.into(),
      Self::Rewritten(href) => href.into_inner(),
    }
  }
}

impl<T: AsRef<str>> fmt::Display for RewrittenHref<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// How the relocator treated a single href.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelocationOutcome {
  /// Template expression, left untouched.
  Templated,
  /// Base-independent href, left untouched.
  Absolute,
  /// Rewritten into a path relative to the new base.
  Relative,
  /// Target lives on another origin and was rewritten to its absolute URL.
  CrossOrigin,
}

/// A single href before and after relocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelocatedHref {
  /// Href as it appeared in the source document.
  pub original: String,
  /// Href to emit in the relocated document.
  pub href: String,
  /// Which rule produced [`Self::href`].
  pub outcome: RelocationOutcome,
}

/// Per-outcome counters for a batch of relocated hrefs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RelocationSummary {
  /// Hrefs skipped because they are template expressions.
  pub templated: usize,
  /// Hrefs left untouched because they do not depend on the base.
  pub absolute: usize,
  /// Hrefs rewritten into new relative paths.
  pub relative: usize,
  /// Hrefs rewritten into absolute URLs because the origin changed.
  pub cross_origin: usize,
}

impl RelocationSummary {
  /// Count one more href with the given outcome.
  pub fn record(&mut self, outcome: RelocationOutcome) {
    match outcome {
      RelocationOutcome::Templated => self.templated += 1,
      RelocationOutcome::Absolute => self.absolute += 1,
      RelocationOutcome::Relative => self.relative += 1,
      RelocationOutcome::CrossOrigin => self.cross_origin += 1,
    }
  }

  /// Total number of hrefs counted.
  pub fn total(&self) -> usize {
    self.templated + self.absolute + self.relative + self.cross_origin
  }
}

/// Serializable result of relocating a batch of hrefs between two bases.
#[derive(Debug, Clone, Serialize)]
pub struct RelocationReport {
  /// Base the hrefs were originally resolved against.
  pub old_base: ResolvedUrl,
  /// Base the hrefs will be resolved against from now on.
  pub new_base: ResolvedUrl,
  /// Directory of the new base that relative hrefs are computed from.
  pub new_base_directory: ResolvedUrl,
  /// Relocated hrefs, in input order.
  pub hrefs: Vec<RelocatedHref>,
  /// Counters for each outcome.
  pub summary: RelocationSummary,
}
