//! Batch relocation of hrefs from one document base to another.

use tracing::{debug, trace};

use crate::models::{
    RelocatedHref, RelocationOutcome, RelocationReport, RelocationSummary, ResolvedUrl,
    RewrittenHref,
};
use crate::url_paths::{
    is_absolute_path, is_templated_url, rewrite_href_base_url, strip_url_file_search_and_hash,
};

/// Rewrites the hrefs of a document that moves from `old_base` to `new_base`.
///
/// Unlike [`rewrite_href_base_url`], the relocator also recognises template expressions and
/// leaves them alone, so it can be fed every href found in a document.
#[derive(Debug, Clone)]
pub struct HrefRelocator {
    old_base: ResolvedUrl,
    new_base: ResolvedUrl,
}

impl HrefRelocator {
    /// Create a relocator for a document moving between the two bases.
    pub fn new(old_base: impl Into<ResolvedUrl>, new_base: impl Into<ResolvedUrl>) -> Self {
        Self {
            old_base: old_base.into(),
            new_base: new_base.into(),
        }
    }

    /// Base the hrefs were written against.
    pub fn old_base(&self) -> &ResolvedUrl {
        &self.old_base
    }

    /// Base the hrefs will be resolved against.
    pub fn new_base(&self) -> &ResolvedUrl {
        &self.new_base
    }

    /// Relocate a single href.
    pub fn relocate(&self, href: &str) -> RelocatedHref {
        let (rewritten, outcome) = if is_templated_url(href) {
            (href.to_string(), RelocationOutcome::Templated)
        } else {
            match rewrite_href_base_url(href, &self.old_base, &self.new_base) {
                RewrittenHref::Unchanged(unchanged) => {
                    (unchanged.to_string(), RelocationOutcome::Absolute)
                }
                RewrittenHref::Rewritten(rewritten) => {
                    let outcome = if is_absolute_path(rewritten.as_str()) {
                        RelocationOutcome::CrossOrigin
                    } else {
                        RelocationOutcome::Relative
                    };
                    (rewritten.into_inner(), outcome)
                }
            }
        };

        trace!(original = href, href = %rewritten, ?outcome, "relocated href");

        RelocatedHref {
            original: href.to_string(),
            href: rewritten,
            outcome,
        }
    }

    /// Relocate every href in `hrefs`, keeping their order, and summarise the outcomes.
    pub fn relocate_all<I, S>(&self, hrefs: I) -> RelocationReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut summary = RelocationSummary::default();
        let relocated: Vec<RelocatedHref> = hrefs
            .into_iter()
            .map(|href| {
                let relocated = self.relocate(href.as_ref());
                summary.record(relocated.outcome);
                relocated
            })
            .collect();

        debug!(
            old_base = %self.old_base,
            new_base = %self.new_base,
            total = summary.total(),
            relative = summary.relative,
            cross_origin = summary.cross_origin,
            "relocated hrefs"
        );

        RelocationReport {
            old_base: self.old_base.clone(),
            new_base: self.new_base.clone(),
            new_base_directory: strip_url_file_search_and_hash(self.new_base.clone()),
            hrefs: relocated,
            summary,
        }
    }
}
