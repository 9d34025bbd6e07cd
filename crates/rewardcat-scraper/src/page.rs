//! One unit of crawl work and its result.

use std::collections::HashSet;
use std::fmt;

use rewardcat_core::RewardRecord;

use crate::error::ScraperError;

/// A `(slug, page)` work item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageRequest {
    pub slug: String,
    /// Zero-based page index.
    pub page: u32,
}

impl PageRequest {
    #[must_use]
    pub fn new(slug: impl Into<String>, page: u32) -> Self {
        Self {
            slug: slug.into(),
            page,
        }
    }
}

impl fmt::Display for PageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.slug, self.page)
    }
}

/// The result of fetching one page.
///
/// Keeps the typed error so the crawl can tally outcomes, while
/// [`PageFetch::into_records`] gives the tolerant view where every failure
/// is simply an empty page.
#[derive(Debug)]
pub struct PageFetch {
    pub request: PageRequest,
    pub result: Result<HashSet<RewardRecord>, ScraperError>,
}

impl PageFetch {
    #[must_use]
    pub fn new(
        request: PageRequest,
        result: Result<HashSet<RewardRecord>, ScraperError>,
    ) -> Self {
        Self { request, result }
    }

    /// Shorthand for a page that decoded into `records`.
    #[must_use]
    pub fn records(request: PageRequest, records: HashSet<RewardRecord>) -> Self {
        Self::new(request, Ok(records))
    }

    /// The page's records, or an empty set if the fetch failed.
    ///
    /// Transport and decode failures are logged at `warn`. Non-200 statuses
    /// are the normal end-of-collection signal and only logged at `debug`.
    #[must_use]
    pub fn into_records(self) -> HashSet<RewardRecord> {
        let Self { request, result } = self;
        match result {
            Ok(records) => records,
            Err(err) => {
                log_page_failure(&request, &err);
                HashSet::new()
            }
        }
    }
}

fn log_page_failure(request: &PageRequest, err: &ScraperError) {
    match err {
        ScraperError::NotFound { .. } | ScraperError::UnexpectedStatus { .. } => {
            tracing::debug!(
                slug = %request.slug,
                page = request.page,
                error = %err,
                "page returned no data"
            );
        }
        ScraperError::Http(_)
        | ScraperError::Deserialize { .. }
        | ScraperError::InvalidBaseUrl { .. } => {
            tracing::warn!(
                slug = %request.slug,
                page = request.page,
                error = %err,
                "page fetch failed; treating as empty"
            );
        }
    }
}
