//! Fixed-range pagination across collection slugs.
//!
//! The rewards API has no reliable end-of-collection marker, so every slug is
//! crawled over the whole index range `0..=max_page`. Pages past the real data
//! come back as 404 and cost one request each.
//!
//! Fetches run through a `buffer_unordered` stream capped at
//! `max_concurrent`, and every finished page is folded into a single
//! [`CrawlSummary`] on the driving task. The merge is a set union, so the
//! result does not depend on completion order and needs no lock.

use std::collections::HashSet;
use std::future::Future;

use futures::stream::{self, StreamExt};
use rewardcat_core::{AppConfig, RewardRecord};

use crate::error::ScraperError;
use crate::page::{PageFetch, PageRequest};

/// Which pages to crawl and how many to fetch at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlPlan {
    pub slugs: Vec<String>,
    /// Inclusive upper page index.
    pub max_page: u32,
    /// Fetches in flight at once. `0` is treated as `1`.
    pub max_concurrent: usize,
}

impl CrawlPlan {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            slugs: config.slugs.clone(),
            max_page: config.max_page,
            max_concurrent: config.max_concurrent_pages,
        }
    }

    /// Every `(slug, page)` work item, slug-major.
    #[must_use]
    pub fn requests(&self) -> Vec<PageRequest> {
        self.slugs
            .iter()
            .flat_map(|slug| {
                (0..=self.max_page).map(move |page| PageRequest::new(slug.as_str(), page))
            })
            .collect()
    }
}

/// Merged records plus per-outcome page counts for one crawl.
#[derive(Debug, Default)]
pub struct CrawlSummary {
    pub records: HashSet<RewardRecord>,
    pub pages_requested: usize,
    /// Pages that returned 200 and decoded, including ones with no awards.
    pub pages_decoded: usize,
    pub pages_not_found: usize,
    /// Non-200, non-404 responses (auth failures, rate limiting, 5xx).
    pub pages_unexpected_status: usize,
    /// Transport or decode failures.
    pub pages_failed: usize,
}

impl CrawlSummary {
    /// Tallies the page outcome and unions its records into the accumulator.
    pub fn absorb(&mut self, fetch: PageFetch) {
        self.pages_requested += 1;
        match &fetch.result {
            Ok(_) => self.pages_decoded += 1,
            Err(ScraperError::NotFound { .. }) => self.pages_not_found += 1,
            Err(ScraperError::UnexpectedStatus { .. }) => self.pages_unexpected_status += 1,
            Err(
                ScraperError::Http(_)
                | ScraperError::Deserialize { .. }
                | ScraperError::InvalidBaseUrl { .. },
            ) => self.pages_failed += 1,
        }
        self.records.extend(fetch.into_records());
    }

    /// Emits the crawl totals. Unexpected statuses get their own `warn` line
    /// since the crawl otherwise treats them like a missing page.
    pub fn log(&self) {
        tracing::info!(
            records = self.records.len(),
            pages_requested = self.pages_requested,
            pages_decoded = self.pages_decoded,
            pages_not_found = self.pages_not_found,
            pages_unexpected_status = self.pages_unexpected_status,
            pages_failed = self.pages_failed,
            "crawl complete"
        );

        if self.pages_unexpected_status > 0 {
            tracing::warn!(
                pages_unexpected_status = self.pages_unexpected_status,
                "some pages answered with a status other than 200 or 404; results may be incomplete"
            );
        }
    }
}

/// Crawls every page in `plan` with at most `plan.max_concurrent` fetches in
/// flight and returns the merged result.
///
/// `fetch` is usually `|req| client.fetch_page(req)`; tests pass an
/// instrumented closure. Individual page failures never fail the crawl.
pub async fn crawl<F, Fut>(plan: &CrawlPlan, fetch: F) -> CrawlSummary
where
    F: Fn(PageRequest) -> Fut,
    Fut: Future<Output = PageFetch>,
{
    let requests = plan.requests();
    let max_concurrent = plan.max_concurrent.max(1);

    tracing::info!(
        slugs = ?plan.slugs,
        max_page = plan.max_page,
        max_concurrent,
        pages = requests.len(),
        "starting crawl"
    );

    stream::iter(requests)
        .map(fetch)
        .buffer_unordered(max_concurrent)
        .fold(CrawlSummary::default(), |mut summary, page| async move {
            summary.absorb(page);
            summary
        })
        .await
}

#[cfg(test)]
#[path = "pagination_test.rs"]
mod tests;
