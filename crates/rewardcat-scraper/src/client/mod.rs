//! HTTP client for the rewards section endpoint.

use std::collections::HashSet;
use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use rewardcat_core::RewardRecord;

use crate::error::ScraperError;
use crate::normalize::normalize_page;
use crate::page::{PageFetch, PageRequest};
use crate::types::RewardsPage;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// HTTP client for `GET {base}/{slug}/{page}`.
///
/// Each page is requested exactly once. Anything other than `200 OK` is
/// reported as a typed error for the caller to tally; the crawl treats all of
/// them as an empty page.
#[derive(Debug, Clone)]
pub struct RewardsClient {
    client: Client,
    base_url: Url,
}

impl RewardsClient {
    /// Creates a `RewardsClient` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidBaseUrl`] if `base_url` does not parse or
    ///   cannot carry path segments (e.g. `mailto:`).
    /// - [`ScraperError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ScraperError> {
        let base_url = parse_base_url(base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Fetches and normalizes one page. Never fails; the outcome is carried
    /// in the returned [`PageFetch`].
    pub async fn fetch_page(&self, request: PageRequest) -> PageFetch {
        let result = self.try_fetch_page(&request).await;
        PageFetch::new(request, result)
    }

    /// Fetches one page and normalizes every award in it.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] — connection, TLS, timeout or body read failure.
    /// - [`ScraperError::NotFound`] — HTTP 404.
    /// - [`ScraperError::UnexpectedStatus`] — any other status except 200.
    /// - [`ScraperError::Deserialize`] — body is not a valid rewards page.
    pub async fn try_fetch_page(
        &self,
        request: &PageRequest,
    ) -> Result<HashSet<RewardRecord>, ScraperError> {
        let url = self.page_url(&request.slug, request.page);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ScraperError::NotFound {
                url: url.to_string(),
            });
        }

        if status != StatusCode::OK {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let page = serde_json::from_str::<RewardsPage>(&body).map_err(|e| {
            ScraperError::Deserialize {
                context: format!("rewards page {request}"),
                source: e,
            }
        })?;

        let records = normalize_page(page);
        tracing::debug!(
            slug = %request.slug,
            page = request.page,
            records = records.len(),
            "fetched page"
        );
        Ok(records)
    }

    /// Builds `{base}/{slug}/{page}`. The slug is percent-encoded as a single
    /// path segment and a trailing `/` on the base is ignored.
    #[must_use]
    pub fn page_url(&self, slug: &str, page: u32) -> Url {
        let mut url = self.base_url.clone();
        // `parse_base_url` rejects cannot-be-a-base URLs, so this always matches.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(slug).push(&page.to_string());
        }
        url
    }
}

/// Parses and validates the configured base URL.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidBaseUrl`] if the URL does not parse or is
/// not hierarchical.
fn parse_base_url(base_url: &str) -> Result<Url, ScraperError> {
    let url = Url::parse(base_url).map_err(|e| ScraperError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ScraperError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: "URL cannot carry path segments".into(),
        });
    }

    Ok(url)
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
