/// Start-of-run settings for one catalog crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the rewards section endpoint; `{slug}/{page}` is appended.
    pub base_url: String,
    /// Collection slugs to crawl, in configured order.
    pub slugs: Vec<String>,
    /// Inclusive upper bound of the page index range `0..=max_page`.
    pub max_page: u32,
    /// Maximum number of page fetches in flight at once.
    pub max_concurrent_pages: usize,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}
