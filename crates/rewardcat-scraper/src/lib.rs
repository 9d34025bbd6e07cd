pub mod client;
pub mod error;
pub mod finalize;
pub mod normalize;
pub mod page;
pub mod pagination;
pub mod types;

pub use client::RewardsClient;
pub use error::ScraperError;
pub use finalize::{finalize, render_json};
pub use normalize::{normalize_award, normalize_page};
pub use page::{PageFetch, PageRequest};
pub use pagination::{crawl, CrawlPlan, CrawlSummary};
pub use types::{Award, Lane, RewardsPage};
