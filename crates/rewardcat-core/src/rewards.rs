//! The normalized reward listing shared by the scraper and the CLI.

use std::cmp::Ordering;

use serde::Serialize;

/// Stock value for listings whose remaining quantity is unknown or not
/// applicable. Distinct from `0`, which means known to be out of stock.
pub const UNKNOWN_STOCK: i64 = -1;

/// One normalized reward listing.
///
/// A record is its own dedup key: equality and hashing cover exactly these
/// five fields, so the same listing seen on two pages (or under two slugs)
/// collapses to one entry in a `HashSet`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RewardRecord {
    /// Trimmed listing title.
    pub name: String,
    /// Price in loyalty points, as reported upstream.
    pub price: i64,
    /// Trimmed free-text description.
    pub description: String,
    /// Remaining quantity, or [`UNKNOWN_STOCK`].
    pub stock: i64,
    /// Venue or partner fulfilling the reward.
    pub partner: String,
}

impl RewardRecord {
    /// Catalog ordering: ascending by price, then name, then partner.
    ///
    /// Records equal on all three keys compare `Equal` even if their
    /// description or stock differ.
    #[must_use]
    pub fn catalog_order(&self, other: &Self) -> Ordering {
        self.price
            .cmp(&other.price)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.partner.cmp(&other.partner))
    }
}

#[cfg(test)]
#[path = "rewards_test.rs"]
mod tests;
