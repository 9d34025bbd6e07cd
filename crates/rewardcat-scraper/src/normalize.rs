//! Normalization from raw [`Award`] entries to [`RewardRecord`].
//!
//! Normalization is total: every decodable award yields exactly one record.

use std::collections::HashSet;

use rewardcat_core::{RewardRecord, UNKNOWN_STOCK};

use crate::types::{Award, RewardsPage};

/// Normalizes one raw [`Award`] into a [`RewardRecord`].
///
/// - `partner`: first non-empty of location, property, partner, outlet name.
/// - `description`: first non-empty of short description, subtitle; trimmed.
/// - `stock`: the quantity when `>= 0`, otherwise [`UNKNOWN_STOCK`]. A
///   missing quantity counts as `0`.
/// - `name`: the title, trimmed.
/// - `price`: passed through unchanged.
#[must_use]
pub fn normalize_award(award: Award) -> RewardRecord {
    let partner = first_non_empty([
        award.location_name,
        award.property_name,
        award.partner_name,
        award.outlet_name,
    ]);

    let description = first_non_empty([award.short_description, award.sub_title]);

    let quantity = award.quantity.unwrap_or_default();
    let stock = if quantity >= 0 { quantity } else { UNKNOWN_STOCK };

    RewardRecord {
        name: award.title.unwrap_or_default().trim().to_owned(),
        price: award.price.unwrap_or_default(),
        description: description.trim().to_owned(),
        stock,
        partner,
    }
}

/// Normalizes every award of every lane in a page into one deduplicated set.
#[must_use]
pub fn normalize_page(page: RewardsPage) -> HashSet<RewardRecord> {
    page.lanes
        .into_iter()
        .flat_map(|lane| lane.awards)
        .map(normalize_award)
        .collect()
}

/// Returns the first candidate that is present and non-empty, or `""`.
///
/// Emptiness is checked before trimming, so a whitespace-only value still
/// wins over later candidates.
fn first_non_empty<const N: usize>(candidates: [Option<String>; N]) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
