//! Ordering and rendering of the merged catalog.

use std::collections::HashSet;

use rewardcat_core::RewardRecord;
use serde::Serialize;

/// Converts the merged set into the catalog order: price, then name, then
/// partner, all ascending.
#[must_use]
pub fn finalize(records: HashSet<RewardRecord>) -> Vec<RewardRecord> {
    let mut records: Vec<RewardRecord> = records.into_iter().collect();
    records.sort_unstable_by(RewardRecord::catalog_order);
    records
}

/// Renders records as a pretty-printed JSON array with four-space indentation.
///
/// # Errors
///
/// Returns the underlying `serde_json::Error` if serialization fails.
pub fn render_json(records: &[RewardRecord]) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
