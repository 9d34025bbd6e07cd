//! Response types for the rewards section endpoint
//! (`GET {base}/{slug}/{page}`).
//!
//! ## Observed shape
//!
//! A page is a wrapper with its own `Meta` block and an ordered list of
//! `Lanes`. Each lane carries a `Meta` block and the `Awards` shown in it.
//! Keys are PascalCase. The container keys (`Meta`, `Lanes`, `Awards`) are
//! also accepted in lower case; other fields match only their PascalCase
//! spelling and decode as absent otherwise.
//!
//! ### Nulls
//! String fields such as `SubTitle`, `OutletName` and `PropertyName` are
//! frequently `null` rather than `""`. They are modeled as `Option<String>`
//! and an absent value is treated the same as an empty one during
//! normalization.
//!
//! ### `Quantity`
//! A negative quantity marks listings without stock tracking. A missing or
//! `null` quantity is kept as `None` and normalized as `0`.
//!
//! Only the fields the normalizer reads are modeled; everything else is
//! ignored.

use serde::{Deserialize, Deserializer};

/// Top-level response for one page of a collection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RewardsPage {
    #[serde(default, alias = "meta")]
    pub meta: Option<PageMeta>,

    /// Lanes in display order. `null` decodes as empty.
    #[serde(default, alias = "lanes", deserialize_with = "null_as_default")]
    pub lanes: Vec<Lane>,

    #[serde(default)]
    pub message: Option<serde_json::Value>,

    #[serde(default)]
    pub error_message: Option<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageMeta {
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sub_title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One display lane inside a page.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Lane {
    #[serde(default, alias = "meta")]
    pub meta: Option<LaneMeta>,

    #[serde(default, alias = "awards", deserialize_with = "null_as_default")]
    pub awards: Vec<Award>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LaneMeta {
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default, rename = "Type")]
    pub lane_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
}

/// A raw reward listing as emitted by the API.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Award {
    /// Display title, usually padded with stray whitespace.
    #[serde(default)]
    pub title: Option<String>,

    /// Price in loyalty points.
    #[serde(default)]
    pub price: Option<i64>,

    /// Remaining stock; negative when the listing has no stock tracking.
    #[serde(default)]
    pub quantity: Option<i64>,

    #[serde(default)]
    pub short_description: Option<String>,

    #[serde(default)]
    pub sub_title: Option<String>,

    #[serde(default)]
    pub location_name: Option<String>,

    #[serde(default)]
    pub property_name: Option<String>,

    #[serde(default)]
    pub partner_name: Option<String>,

    #[serde(default)]
    pub outlet_name: Option<String>,
}

/// Decodes `null` as `T::default()`.
///
/// `#[serde(default)]` alone only covers a missing key; an explicit `null`
/// would otherwise fail for non-`Option` targets such as `Vec`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_page() {
        let page: RewardsPage = serde_json::from_str(
            r#"{"Meta": {"Title": "Hotels"}, "Lanes": [{"Meta": {}, "Awards": [{"Title": "Spa Day"}]}]}"#,
        )
        .unwrap();
        assert_eq!(page.lanes.len(), 1);
        assert_eq!(page.lanes[0].awards[0].title.as_deref(), Some("Spa Day"));
        assert_eq!(
            page.meta.and_then(|m| m.title).as_deref(),
            Some("Hotels")
        );
    }

    #[test]
    fn null_lanes_and_awards_decode_as_empty() {
        let page: RewardsPage =
            serde_json::from_str(r#"{"Lanes": null}"#).unwrap();
        assert!(page.lanes.is_empty());

        let page: RewardsPage =
            serde_json::from_str(r#"{"Lanes": [{"Awards": null}]}"#).unwrap();
        assert_eq!(page.lanes.len(), 1);
        assert!(page.lanes[0].awards.is_empty());
    }

    #[test]
    fn missing_lanes_decode_as_empty() {
        let page: RewardsPage = serde_json::from_str(r#"{"Message": "ok"}"#).unwrap();
        assert!(page.lanes.is_empty());
    }

    #[test]
    fn null_string_fields_decode_as_none() {
        let award: Award = serde_json::from_str(
            r#"{"Title": "x", "SubTitle": null, "OutletName": null, "Quantity": null}"#,
        )
        .unwrap();
        assert!(award.sub_title.is_none());
        assert!(award.outlet_name.is_none());
        assert!(award.quantity.is_none());
    }

    #[test]
    fn ignores_unknown_keys() {
        let award: Award = serde_json::from_str(
            r#"{"AwardID": 7, "Title": "x", "SnipeText": "NEW", "RequiredInfo": {"Email": true}}"#,
        )
        .unwrap();
        assert_eq!(award.title.as_deref(), Some("x"));
    }

    #[test]
    fn lower_case_container_keys_decode() {
        let page: RewardsPage = serde_json::from_str(
            r#"{"meta": {"Title": "Hotels"}, "lanes": [{"meta": {}, "awards": [{"Title": "Spa Day"}]}]}"#,
        )
        .unwrap();
        assert_eq!(page.lanes.len(), 1);
        assert_eq!(page.lanes[0].awards.len(), 1);
        assert_eq!(page.lanes[0].awards[0].title.as_deref(), Some("Spa Day"));
        assert!(page.meta.is_some());
    }

    #[test]
    fn lower_case_award_fields_decode_as_absent() {
        let page: RewardsPage =
            serde_json::from_str(r#"{"lanes": [{"awards": [{"title": "x"}]}]}"#).unwrap();
        assert_eq!(page.lanes[0].awards.len(), 1);
        assert!(page.lanes[0].awards[0].title.is_none());
    }

    #[test]
    fn string_price_is_a_decode_error() {
        let result = serde_json::from_str::<Award>(r#"{"Price": "100"}"#);
        assert!(result.is_err());
    }
}
