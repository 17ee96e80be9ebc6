//! Decoders for the three remote response shapes.
//!
//! Missing and `null` fields decode to their zero value and unknown fields are
//! ignored, since the remote schema is a superset of what is consumed here.
//! Only a payload that is not well-formed JSON (or has a field of the wrong
//! type) fails with [`DecodeError`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::domain::entities::{ClickMetrics, CountryClicks, Link, LinkPage, UserInfo};
use crate::domain::providers::DecodeError;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UserResponse {
    #[serde(deserialize_with = "null_as_default")]
    default_group_guid: String,
    #[serde(deserialize_with = "null_as_default")]
    name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BitlinksResponse {
    #[serde(deserialize_with = "null_items_as_default")]
    links: Vec<BitlinkItem>,
    #[serde(deserialize_with = "null_as_default")]
    pagination: PaginationInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BitlinkItem {
    #[serde(deserialize_with = "null_as_default")]
    link: String,
    #[serde(deserialize_with = "null_as_default")]
    id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PaginationInfo {
    next: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    total: u64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CountryMetricsResponse {
    #[serde(deserialize_with = "null_as_default")]
    units: u32,
    #[serde(deserialize_with = "null_items_as_default")]
    metrics: Vec<CountryMetricItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CountryMetricItem {
    #[serde(deserialize_with = "null_as_default")]
    clicks: u64,
    #[serde(deserialize_with = "null_as_default")]
    value: String,
}

/// Reads a JSON `null` as the type's zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads a `null` list as empty and each `null` element as a zero-valued item.
fn null_items_as_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let items: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

fn parse<T: DeserializeOwned>(resource: &'static str, body: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(body).map_err(|e| DecodeError::new(resource, e.to_string()))
}

/// Decodes the `user` resource.
pub fn decode_user_info(body: &[u8]) -> Result<UserInfo, DecodeError> {
    let raw: UserResponse = parse("user", body)?;
    Ok(UserInfo::new(raw.default_group_guid, raw.name))
}

/// Decodes one page of the `groups/{guid}/bitlinks` resource.
///
/// A missing, `null` or empty `pagination.next` means the listing is done.
pub fn decode_link_page(body: &[u8]) -> Result<LinkPage, DecodeError> {
    let raw: BitlinksResponse = parse("bitlinks", body)?;

    Ok(LinkPage {
        links: raw
            .links
            .into_iter()
            .map(|item| Link::new(item.link, item.id))
            .collect(),
        next: raw.pagination.next.filter(|next| !next.is_empty()),
        total: raw.pagination.total,
    })
}

/// Decodes the `bitlinks/{id}/countries` resource.
pub fn decode_click_metrics(body: &[u8]) -> Result<ClickMetrics, DecodeError> {
    let raw: CountryMetricsResponse = parse("countries", body)?;

    Ok(ClickMetrics {
        window_days: raw.units,
        metrics: raw
            .metrics
            .into_iter()
            .map(|item| CountryClicks::new(item.value, item.clicks))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_user_info() {
        let body = br#"{"name":"carrpet912","default_group_guid":"Bk1hmwBHfQK"}"#;

        let user = decode_user_info(body).unwrap();

        assert_eq!(user.default_group_guid, "Bk1hmwBHfQK");
        assert_eq!(user.name, "carrpet912");
    }

    #[test]
    fn test_decode_user_info_missing_fields() {
        let user = decode_user_info(br#"{"login":"someone","is_active":true}"#).unwrap();

        assert_eq!(user, UserInfo::default());
    }

    #[test]
    fn test_decode_link_page() {
        let body = br#"{"pagination": {
            "total": 1,
            "page": 0,
            "next": "http://next.com"
        }, "links": [{"link": "http://bit.ly/HGDGAX", "id": "1928432", "title": "x"}]}"#;

        let page = decode_link_page(body).unwrap();

        assert_eq!(page.links, vec![Link::new("http://bit.ly/HGDGAX", "1928432")]);
        assert_eq!(page.next.as_deref(), Some("http://next.com"));
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_decode_link_page_empty_next_is_last() {
        let body = br#"{"links": [], "pagination": {"total": 0, "next": "", "prev": ""}}"#;

        let page = decode_link_page(body).unwrap();

        assert!(page.links.is_empty());
        assert_eq!(page.next, None);
    }

    #[test]
    fn test_decode_link_page_null_or_missing_pagination() {
        let null_next = decode_link_page(br#"{"links": [], "pagination": {"next": null}}"#).unwrap();
        let no_pagination = decode_link_page(br#"{"links": [{"id": "bit.ly/a"}]}"#).unwrap();

        assert_eq!(null_next.next, None);
        assert_eq!(no_pagination.next, None);
        assert_eq!(no_pagination.links[0].short_url, "");
        assert_eq!(no_pagination.links[0].id, "bit.ly/a");
    }

    #[test]
    fn test_decode_click_metrics() {
        let body = br#"{"units":30, "facet":"countries", "unit":"day",
            "metrics": [{"clicks":27,"value": "US"}, {"clicks": 1000, "value": "China"}]}"#;

        let metrics = decode_click_metrics(body).unwrap();

        assert_eq!(metrics.window_days, 30);
        assert_eq!(
            metrics.metrics,
            vec![CountryClicks::new("US", 27), CountryClicks::new("China", 1000)]
        );
    }

    #[test]
    fn test_decode_click_metrics_empty_object() {
        let metrics = decode_click_metrics(b"{}").unwrap();

        assert_eq!(metrics.window_days, 0);
        assert!(metrics.metrics.is_empty());
    }

    #[test]
    fn test_malformed_payloads_fail() {
        assert!(decode_user_info(b"").is_err());
        assert!(decode_link_page(b"{\"links\": [").is_err());

        let err = decode_click_metrics(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert_eq!(err.resource, "countries");
    }

    #[test]
    fn test_null_fields_decode_to_zero_values() {
        let user = decode_user_info(br#"{"default_group_guid":"G1","name":null}"#).unwrap();
        assert_eq!(user, UserInfo::new("G1", ""));

        let page = decode_link_page(
            br#"{"links": [{"link": null, "id": "bit.ly/a"}, null],
                "pagination": {"total": null, "next": null}}"#,
        )
        .unwrap();
        assert_eq!(page.links, vec![Link::new("", "bit.ly/a"), Link::default()]);
        assert_eq!(page.total, 0);
        assert_eq!(page.next, None);

        let metrics =
            decode_click_metrics(br#"{"units": null, "metrics": null}"#).unwrap();
        assert_eq!(metrics.window_days, 0);
        assert!(metrics.metrics.is_empty());

        let metrics =
            decode_click_metrics(br#"{"metrics": [{"clicks": null, "value": "US"}]}"#).unwrap();
        assert_eq!(metrics.metrics, vec![CountryClicks::new("US", 0)]);
    }

    #[test]
    fn test_null_sections_decode_to_empty() {
        let page = decode_link_page(br#"{"links": null, "pagination": null}"#).unwrap();

        assert!(page.links.is_empty());
        assert!(!page.has_next());
    }

    #[test]
    fn test_wrong_field_type_fails() {
        let result = decode_click_metrics(br#"{"metrics": [{"clicks": "many", "value": "US"}]}"#);

        assert!(result.is_err());
    }
}
