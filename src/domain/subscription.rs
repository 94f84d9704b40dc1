//! Saved-search subscription model and payload mapping.
//!
//! A subscription stores an email address together with a snapshot of the
//! filter criteria. Outbound snapshots are produced by
//! [`SubscriptionFilters::from_criteria`], the single place that decides which
//! criteria fields are sent:
//!
//! - `page`, `page_size`: dropped
//! - `status_unsold`, `status_active`: dropped, replaced by `status` /
//!   `auction_status` when the flag was set
//! - every text field: copied as-is, empty strings included
//!
//! Snapshots read back from the server are kept as the raw JSON object, since
//! the server stores them untyped and older rows may not match this shape.

use crate::domain::filters::FilterCriteria;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Filter snapshot sent when creating a subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubscriptionFilters {
    pub search: String,
    pub category: String,
    pub min_price: String,
    pub max_price: String,
    pub county: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auction_status: Option<String>,
}

impl SubscriptionFilters {
    /// Snapshots the criteria, mapping the UI flags to backend fields.
    ///
    /// # Example
    ///
    /// ```
    /// use listings_client::domain::{FilterCriteria, SubscriptionFilters};
    ///
    /// let criteria = FilterCriteria { status_active: true, page: 4, ..Default::default() };
    /// let filters = SubscriptionFilters::from_criteria(&criteria);
    /// assert_eq!(filters.auction_status.as_deref(), Some("Licitatie in desfasurare"));
    /// assert_eq!(filters.status, None);
    /// ```
    #[must_use]
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        Self {
            search: criteria.search.clone(),
            category: criteria.category.clone(),
            min_price: criteria.min_price.clone(),
            max_price: criteria.max_price.clone(),
            county: criteria.county.clone(),
            city: criteria.city.clone(),
            status: criteria.mapped_status().map(String::from),
            auction_status: criteria.mapped_auction_status().map(String::from),
        }
    }
}

/// Body of `POST /subscriptions/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionPayload {
    pub email: String,
    pub filters: SubscriptionFilters,
}

impl SubscriptionPayload {
    #[must_use]
    pub fn new(email: impl Into<String>, criteria: &FilterCriteria) -> Self {
        Self {
            email: email.into(),
            filters: SubscriptionFilters::from_criteria(criteria),
        }
    }
}

/// A saved search acknowledged by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Server-assigned identifier.
    pub id: i64,
    pub email: String,
    /// Filter snapshot exactly as stored by the server.
    #[serde(default)]
    pub filters: Map<String, Value>,
    /// Creation time reported by the server, when present.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_timestamp"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Subscription {
    /// Non-empty text filters of the snapshot as `key=value` pairs, sorted
    /// by key. Non-string values are shown as JSON.
    #[must_use]
    pub fn filter_summary(&self) -> Vec<String> {
        self.filters
            .iter()
            .filter_map(|(key, value)| match value {
                Value::Null => None,
                Value::String(text) if text.is_empty() => None,
                Value::String(text) => Some(format!("{key}={text}")),
                other => Some(format!("{key}={other}")),
            })
            .collect()
    }
}

/// Accepts RFC 3339 timestamps and naive ISO 8601 ones, the latter read as UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|value| {
        parse_timestamp(&value).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {value}")))
    })
    .transpose()
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}
