//! Filter criteria and query parameter encoding.
//!
//! [`FilterCriteria`] holds everything the user can narrow the listing grid by,
//! plus the pagination controls. It is mutated only through
//! [`FilterCriteria::apply`] and [`FilterCriteria::reset`], and encoded for the
//! listings endpoint by [`FilterCriteria::build_query_params`].
//!
//! # Field Mapping
//!
//! The two checkbox flags are UI concepts and never reach the API as-is:
//!
//! | UI flag         | Backend parameter | Value                        |
//! |-----------------|-------------------|------------------------------|
//! | `status_unsold` | `status`          | `NEADJUDECAT`                |
//! | `status_active` | `auction_status`  | `Licitatie in desfasurare`   |

use crate::domain::error::{ListingsError, Result};
use serde::{Deserialize, Serialize};

/// Backend status code for unsold (unadjudicated) items.
pub const STATUS_UNSOLD: &str = "NEADJUDECAT";

/// Backend auction status for auctions currently in progress.
pub const AUCTION_STATUS_ACTIVE: &str = "Licitatie in desfasurare";

/// Page size restored by [`FilterCriteria::reset`].
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Search, category, price, location and status filters plus pagination.
///
/// Prices are kept as strings because they come straight from free-text
/// inputs; an empty string means "no bound".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search: String,
    pub category: String,
    pub min_price: String,
    pub max_price: String,
    pub county: String,
    pub city: String,
    pub status_unsold: bool,
    pub status_active: bool,
    /// One-based page number. Never zero.
    pub page: u32,
    /// Listings per page. Never zero.
    pub page_size: u32,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: String::new(),
            min_price: String::new(),
            max_price: String::new(),
            county: String::new(),
            city: String::new(),
            status_unsold: false,
            status_active: false,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A single-field assignment to [`FilterCriteria`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    Search(String),
    Category(String),
    MinPrice(String),
    MaxPrice(String),
    County(String),
    City(String),
    StatusUnsold(bool),
    StatusActive(bool),
    Page(u32),
    PageSize(u32),
}

impl FilterUpdate {
    /// Returns `true` for updates that touch `page` or `page_size`.
    #[must_use]
    pub const fn is_pagination(&self) -> bool {
        matches!(self, Self::Page(_) | Self::PageSize(_))
    }
}

impl FilterCriteria {
    /// Assigns one field. Other fields, including `page`, are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`ListingsError::InvalidFilter`] for `Page(0)` or `PageSize(0)`;
    /// the criteria are unchanged in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use listings_client::domain::{FilterCriteria, FilterUpdate};
    ///
    /// let mut filters = FilterCriteria::default();
    /// filters.page = 3;
    /// filters.apply(FilterUpdate::Search("teren".into()))?;
    /// assert_eq!(filters.search, "teren");
    /// assert_eq!(filters.page, 3);
    /// assert!(filters.apply(FilterUpdate::Page(0)).is_err());
    /// # Ok::<(), listings_client::ListingsError>(())
    /// ```
    pub fn apply(&mut self, update: FilterUpdate) -> Result<()> {
        match update {
            FilterUpdate::Search(value) => self.search = value,
            FilterUpdate::Category(value) => self.category = value,
            FilterUpdate::MinPrice(value) => self.min_price = value,
            FilterUpdate::MaxPrice(value) => self.max_price = value,
            FilterUpdate::County(value) => self.county = value,
            FilterUpdate::City(value) => self.city = value,
            FilterUpdate::StatusUnsold(value) => self.status_unsold = value,
            FilterUpdate::StatusActive(value) => self.status_active = value,
            FilterUpdate::Page(0) => {
                return Err(ListingsError::InvalidFilter("page must be at least 1".into()));
            }
            FilterUpdate::Page(value) => self.page = value,
            FilterUpdate::PageSize(0) => {
                return Err(ListingsError::InvalidFilter(
                    "page_size must be greater than 0".into(),
                ));
            }
            FilterUpdate::PageSize(value) => self.page_size = value,
        }
        Ok(())
    }

    /// Restores every field to its default value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advances to the next page.
    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// Steps back one page. Returns `false`, leaving the page untouched, when
    /// already on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Backend `status` value implied by the `status_unsold` flag.
    #[must_use]
    pub fn mapped_status(&self) -> Option<&'static str> {
        self.status_unsold.then_some(STATUS_UNSOLD)
    }

    /// Backend `auction_status` value implied by the `status_active` flag.
    #[must_use]
    pub fn mapped_auction_status(&self) -> Option<&'static str> {
        self.status_active.then_some(AUCTION_STATUS_ACTIVE)
    }

    /// Encodes the criteria as listings endpoint query parameters.
    ///
    /// Text fields are included only when non-empty, the status flags are
    /// mapped to their backend fields, and `page`/`page_size` are always
    /// appended last.
    ///
    /// # Example
    ///
    /// ```
    /// use listings_client::domain::FilterCriteria;
    ///
    /// let filters = FilterCriteria {
    ///     search: "teren".into(),
    ///     status_unsold: true,
    ///     page: 2,
    ///     ..Default::default()
    /// };
    /// assert_eq!(
    ///     filters.build_query_params().to_query_string(),
    ///     "search=teren&status=NEADJUDECAT&page=2&page_size=12"
    /// );
    /// ```
    #[must_use]
    pub fn build_query_params(&self) -> QueryParams {
        let mut params = QueryParams::default();

        let text_fields = [
            ("search", &self.search),
            ("category", &self.category),
            ("min_price", &self.min_price),
            ("max_price", &self.max_price),
            ("county", &self.county),
            ("city", &self.city),
        ];
        for (key, value) in text_fields {
            if !value.is_empty() {
                params.push(key, value.clone());
            }
        }

        if let Some(status) = self.mapped_status() {
            params.push("status", status);
        }
        if let Some(auction_status) = self.mapped_auction_status() {
            params.push("auction_status", auction_status);
        }

        params.push("page", self.page.to_string());
        params.push("page_size", self.page_size.to_string());

        params
    }
}

/// Ordered query parameter sequence for the listings endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    /// Appends a parameter, keeping insertion order.
    pub fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.0.push((key, value.into()));
    }

    /// Returns the value of the first parameter named `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` when a parameter named `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| *k == key)
    }

    /// Iterates over `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Form-urlencodes the parameters (`a=1&b=two+words`).
    #[must_use]
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}
