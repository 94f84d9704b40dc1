//! Listing domain model.
//!
//! A [`Listing`] is an opaque record produced by the listings API. Only `id`
//! is interpreted by the client; every other field is kept verbatim in
//! [`Listing::attributes`] so new server fields never break decoding.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single auction or property listing as returned by the server.
///
/// Listings are immutable once received. Collections of listings are replaced
/// wholesale on every fetch, preserving server order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Server-assigned identifier.
    pub id: i64,

    /// All remaining server fields (title, prices, dates, images, ...).
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Listing {
    /// Creates a listing with no attributes beyond its id.
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self {
            id,
            attributes: Map::new(),
        }
    }

    /// Adds or replaces one attribute, returning the listing for chaining.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns a string attribute, or `None` when missing, null or not a string.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.text("title")
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.text("category")
    }

    #[must_use]
    pub fn county(&self) -> Option<&str> {
        self.text("county")
    }

    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.text("city")
    }

    /// Starting price exactly as the server formatted it.
    #[must_use]
    pub fn starting_price(&self) -> Option<&str> {
        self.text("starting_price")
    }

    #[must_use]
    pub fn auction_status(&self) -> Option<&str> {
        self.text("auction_status")
    }
}
