//! Domain layer for the listings client.
//!
//! This module contains the core domain types and the rules that shape what is
//! sent to the listings API, independent of HTTP, history or terminal concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`filters`]: Filter criteria and query parameter encoding
//! - [`listing`]: Opaque listing records
//! - [`subscription`]: Saved-search subscriptions and their create payload
//!
//! # Examples
//!
//! ```
//! use listings_client::domain::{FilterCriteria, FilterUpdate, Result};
//!
//! fn first_page_of(search: &str) -> Result<String> {
//!     let mut filters = FilterCriteria::default();
//!     filters.apply(FilterUpdate::Search(search.to_string()))?;
//!     Ok(filters.build_query_params().to_query_string())
//! }
//!
//! assert_eq!(first_page_of("casa").unwrap(), "search=casa&page=1&page_size=12");
//! ```

pub mod error;
pub mod filters;
pub mod listing;
pub mod subscription;

pub use error::{ListingsError, Result};
pub use filters::{FilterCriteria, FilterUpdate, QueryParams};
pub use listing::Listing;
pub use subscription::{Subscription, SubscriptionFilters, SubscriptionPayload};
