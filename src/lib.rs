//! Listings client: state controller for browsing auction listings.
//!
//! The crate drives a listings screen backed by a remote REST service:
//! - Filtered, paginated listing queries with stale-response protection
//! - Saved-search subscriptions created from the current filters
//! - Grid/list display modes and a history-backed detail view
//! - A terminal front end (`main.rs`) over the same controller

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal front end (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Controller (controller)                            │  ← Action execution
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action emission                                  │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Worker        │   │ API           │   │ Infrastructure│
//! │ (worker/)     │   │ (api/)        │   │ (infra../)    │
//! │ - Requests    │   │ - Backend trait│  │ - History     │
//! │ - Completions │   │ - reqwest impl│   │ - Interaction │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Filters and query encoding                       │
//! │  - Listings and subscriptions                       │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`controller`]: Executes actions and feeds worker completions back
//! - [`domain`]: Core domain types (filters, listings, subscriptions, errors)
//! - [`api`]: Backend trait and its HTTP implementation
//! - [`worker`]: Request/completion protocol and the API worker
//! - [`infrastructure`]: History and user interaction ports
//! - `observability`: Tracing subscriber setup
//!
//! # Configuration
//!
//! The terminal front end reads an optional TOML file:
//!
//! ```toml
//! base_url = "http://localhost:8000/"
//! request_timeout_secs = 30
//! trace_level = "debug"
//! reset_page_on_filter_change = false
//! ```
//!
//! # Example
//!
//! ```rust
//! use listings_client::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::FetchListings)?;
//! assert!(state.loading);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), listings_client::ListingsError>(())
//! ```

pub mod api;
pub mod app;
pub mod controller;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, ViewMode};
pub use controller::Controller;
pub use domain::{ListingsError, Result};

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default API root. Endpoint paths are joined onto it.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client configuration.
///
/// Every field is optional in the TOML source; missing fields take their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root URL of the listings API. Default: `http://localhost:8000/`
    pub base_url: String,

    /// Per-request timeout in seconds. Default: 30
    pub request_timeout_secs: u64,

    /// Tracing filter directive, e.g. `"debug"` or `"listings_client=trace"`.
    ///
    /// `RUST_LOG` takes precedence. Default: `"info"`
    pub trace_level: Option<String>,

    /// Return to page 1 whenever a non-pagination filter changes.
    pub reset_page_on_filter_change: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            trace_level: None,
            reset_page_on_filter_change: false,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ListingsError::Config`] on malformed TOML, unknown keys or
    /// mistyped values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use listings_client::Config;
    ///
    /// let config = Config::from_toml_str("base_url = \"https://api.example.ro/\"")?;
    /// assert_eq!(config.base_url, "https://api.example.ro/");
    /// assert_eq!(config.request_timeout_secs, 30);
    /// # Ok::<(), listings_client::ListingsError>(())
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| ListingsError::Config(e.to_string()))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ListingsError::Io`] if the file cannot be read and
    /// [`ListingsError::Config`] if it cannot be parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading configuration");
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Per-request timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Creates the initial application state for a configuration.
///
/// The state starts in grid view on page 1 with no listings; dispatching
/// [`Event::Init`] loads the first page and the subscriptions.
///
/// # Example
///
/// ```rust
/// use listings_client::{initialize, Config, ViewMode};
///
/// let config = Config {
///     reset_page_on_filter_change: true,
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.view, ViewMode::Grid);
/// assert!(state.reset_page_on_filter_change);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(base_url = %config.base_url, "initializing listings client");
    AppState {
        reset_page_on_filter_change: config.reset_page_on_filter_change,
        ..AppState::new()
    }
}
