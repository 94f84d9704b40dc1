//! View mode state for the listings screen.
//!
//! The screen shows listings in one of three modes:
//! - **Grid**: Default card layout
//! - **List**: Compact rows, a peer of grid with no extra transition rules
//! - **Detail**: One listing full-screen, entered only by opening a listing
//!
//! # Example
//!
//! ```rust
//! use listings_client::app::ViewMode;
//!
//! assert_eq!(ViewMode::default(), ViewMode::Grid);
//! assert!(ViewMode::List.is_collection());
//! assert!(!ViewMode::Detail.is_collection());
//! ```

use serde::{Deserialize, Serialize};

/// How the listings screen is currently presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Card grid of the current page. Initial mode.
    #[default]
    Grid,

    /// Row list of the current page.
    List,

    /// Full-screen view of the selected listing.
    ///
    /// Backed by a history entry so that back-navigation closes it.
    Detail,
}

impl ViewMode {
    /// Returns `true` for the modes that show the whole page of listings.
    #[must_use]
    pub const fn is_collection(self) -> bool {
        matches!(self, Self::Grid | Self::List)
    }
}
