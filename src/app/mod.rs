//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! controller and the domain/worker layers. It implements the event-driven
//! architecture behind the listings screen.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Grid, list and detail view modes
//! - [`state`]: Central application state container
//!
//! # Example
//!
//! ```rust
//! use listings_client::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::new();
//! let (_, actions) = handle_event(&mut state, &Event::Init)?;
//! assert_eq!(actions.len(), 2);
//! # Ok::<(), listings_client::ListingsError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::ViewMode;
pub use state::AppState;
