//! Infrastructure layer for the environment the controller runs in.
//!
//! This module provides the ports through which application actions reach the
//! outside world, together with in-process implementations used by the
//! terminal front end and by tests.
//!
//! - [`history`]: navigation history port and an in-memory history stack
//! - [`interaction`]: alert/confirm/scroll port with terminal and recording
//!   implementations

pub mod history;
pub mod interaction;

pub use history::{listing_id_from_fragment, HistoryEntry, HistoryState, MemoryHistory, NavigationPort};
pub use interaction::{Interaction, RecordingInteraction, TerminalInteraction};
