//! Actions representing side effects to be executed by the controller.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or worker
//! completions. Actions bridge pure state transitions and effectful operations
//! like HTTP requests, history pushes and user alerts.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The
//! [`Controller`](crate::controller::Controller) executes them in order.
//!
//! # Example
//!
//! ```rust
//! use listings_client::app::Action;
//! use listings_client::infrastructure::HistoryEntry;
//! use listings_client::worker::WorkerMessage;
//!
//! let actions = vec![
//!     Action::PostToWorker(WorkerMessage::FetchSubscriptions),
//!     Action::PushHistory(HistoryEntry::detail(7)),
//!     Action::ScrollToTop,
//! ];
//! ```

use super::handler::Event;
use crate::infrastructure::HistoryEntry;
use crate::worker::WorkerMessage;

/// Side effects requested by the event handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hands a request to the worker. Its completion re-enters the handler as
    /// [`Event::WorkerResponse`].
    PostToWorker(WorkerMessage),

    /// Pushes a new navigation history entry.
    PushHistory(HistoryEntry),

    /// Shows a blocking notification to the user.
    Alert(String),

    /// Asks the user for confirmation and dispatches `on_confirm` only if
    /// they accept. Declining does nothing.
    Confirm {
        /// Question shown to the user.
        message: String,
        /// Event dispatched after the user accepts.
        on_confirm: Box<Event>,
    },

    /// Scrolls the content viewport to the top.
    ScrollToTop,
}
