//! Background worker for listings API requests.
//!
//! This module implements the request side of the application loop: the event
//! handler never awaits network calls itself, it emits messages that the worker
//! resolves into completion responses.
//!
//! # Architecture
//!
//! - `messages`: Request/completion protocol types
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::ApiWorker;
pub use messages::{WorkerMessage, WorkerResponse};
