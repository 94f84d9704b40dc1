//! Tracing subscriber setup.
//!
//! Every layer of the crate logs through `tracing` macros and spans; this
//! module installs the subscriber that decides what gets printed. Output goes
//! to stderr so it never interleaves with the terminal front end's stdout.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust
//! use listings_client::observability::init_tracing;
//! use listings_client::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("client initialized");
//! ```

mod init;

pub use init::{init_tracing, resolve_filter};
