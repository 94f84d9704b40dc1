//! Remote listings service access.
//!
//! # Modules
//!
//! - `backend`: [`ListingsBackend`] trait, one method per endpoint
//! - `http`: [`HttpBackend`], the `reqwest` implementation

pub mod backend;
pub mod http;

pub use backend::ListingsBackend;
pub use http::HttpBackend;
