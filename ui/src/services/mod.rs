//! Infrastructure Services
//!
//! - **client**: HTTP client for the create-link, submit-credentials and fetch-data exchanges
//! - **config**: API base URL and endpoint paths
//!
//! The services are WASM-first: `reqwest` uses the browser fetch API on
//! wasm32 and a native transport elsewhere, which is what the tests use.

pub mod client;
pub mod config;
