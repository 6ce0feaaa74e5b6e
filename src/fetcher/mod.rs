//! Fetcher module for retrieving remote plain-text documents
//!
//! One GET per call, bounded by the configured timeouts. Failures surface
//! immediately as [`FetchError`](crate::FetchError); there is no retry.

mod client;

pub use client::{build_http_client, fetch_text, format_user_agent};
