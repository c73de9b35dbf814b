//! HTTP Client Factory
//!
//! Provides a factory function for building reqwest clients with a bounded
//! request timeout.

use std::time::Duration;

/// Build a `reqwest::Client` with the given request timeout.
///
/// The timeout covers the whole request, so a stalled backend surfaces as a
/// timeout error instead of hanging the calling operation.
pub fn build_http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("failed to build reqwest client")
}
