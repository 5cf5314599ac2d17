//! Error kinds for the query pipeline.
//!
//! Distinguishes configuration, transport, fetch, decode and render
//! failures so callers and tests can assert on the kind rather than on
//! message text. Usage errors never reach this type; clap reports them
//! before any other work happens.

use thiserror::Error;

/// Everything that can go wrong after argument parsing.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file exists but is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The HTTP request itself failed (DNS, TLS, timeout, ...).
    #[error("network request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("datastore returned HTTP {status}: {body}")]
    Fetch {
        /// HTTP status code of the response.
        status: u16,
        /// Parsed JSON error payload, or the raw body when not JSON.
        body: String,
    },

    /// The response body did not match the `result.records` envelope.
    #[error("unexpected response shape: {0}")]
    MalformedResponse(String),

    /// A record's registration date is missing or not day-first.
    #[error("cannot chart registration date {value:?}: {reason}")]
    InvalidDate {
        /// The offending field value, or `"<missing>"`.
        value: String,
        /// Why the value could not be parsed.
        reason: String,
    },
}
