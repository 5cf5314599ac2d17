//! Single-shot data fetching from the datastore endpoint.
//!
//! One blocking GET per invocation, the SQL statement passed as the
//! `sql` query parameter. No retries, no pagination.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::constants;
use crate::error::Error;
use crate::record::BusinessRecord;

/// JSON envelope returned by the datastore on success.
#[derive(Debug, Deserialize)]
struct Envelope {
    result: EnvelopeResult,
}

#[derive(Debug, Deserialize)]
struct EnvelopeResult {
    records: Vec<BusinessRecord>,
}

/// Executes the query and returns the decoded Record Set.
///
/// # Errors
///
/// Returns [`Error::Http`] on transport failure, [`Error::Fetch`] when
/// the endpoint answers with a non-success status, and
/// [`Error::MalformedResponse`] when the body does not match the
/// expected `result.records` envelope.
pub fn fetch_records(config: &Config, sql: &str) -> Result<Vec<BusinessRecord>, Error> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(format!(
            "{}/{}",
            constants::APP_NAME,
            constants::APP_VERSION
        ))
        .build()?;

    debug!("GET {} sql={sql}", config.endpoint);
    let response = client.get(&config.endpoint).query(&[("sql", sql)]).send()?;

    let status = response.status();
    let body = response.text()?;
    if !status.is_success() {
        return Err(Error::Fetch {
            status: status.as_u16(),
            body: error_detail(&body),
        });
    }

    decode_records(&body)
}

/// Decodes the success envelope into the Record Set.
pub fn decode_records(body: &str) -> Result<Vec<BusinessRecord>, Error> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|err| Error::MalformedResponse(err.to_string()))?;
    Ok(envelope.result.records)
}

/// Extracts a diagnostic string from an error response body.
///
/// The endpoint normally answers with a JSON error payload; that is
/// re-serialized compactly. A non-JSON body is passed through as is.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .map_or_else(|_| body.to_string(), |value| value.to_string())
}
