//! Business-name register record types.

use serde::Deserialize;

/// Column names of the register, in the order the query selects them.
pub const COLUMNS: [&str; 8] = [
    "BN_NAME",
    "BN_STATUS",
    "BN_REG_DT",
    "BN_CANCEL_DT",
    "BN_RENEW_DT",
    "BN_STATE_NUM",
    "BN_STATE_OF_REG",
    "BN_ABN",
];

/// One business-name registration entry.
///
/// An immutable snapshot returned by the datastore. The cancellation and
/// renewal dates are nullable at the source; the remaining fields are
/// kept optional as well so a sparse row decodes instead of failing.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessRecord {
    /// Registered business name.
    #[serde(rename = "BN_NAME")]
    pub name: Option<String>,
    /// Registration status (e.g. `Registered`, `Cancelled`).
    #[serde(rename = "BN_STATUS")]
    pub status: Option<String>,
    /// Registration date, day-first `DD/MM/YYYY`.
    #[serde(rename = "BN_REG_DT")]
    pub registered: Option<String>,
    /// Cancellation date, if the registration was cancelled.
    #[serde(rename = "BN_CANCEL_DT")]
    pub cancelled: Option<String>,
    /// Most recent renewal date, if any.
    #[serde(rename = "BN_RENEW_DT")]
    pub renewed: Option<String>,
    /// State registration number.
    #[serde(rename = "BN_STATE_NUM")]
    pub state_number: Option<String>,
    /// State of registration.
    #[serde(rename = "BN_STATE_OF_REG")]
    pub state_of_registration: Option<String>,
    /// Australian Business Number.
    #[serde(rename = "BN_ABN")]
    pub abn: Option<String>,
}

impl BusinessRecord {
    /// Flattens the record into table cells, in [`COLUMNS`] order.
    ///
    /// Null fields become empty cells.
    pub fn row(&self) -> [&str; 8] {
        [
            self.name.as_deref().unwrap_or(""),
            self.status.as_deref().unwrap_or(""),
            self.registered.as_deref().unwrap_or(""),
            self.cancelled.as_deref().unwrap_or(""),
            self.renewed.as_deref().unwrap_or(""),
            self.state_number.as_deref().unwrap_or(""),
            self.state_of_registration.as_deref().unwrap_or(""),
            self.abn.as_deref().unwrap_or(""),
        ]
    }
}
