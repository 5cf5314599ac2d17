//! Application-wide constants and configuration defaults.
//!
//! This module defines all static values used throughout bnsearch,
//! including the datastore endpoint, dataset identity, date formats,
//! chart geometry, and user-facing messages.

// === Application Metadata ===

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// === Datastore Endpoint ===

/// Default SQL-over-HTTP endpoint of the data.gov.au datastore.
pub const DATASTORE_ENDPOINT: &str = "https://data.gov.au/data/api/3/action/datastore_search_sql";
/// Resource identifier of the ASIC Business Names register dataset.
pub const DATASET_ID: &str = "55ad4b1c-5eeb-44ea-8b29-d410da431be3";
/// Timeout for the datastore request in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 10;

// === Date Formats ===

/// Day-first calendar date format used by the register (chrono syntax).
pub const DATE_FORMAT: &str = "%d/%m/%Y";
/// The same day-first format in the datastore's `TO_DATE` syntax.
pub const SQL_DATE_FORMAT: &str = "DD/MM/YYYY";

// === Configuration ===

/// Subdirectory of the platform config dir holding `config.toml`.
pub const CONFIG_DIR_NAME: &str = "bnsearch";
/// Name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// === Chart Geometry & Labels ===

/// Width of the off-screen chart canvas in terminal cells.
pub const CHART_WIDTH: u16 = 80;
/// Height of the off-screen chart canvas in terminal cells.
pub const CHART_HEIGHT: u16 = 20;
/// Chart title.
pub const CHART_TITLE: &str = "Business Registration Trend Over Time";
/// X-axis title.
pub const CHART_X_TITLE: &str = "Time (Month-Year)";
/// Y-axis title.
pub const CHART_Y_TITLE: &str = "Number of Registrations";

// === Messages ===

/// Printed by graph mode when the query matched no records.
pub const MSG_NO_CHART_DATA: &str = "No registration records to chart.";
