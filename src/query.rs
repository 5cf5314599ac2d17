//! SQL query construction for the datastore endpoint.
//!
//! The datastore speaks a single SQL-like query string passed over HTTP.
//! User-supplied text is escaped before it is embedded: single quotes are
//! doubled and, inside `ILIKE` patterns, the `\`, `%` and `_`
//! metacharacters are backslash-escaped. Dates and the row limit are
//! typed, so they cannot carry query syntax.

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::constants;

/// Name filter for one query.
///
/// Exactly one of the two CLI name flags maps to a variant here, so a
/// criteria value can never hold both an exact and a substring filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameFilter {
    /// Case-insensitive, edge-whitespace-insensitive exact match.
    Exact(String),
    /// Case-insensitive substring match.
    SimilarTo(String),
}

/// Immutable set of user-chosen constraints for one invocation.
#[derive(Debug, Clone)]
pub struct FilterCriteria {
    /// Lower bound on the registration date, inclusive.
    pub registered_from: Option<NaiveDate>,
    /// Upper bound on the registration date, inclusive.
    pub registered_to: Option<NaiveDate>,
    /// Name filter, if any.
    pub name: Option<NameFilter>,
    /// Maximum number of rows to request. Always >= 1.
    pub limit: u32,
}

/// Server-side expression normalizing a stored name: trim edge
/// whitespace, then upper-case.
const NORMALIZED_NAME: &str = r#"REGEXP_REPLACE(UPPER("BN_NAME"), '^\s*(.*?)\s*$', '\1')"#;

/// Builds the datastore SQL statement for the given criteria.
///
/// The `WHERE 1=1` anchor lets every optional clause append with `AND`.
pub fn build(criteria: &FilterCriteria) -> String {
    let mut sql = format!(
        "SELECT \"BN_NAME\", \"BN_STATUS\", \"BN_REG_DT\", \"BN_CANCEL_DT\", \
         \"BN_RENEW_DT\", \"BN_STATE_NUM\", \"BN_STATE_OF_REG\", \"BN_ABN\" \
         from \"{}\" WHERE 1=1",
        constants::DATASET_ID
    );

    if let Some(from) = criteria.registered_from {
        push_date_clause(&mut sql, ">=", from);
    }
    if let Some(to) = criteria.registered_to {
        push_date_clause(&mut sql, "<=", to);
    }

    match &criteria.name {
        Some(NameFilter::Exact(name)) => {
            let needle = escape_literal(&name.trim().to_uppercase());
            let _ = write!(sql, " AND {NORMALIZED_NAME} = '{needle}'");
        }
        Some(NameFilter::SimilarTo(term)) => {
            let pattern = escape_like(&term.to_uppercase());
            let _ = write!(sql, " AND {NORMALIZED_NAME} ILIKE '%{pattern}%'");
        }
        None => {}
    }

    let _ = write!(sql, " LIMIT {}", criteria.limit);
    sql
}

fn push_date_clause(sql: &mut String, op: &str, date: NaiveDate) {
    let formatted = date.format(constants::DATE_FORMAT);
    let sql_format = constants::SQL_DATE_FORMAT;
    let _ = write!(
        sql,
        " AND TO_DATE(\"BN_REG_DT\", '{sql_format}') {op} TO_DATE('{formatted}', '{sql_format}')"
    );
}

/// Escapes a string for embedding in a single-quoted SQL literal.
fn escape_literal(raw: &str) -> String {
    raw.replace('\'', "''")
}

/// Escapes a string for embedding in a single-quoted `ILIKE` pattern.
///
/// Backslash first, so escape characters introduced for `%` and `_` are
/// not themselves re-escaped.
fn escape_like(raw: &str) -> String {
    let escaped = raw
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    escape_literal(&escaped)
}
