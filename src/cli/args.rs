//! Command-line argument definitions.

use chrono::NaiveDate;
use clap::{ArgGroup, Parser, ValueEnum};

use crate::constants;
use crate::query::{FilterCriteria, NameFilter};

/// bnsearch - query the Australian Business Names register
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("name_filter")
        .required(true)
        .args(["business_name", "business_name_similar_to"]),
))]
pub struct Args {
    /// Initial date (DD/MM/YYYY) of a range of business registration dates
    #[arg(long = "registration_date_from", value_parser = parse_day_first)]
    pub registration_date_from: Option<NaiveDate>,

    /// Final date (DD/MM/YYYY) of a range of business registration dates
    #[arg(long = "registration_date_to", value_parser = parse_day_first)]
    pub registration_date_to: Option<NaiveDate>,

    /// Name of the business to be searched (exact match)
    #[arg(long = "business_name")]
    pub business_name: Option<String>,

    /// Text for a search on similar business names
    #[arg(long = "business_name_similar_to")]
    pub business_name_similar_to: Option<String>,

    /// Limit number of records in the results
    #[arg(long = "limit", default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: u32,

    /// Display format
    #[arg(long = "display_format", value_enum, default_value_t = DisplayFormat::Table)]
    pub display_format: DisplayFormat,
}

/// Rendering mode for the fetched records.
#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, Debug)]
pub enum DisplayFormat {
    /// Column-aligned markdown-style table.
    Table,
    /// Monthly registration-count line chart.
    Graph,
}

impl Args {
    /// Converts the parsed arguments into immutable [`FilterCriteria`].
    ///
    /// The argument group guarantees exactly one name flag is set, so the
    /// two optional flags collapse into a single tagged variant here.
    pub fn criteria(&self) -> FilterCriteria {
        let name = match (&self.business_name, &self.business_name_similar_to) {
            (Some(name), _) => Some(NameFilter::Exact(name.clone())),
            (None, Some(term)) => Some(NameFilter::SimilarTo(term.clone())),
            (None, None) => None,
        };

        FilterCriteria {
            registered_from: self.registration_date_from,
            registered_to: self.registration_date_to,
            name,
            limit: self.limit,
        }
    }
}

/// Parses a day-first `DD/MM/YYYY` calendar date.
fn parse_day_first(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, constants::DATE_FORMAT)
        .map_err(|err| format!("invalid date {raw:?} (expected DD/MM/YYYY): {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("bnsearch").chain(argv.iter().copied()))
    }

    #[test]
    fn test_exact_name_alone_is_accepted() {
        let args = parse(&["--business_name", "Acme"]).expect("should parse");
        assert_eq!(args.business_name.as_deref(), Some("Acme"));
        assert_eq!(args.limit, 10);
        assert_eq!(args.display_format, DisplayFormat::Table);
    }

    #[test]
    fn test_name_flags_are_mutually_exclusive() {
        let err = parse(&[
            "--business_name",
            "Acme",
            "--business_name_similar_to",
            "Acme",
        ])
        .expect_err("both name flags must be rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_one_name_flag_is_required() {
        let err = parse(&["--limit", "5"]).expect_err("missing name filter must be rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let err = parse(&["--business_name", "Acme", "--limit", "0"])
            .expect_err("limit 0 must be rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_dates_parse_day_first() {
        let args = parse(&[
            "--business_name",
            "Acme",
            "--registration_date_from",
            "05/01/2023",
        ])
        .expect("should parse");
        assert_eq!(
            args.registration_date_from,
            NaiveDate::from_ymd_opt(2023, 1, 5)
        );
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let err = parse(&[
            "--business_name",
            "Acme",
            "--registration_date_from",
            "2023-01-05",
        ])
        .expect_err("ISO dates must be rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_criteria_uses_similar_to_variant() {
        let args = parse(&["--business_name_similar_to", "plumb"]).expect("should parse");
        let criteria = args.criteria();
        assert!(matches!(
            criteria.name,
            Some(NameFilter::SimilarTo(ref term)) if term == "plumb"
        ));
    }

    #[test]
    fn test_display_format_graph() {
        let args =
            parse(&["--business_name", "Acme", "--display_format", "graph"]).expect("should parse");
        assert_eq!(args.display_format, DisplayFormat::Graph);
    }
}
