//! Monthly registration-trend chart rendering.
//!
//! Registration dates are bucketed by calendar month and the counts are
//! drawn as a line chart with ratatui's `Chart` widget. The tool draws
//! once and exits, so the widget renders into an off-screen buffer that
//! is flushed to stdout as plain text instead of driving a terminal
//! backend.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType, Widget};

use crate::constants;
use crate::error::Error;
use crate::record::BusinessRecord;

/// Renders the Record Set as a monthly registration-count line chart.
///
/// An empty Record Set is a valid outcome, not a failure: the fixed
/// no-data message is returned instead of a chart.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] when a record's registration date is
/// missing or not a day-first calendar date.
pub fn render(records: &[BusinessRecord]) -> Result<String, Error> {
    if records.is_empty() {
        return Ok(format!("{}\n", constants::MSG_NO_CHART_DATA));
    }
    let counts = monthly_counts(records)?;
    Ok(draw(&counts))
}

/// Buckets records by registration month, chronologically.
///
/// Returns `(label, count)` pairs where the label is the `YYYY-MM` form
/// of the month. The `BTreeMap` key `(year, month)` gives chronological
/// order regardless of the order records arrived in.
pub fn monthly_counts(records: &[BusinessRecord]) -> Result<Vec<(String, u64)>, Error> {
    let mut buckets: BTreeMap<(i32, u32), u64> = BTreeMap::new();

    for record in records {
        let raw = record.registered.as_deref().ok_or_else(|| Error::InvalidDate {
            value: "<missing>".to_string(),
            reason: "record has no registration date".to_string(),
        })?;
        let date = NaiveDate::parse_from_str(raw, constants::DATE_FORMAT).map_err(|err| {
            Error::InvalidDate {
                value: raw.to_string(),
                reason: err.to_string(),
            }
        })?;
        *buckets.entry((date.year(), date.month())).or_insert(0) += 1;
    }

    Ok(buckets
        .into_iter()
        .map(|((year, month), count)| (format!("{year:04}-{month:02}"), count))
        .collect())
}

/// Draws the counts into an off-screen buffer and dumps it as text.
///
/// X is the bucket index with the month labels as ticks, Y is the count.
#[allow(clippy::cast_precision_loss)]
fn draw(counts: &[(String, u64)]) -> String {
    let points: Vec<(f64, f64)> = counts
        .iter()
        .enumerate()
        .map(|(index, (_, count))| (index as f64, *count as f64))
        .collect();

    let max_count = counts.iter().map(|(_, count)| *count).max().unwrap_or(0).max(1);
    // A one-bucket chart still needs a non-degenerate x range.
    let x_max = counts.len().saturating_sub(1).max(1) as f64;

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let x_labels: Vec<String> = counts.iter().map(|(label, _)| label.clone()).collect();
    let y_labels = vec!["0".to_string(), max_count.to_string()];

    let chart = Chart::new(vec![dataset])
        .block(Block::bordered().title(constants::CHART_TITLE))
        .x_axis(
            Axis::default()
                .title(constants::CHART_X_TITLE)
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(constants::CHART_Y_TITLE)
                .bounds([0.0, max_count as f64])
                .labels(y_labels),
        );

    let area = Rect::new(0, 0, constants::CHART_WIDTH, constants::CHART_HEIGHT);
    let mut buffer = Buffer::empty(area);
    chart.render(area, &mut buffer);
    buffer_to_string(&buffer, area)
}

/// Flattens a rendered buffer into newline-separated text.
fn buffer_to_string(buffer: &Buffer, area: Rect) -> String {
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let symbol = buffer.cell((x, y)).map_or(" ", ratatui::buffer::Cell::symbol);
            line.push_str(symbol);
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated(registered: &str) -> BusinessRecord {
        serde_json::from_str(&format!(
            r#"{{"BN_NAME": "ACME", "BN_STATUS": "Registered", "BN_REG_DT": "{registered}"}}"#
        ))
        .expect("fixture row should decode")
    }

    #[test]
    fn test_groups_by_month_chronologically() {
        let records = vec![dated("05/01/2023"), dated("20/01/2023"), dated("02/02/2023")];
        let counts = monthly_counts(&records).expect("dates should parse");
        assert_eq!(
            counts,
            vec![("2023-01".to_string(), 2), ("2023-02".to_string(), 1)]
        );
    }

    #[test]
    fn test_ordering_ignores_arrival_order() {
        let records = vec![dated("01/03/2024"), dated("15/11/2023"), dated("02/03/2024")];
        let counts = monthly_counts(&records).expect("dates should parse");
        assert_eq!(
            counts,
            vec![("2023-11".to_string(), 1), ("2024-03".to_string(), 2)]
        );
    }

    #[test]
    fn test_year_boundary_buckets_stay_separate() {
        let records = vec![dated("31/12/2022"), dated("01/01/2023")];
        let counts = monthly_counts(&records).expect("dates should parse");
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].0, "2022-12");
        assert_eq!(counts[1].0, "2023-01");
    }

    #[test]
    fn test_malformed_date_is_a_render_error() {
        let records = vec![dated("2023-01-05")];
        let err = monthly_counts(&records).expect_err("ISO date must fail");
        assert!(matches!(err, Error::InvalidDate { ref value, .. } if value == "2023-01-05"));
    }

    #[test]
    fn test_missing_date_is_a_render_error() {
        let record: BusinessRecord =
            serde_json::from_str(r#"{"BN_NAME": "ACME"}"#).expect("fixture row should decode");
        let err = monthly_counts(&[record]).expect_err("missing date must fail");
        assert!(matches!(err, Error::InvalidDate { ref value, .. } if value == "<missing>"));
    }

    #[test]
    fn test_empty_record_set_prints_no_data_message() {
        let output = render(&[]).expect("empty set is not an error");
        assert_eq!(output, format!("{}\n", constants::MSG_NO_CHART_DATA));
    }

    #[test]
    fn test_chart_output_carries_title_and_labels() {
        let records = vec![dated("05/01/2023"), dated("20/01/2023"), dated("02/02/2023")];
        let output = render(&records).expect("chart should render");
        assert!(output.contains(constants::CHART_TITLE));
        assert!(output.contains("2023-01"));
        assert!(output.contains("2023-02"));
        assert_eq!(output.lines().count(), usize::from(constants::CHART_HEIGHT));
    }

    #[test]
    fn test_single_bucket_chart_renders() {
        let output = render(&[dated("05/01/2023")]).expect("single bucket should render");
        assert!(output.contains(constants::CHART_TITLE));
    }
}
