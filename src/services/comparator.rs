//! Month-over-month comparison and ranking

use crate::types::{ComparisonRow, ReportConfig, SortKey};

// Cell layout of a monthly body row: service, prev, curr, delta, rate
const DELTA_CELL: usize = 3;
const RATE_CELL: usize = 4;

/// Two-point comparator for the monthly report.
///
/// Deliberately limited to a previous/current pair; it does not
/// generalize to N-point trends.
pub struct MonthlyComparator;

impl MonthlyComparator {
    /// Compare one service's two month totals.
    ///
    /// `rate_pct` is `curr / prev * 100`, normalized to `0.0` whenever
    /// `prev` is zero. That hides a genuine jump from zero, but it is the
    /// established report behavior; treat it as a documented limitation.
    pub fn compare(service: &str, prev: f64, curr: f64) -> ComparisonRow {
        let rate_pct = if prev == 0.0 {
            0.0
        } else {
            curr / prev * 100.0
        };

        ComparisonRow {
            service: service.to_string(),
            prev_cost: prev,
            curr_cost: curr,
            delta: curr - prev,
            rate_pct,
        }
    }

    /// Format an amount field with the configured precision
    pub fn format_amount(value: f64, precision: usize) -> String {
        format!("{:.*}", precision, value)
    }

    /// Format a percentage: always two decimals plus a literal `%`
    pub fn format_rate(value: f64) -> String {
        format!("{:.2}%", value)
    }

    /// Render a comparison as report cells
    pub fn to_cells(row: &ComparisonRow, precision: usize) -> Vec<String> {
        vec![
            row.service.clone(),
            Self::format_amount(row.prev_cost, precision),
            Self::format_amount(row.curr_cost, precision),
            Self::format_amount(row.delta, precision),
            Self::format_rate(row.rate_pct),
        ]
    }

    /// Split out the pinned total row and rank the rest.
    ///
    /// The service matching `total_field` is never sorted; it is returned
    /// separately for the assembler to pin. Remaining rows sort descending
    /// by the selected key, stably, with no secondary tie-break. The key is
    /// read back from the formatted cells, so ranking sees exactly the
    /// rounded values the report prints.
    pub fn rank(
        rows: Vec<ComparisonRow>,
        total_field: &str,
        config: &ReportConfig,
    ) -> (Option<Vec<String>>, Vec<Vec<String>>) {
        let mut pinned = None;
        let mut body = Vec::new();

        for row in rows {
            let cells = Self::to_cells(&row, config.decimal_precision);
            if row.service == total_field {
                pinned = Some(cells);
            } else {
                body.push(cells);
            }
        }

        body.sort_by(|a, b| {
            let prev = Self::sort_value(b, config.sort_key);
            let next = Self::sort_value(a, config.sort_key);
            prev.total_cmp(&next)
        });

        (pinned, body)
    }

    /// Ranking key for one rendered row; unparseable cells sort as 0.0
    fn sort_value(cells: &[String], key: SortKey) -> f64 {
        let cell = match key {
            SortKey::Amount => cells[DELTA_CELL].as_str(),
            SortKey::Rate => cells[RATE_CELL].trim_end_matches('%'),
        };
        cell.parse::<f64>().unwrap_or(0.0)
    }
}
