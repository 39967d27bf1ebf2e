//! Structural composition of report tables

use crate::types::{ReportConfig, ReportTable, ServiceCostVector};

/// Separator between the pinned total row and the ranked body
const SEPARATOR_CELL: &str = "-";

/// Assembles final report tables from already-computed pieces.
/// Purely structural; all numbers arrive pre-formatted or get the
/// uniform amount precision applied here.
pub struct ReportAssembler;

impl ReportAssembler {
    /// Monthly layout: header, pinned total row, one-cell separator,
    /// then the ranked body.
    pub fn assemble_monthly(
        header: Vec<String>,
        pinned: Option<Vec<String>>,
        body: Vec<Vec<String>>,
    ) -> ReportTable {
        let mut table = Vec::with_capacity(body.len() + 3);
        table.push(header);
        if let Some(total_row) = pinned {
            table.push(total_row);
        }
        table.push(vec![SEPARATOR_CELL.to_string()]);
        table.extend(body);
        table
    }

    /// Weekly layout: header of bucket labels, then one row per service.
    /// With `abridge_empty_rows`, services whose vector sums to exactly
    /// zero are suppressed entirely.
    pub fn assemble_weekly(
        header: Vec<String>,
        vectors: &[ServiceCostVector],
        config: &ReportConfig,
    ) -> ReportTable {
        let mut table = Vec::with_capacity(vectors.len() + 1);
        table.push(header);

        for vector in vectors {
            if config.abridge_empty_rows && vector.total() == 0.0 {
                continue;
            }

            let mut row = Vec::with_capacity(vector.values.len() + 1);
            row.push(vector.service.clone());
            for value in &vector.values {
                row.push(format!("{:.*}", config.decimal_precision, value));
            }
            table.push(row);
        }

        table
    }

    /// Render a table as ", "-joined lines for the output sink
    pub fn render(table: &ReportTable) -> Vec<String> {
        table.iter().map(|row| row.join(", ")).collect()
    }
}
