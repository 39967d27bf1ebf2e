//! Monthly report flow: CSV export -> reduce -> compare -> assemble

use std::path::Path;

use crate::services::{CostReducer, DateBucketer, MonthlyComparator, ReportAssembler};
use crate::sources::{parse_amount, CsvExportSource, TabularSource};
use crate::types::{ComparisonRow, CostrepError, ReportConfig, ReportTable, Result};

pub fn run(file: &Path, config: &ReportConfig) -> Result<()> {
    let source = CsvExportSource::new(file);
    let table = build_report(&source, config)?;
    for line in ReportAssembler::render(&table) {
        println!("{}", line);
    }
    Ok(())
}

/// Build the month-over-month comparison table from a tabular export.
///
/// Export layout: row 0 is the service-name header ending in the total
/// column; row 1 is the grand-total row (useless for analytics, skipped);
/// every remaining row carries one calendar month, date cell first. The
/// comparison always runs over the two most recent month rows.
pub fn build_report(source: &dyn TabularSource, config: &ReportConfig) -> Result<ReportTable> {
    let mut rows = source.read_rows()?.into_iter();

    let service_names = rows
        .next()
        .ok_or_else(|| CostrepError::Parse("export has no header row".into()))?;
    let total_field = service_names
        .last()
        .cloned()
        .ok_or_else(|| CostrepError::Parse("header row has no columns".into()))?;

    let month_rows: Vec<Vec<String>> = rows.skip(1).collect();
    if month_rows.len() < 2 {
        return Err(CostrepError::Parse(
            "monthly comparison needs at least two month rows".into(),
        ));
    }

    let mut month_labels = Vec::with_capacity(month_rows.len());
    let mut observations = Vec::new();
    for (month_index, row) in month_rows.iter().enumerate() {
        let date_cell = row
            .first()
            .ok_or_else(|| CostrepError::Parse(format!("month row {} is empty", month_index)))?;
        let date = super::parse_date(date_cell)?;
        let (label, days) = DateBucketer::month_of(date);
        month_labels.push(format!("{} ({})", label, days));

        for (cell_index, cell) in row.iter().enumerate().skip(1) {
            let Some(service) = service_names.get(cell_index) else {
                eprintln!(
                    "[costrep] Warning: month row {} is wider than the header, ignoring extra cells",
                    month_index
                );
                break;
            };
            let amount = parse_amount(cell, config.strict_numeric)?;
            observations.push((month_index, service.clone(), amount));
        }
    }

    let reduced = CostReducer::reduce(observations, month_rows.len())?;
    let vectors = CostReducer::sorted_vectors(reduced);

    // Two-point comparison over the two most recent months
    let prev_index = month_labels.len() - 2;
    let curr_index = month_labels.len() - 1;

    let comparisons: Vec<ComparisonRow> = vectors
        .iter()
        .map(|v| MonthlyComparator::compare(&v.service, v.values[prev_index], v.values[curr_index]))
        .collect();

    let (pinned, body) = MonthlyComparator::rank(comparisons, &total_field, config);

    let header = vec![
        "Service".to_string(),
        month_labels[prev_index].clone(),
        month_labels[curr_index].clone(),
        "Increase Amount".to_string(),
        "%".to_string(),
    ];
    Ok(ReportAssembler::assemble_monthly(header, pinned, body))
}
