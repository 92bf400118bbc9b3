use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::dataset::Dataset;
use crate::core::derive::augment_with_derived_metrics;
use crate::core::row::{Field, Row};
use crate::error::DashResult;

/// Loads one scenario dataset from CSV text.
///
/// The `period` column is required per row (blank-period rows are dropped);
/// recognized series columns are parsed as numbers, with unparseable cells
/// treated as absent. Unrecognized columns survive verbatim in `Row::extra`.
/// Derived columns supplied by the file are ingested too: the augmentation
/// pass overwrites them only where recomputation yields a number, so supplied
/// values survive exactly where the raw data cannot reproduce them.
pub fn dataset_from_reader<R: Read>(reader: R) -> DashResult<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    for header in headers.iter() {
        if Field::from_column(header).is_some_and(Field::is_derived) {
            warn!(
                column = header,
                "input file supplies a derived column; recomputed values take precedence"
            );
        }
    }

    let mut rows: Vec<Row> = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let mut row = Row::default();
        for (header, cell) in headers.iter().zip(record.iter()) {
            if header == "period" {
                row.period = cell.to_owned();
                continue;
            }
            match Field::from_column(header) {
                Some(field) => {
                    if let Ok(value) = cell.parse::<f64>() {
                        row.set(field, Some(value));
                    }
                }
                None => {
                    if !cell.is_empty() {
                        row.extra.insert(header.to_owned(), cell.to_owned());
                    }
                }
            }
        }
        rows.push(row);
    }

    let mut dataset = Dataset::from_rows(rows);
    dataset.sort_by_period();
    augment_with_derived_metrics(&mut dataset);
    debug!(rows = dataset.len(), "scenario dataset loaded");
    Ok(dataset)
}

/// Loads one scenario dataset from a CSV file on disk.
pub fn dataset_from_path(path: impl AsRef<Path>) -> DashResult<Dataset> {
    let file = File::open(path.as_ref())?;
    dataset_from_reader(file)
}
