//! Reading and writing return matrices as headerless CSV.

use crate::error::{DataError, Result};
use frontier_matrix::Matrix;
use std::path::Path;

/// Read a headerless CSV file of numeric rows into a matrix.
///
/// Every row must carry the same number of comma-separated fields as the
/// first row, and every field must parse as `f64`.
///
/// # Errors
/// [`DataError::RaggedRow`] on a field-count mismatch, [`DataError::Parse`]
/// on an unparsable field, [`DataError::Empty`] for a file without data
/// rows.
pub fn read_returns<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut data = Vec::new();
    let mut cols = None;
    let mut rows = 0;
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let row = idx + 1;
        let expected = *cols.get_or_insert(record.len());
        if record.len() != expected {
            return Err(DataError::RaggedRow {
                row,
                expected,
                actual: record.len(),
            });
        }
        for (field, value) in record.iter().enumerate() {
            let parsed = value.trim().parse::<f64>().map_err(|_| DataError::Parse {
                row,
                field,
                value: value.to_string(),
            })?;
            data.push(parsed);
        }
        rows += 1;
    }

    let cols = cols.ok_or(DataError::Empty)?;
    Ok(Matrix::from_vec(data, rows, cols)?)
}

/// Write a matrix as headerless CSV, one line per row, comma-joined fields
/// in default float formatting. Creates or truncates the file at `path`.
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &Matrix) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for i in 0..matrix.rows() {
        let row = matrix.row(i)?;
        writer.write_record(row.as_slice().iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}
