use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use simbench_core::{ErrorInfo, ParamValue, SweepError};

fn table_error(code: &str, path: &Path, err: impl ToString) -> SweepError {
    SweepError::Table(
        ErrorInfo::new(code, "result table operation failed")
            .with_context("path", path.display().to_string())
            .with_hint(err.to_string()),
    )
}

/// Writes one parameter's (value, measurement) rows, truncating any prior
/// table at the path.
///
/// Rows are emitted in input order, header-less, comma-delimited and
/// newline-terminated; writing the same rows twice yields byte-identical
/// artifacts.
pub fn write_table(
    path: &Path,
    values: &[ParamValue],
    measurements: &[f64],
) -> Result<(), SweepError> {
    if values.len() != measurements.len() {
        return Err(SweepError::Table(
            ErrorInfo::new(
                "table-shape",
                "value and measurement columns differ in length",
            )
            .with_context("path", path.display().to_string())
            .with_context("values", values.len().to_string())
            .with_context("measurements", measurements.len().to_string()),
        ));
    }
    let file = File::create(path).map_err(|err| table_error("table-create", path, err))?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));
    for (value, seconds) in values.iter().zip(measurements) {
        writer
            .write_record([value.to_string(), seconds.to_string()])
            .map_err(|err| table_error("table-row", path, err))?;
    }
    writer
        .flush()
        .map_err(|err| table_error("table-flush", path, err))?;
    Ok(())
}

/// Reads a table back as raw string cells, row order preserved.
pub fn read_table(path: &Path) -> Result<Vec<(String, String)>, SweepError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|err| table_error("table-open", path, err))?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| table_error("table-record", path, err))?;
        rows.push((
            record.get(0).unwrap_or_default().to_string(),
            record.get(1).unwrap_or_default().to_string(),
        ));
    }
    Ok(rows)
}
