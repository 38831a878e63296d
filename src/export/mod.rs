mod fs_utils;
mod writers;

use crate::errors::{AppError, AppResult};
use crate::models::Trip;
use crate::ui::messages::{success, warning};
use clap::ValueEnum;
use fs_utils::ensure_writable;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write `trips` (newest first) to `file`.
///
/// - `file` must be an absolute path
/// - an existing file is replaced only with `force` or after confirmation
///
/// Returns the number of exported trips.
pub fn export_trips(
    trips: &[Trip],
    format: ExportFormat,
    file: &str,
    force: bool,
) -> AppResult<usize> {
    let path = Path::new(file);

    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "Output file path must be absolute: {file}"
        )));
    }

    ensure_writable(path, force)?;

    if trips.is_empty() {
        warning("No trips to export.");
        return Ok(0);
    }

    match format {
        ExportFormat::Csv => writers::write_csv(path, trips)?,
        ExportFormat::Json => writers::write_json(path, trips)?,
    }

    success(format!(
        "{} export completed: {}",
        format.as_str().to_uppercase(),
        path.display()
    ));
    Ok(trips.len())
}
