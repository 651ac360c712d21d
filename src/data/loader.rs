use std::fs::File;
use std::path::Path;

use log::debug;

use super::model::{Point, PointDataset};
use crate::error::{PlotError, Result};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a point dataset from a CSV file, whatever its extension.
///
/// Layout: header row with column names, one point per row. Only `x` and `y`
/// are read; every other column is ignored.
pub fn load_file(path: &Path) -> Result<PointDataset> {
    let file = File::open(path).map_err(|e| PlotError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| csv_error(path, e, "reading CSV headers"))?;
    for col in ["x", "y"] {
        if !headers.iter().any(|h| h == col) {
            return Err(PlotError::data_format(
                path,
                format!("CSV missing '{col}' column"),
            ));
        }
    }

    let mut points = Vec::new();
    for (row_no, result) in reader.deserialize::<Point>().enumerate() {
        let point = result.map_err(|e| csv_error(path, e, &format!("CSV row {row_no}")))?;
        points.push(point);
    }

    debug!("loaded {} points from {}", points.len(), path.display());
    Ok(PointDataset::from_points(points))
}

/// I/O failures stay I/O failures; everything else the CSV reader reports is
/// a format problem.
fn csv_error(path: &Path, err: csv::Error, what: &str) -> PlotError {
    if err.is_io_error() {
        match err.into_kind() {
            csv::ErrorKind::Io(io) => PlotError::io(path, io),
            other => PlotError::data_format(path, format!("{what}: {other:?}")),
        }
    } else {
        PlotError::data_format(path, format!("{what}: {err}"))
    }
}
