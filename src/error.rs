use std::path::{Path, PathBuf};

use thiserror::Error;

// ---------------------------------------------------------------------------
// PlotError – the two ways a run can fail
// ---------------------------------------------------------------------------

/// Every failure of the load → render → save pipeline.
#[derive(Debug, Error)]
pub enum PlotError {
    /// File not found, unreadable, or output path not writable.
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Required columns missing, non-numeric values, or an unreadable layout.
    #[error("bad data in {}: {reason}", .path.display())]
    DataFormat { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, PlotError>;

impl PlotError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        PlotError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn data_format(path: &Path, reason: impl Into<String>) -> Self {
        PlotError::DataFormat {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, PlotError::Io { .. })
    }

    pub fn is_data_format(&self) -> bool {
        matches!(self, PlotError::DataFormat { .. })
    }
}
