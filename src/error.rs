//! Error types for pendulum-plot.
//!
//! A missing input file is not an error; the loader reports it as "no data".
//! Everything here aborts the run.

use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Result type alias for pendulum-plot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    /// The input file exists but could not be opened.
    #[error("failed to open {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The input file is not a valid sample table.
    #[error("malformed CSV in {path}")]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The plotting backend rejected a drawing operation.
    #[error("drawing error: {0}")]
    Drawing(String),

    /// The rendered figure could not be encoded or written.
    #[error("failed to write image {path}")]
    Export {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl PlotError {
    pub fn malformed(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::MalformedInput {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn drawing(message: impl Into<String>) -> Self {
        Self::Drawing(message.into())
    }
}

impl<E> From<DrawingAreaErrorKind<E>> for PlotError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Self::Drawing(err.to_string())
    }
}
