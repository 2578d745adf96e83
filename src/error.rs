// src/error.rs

use thiserror::Error;

use crate::process::Shape;

/// Why a batch dataset produced no output. Each variant maps to one guarded step.
#[derive(Debug, Error)]
pub enum Skip {
    #[error("error downloading: {0:#}")]
    Download(anyhow::Error),

    #[error("error decompressing: {0}")]
    Decompress(#[source] std::io::Error),

    #[error("error parsing: {0:#}")]
    Parse(anyhow::Error),

    #[error("empty dataframe")]
    Empty,
}

/// Hard failures of the single-source conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("expected sheets {expected:?}, found {found:?}")]
    SheetMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("shape mismatch: converted {converted}, read back {read_back}")]
    ShapeMismatch { converted: Shape, read_back: Shape },
}
