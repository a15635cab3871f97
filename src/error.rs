//! Error type shared by the metric and the text ingestion layer.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between reading a matrix and producing a score.
#[derive(Error, Debug)]
pub enum ConcordanceError {
    /// The matrices are not both square, or their dimensions differ.
    #[error(
        "shape mismatch: reference is {}x{}, predicted is {}x{} (need two equal square matrices)",
        .reference.0, .reference.1, .predicted.0, .predicted.1
    )]
    ShapeMismatch {
        reference: (usize, usize),
        predicted: (usize, usize),
    },

    /// Fewer than three indices, so there is no triplet to score.
    #[error("degenerate input: dimension {n} has no triplets (need n >= 3)")]
    DegenerateInput { n: usize },

    /// Buffer length does not match the declared dimensions, or only one
    /// dimension is zero.
    #[error("buffer of {len} values cannot form a {rows}x{cols} matrix")]
    BufferSize { rows: usize, cols: usize, len: usize },

    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed csv input")]
    Csv(#[from] csv::Error),

    /// A field that is not a floating-point number. Line and column are 1-based.
    #[error("line {line}, column {column}: cannot parse {token:?} as a number")]
    Parse {
        line: u64,
        column: usize,
        token: String,
    },

    #[error("line {line}: expected {expected} values, found {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("input contains no matrix rows")]
    EmptyInput,

    #[error("a concordance worker thread panicked")]
    WorkerPanicked,
}

pub type Result<T> = std::result::Result<T, ConcordanceError>;
