use thiserror::Error;

/// Failures while turning text into a [`Map`](crate::Map).
#[derive(Debug, Error)]
pub enum InputFormatError {
    #[error("failed to read the map: {0}")]
    Io(#[from] std::io::Error),
    #[error("map has no rows")]
    Empty,
    #[error("row {row} is empty")]
    EmptyRow { row: usize },
    #[error("row {row} has width {found}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown cell {found:?} at row {row}, column {column}")]
    UnknownCell {
        row: usize,
        column: usize,
        found: char,
    },
}

/// Failure to parse a single row, before it is known which row it was.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("unknown cell {found:?} at column {column}")]
    UnknownCell { column: usize, found: char },
}

impl RowError {
    pub(crate) fn at(self, row: usize) -> InputFormatError {
        match self {
            RowError::UnknownCell { column, found } => {
                InputFormatError::UnknownCell { row, column, found }
            }
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidSlopeError {
    #[error("down step must be at least one")]
    ZeroDown,
    #[error("slope components cannot be negative: ({0}, {1})")]
    Negative(i64, i64),
    #[error("expected a slope like \"3,1\", got {0:?}")]
    Malformed(String),
}
