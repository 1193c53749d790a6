//! Error types for board cell addressing.

use std::fmt;

/// Error type for cell construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellError {
    /// Linear index out of bounds (must be 0-63)
    IndexOutOfBounds { index: usize },
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellError::IndexOutOfBounds { index } => {
                write!(f, "Cell index {index} out of bounds (must be 0-63)")
            }
            CellError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            CellError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            CellError::InvalidNotation { notation } => {
                write!(f, "Invalid cell notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for CellError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_bounds() {
        let err = CellError::IndexOutOfBounds { index: 64 };
        assert!(err.to_string().contains("64"));
        assert!(err.to_string().contains("0-63"));
    }

    #[test]
    fn test_row_out_of_bounds() {
        let err = CellError::RowOutOfBounds { row: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_invalid_notation() {
        let err = CellError::InvalidNotation {
            notation: "z9".to_string(),
        };
        assert!(err.to_string().contains("z9"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = CellError::IndexOutOfBounds { index: 70 };
        let err2 = CellError::IndexOutOfBounds { index: 70 };
        assert_eq!(err1, err2);
        assert_eq!(err1.clone(), err2);
    }
}
