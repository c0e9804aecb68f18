//! Error types for board diagram parsing.

/// Errors that occur when parsing a board diagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    /// The diagram does not have exactly 9 lines (8 rows plus side to move).
    #[error("expected 9 diagram lines, found {found}")]
    WrongLineCount {
        /// Number of lines found.
        found: usize,
    },
    /// A row describes more or fewer than 8 squares.
    #[error("row {row} describes {length} squares, expected 8")]
    BadRowLength {
        /// One-based rank number as written in the diagram.
        row: u8,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in a row.
    #[error("invalid cell character: '{character}'")]
    InvalidCell {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move line is not "x" or "o".
    #[error("invalid side to move: \"{found}\"")]
    InvalidTurn {
        /// The invalid side-to-move string.
        found: String,
    },
}

#[cfg(test)]
mod tests {
    use super::ParseBoardError;

    #[test]
    fn display_messages() {
        let err = ParseBoardError::WrongLineCount { found: 4 };
        assert_eq!(format!("{err}"), "expected 9 diagram lines, found 4");

        let err = ParseBoardError::InvalidCell { character: 'q' };
        assert_eq!(format!("{err}"), "invalid cell character: 'q'");
    }
}
