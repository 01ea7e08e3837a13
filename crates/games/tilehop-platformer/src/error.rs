/// Reasons a game cannot be constructed. Nothing fails once a game is running.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupError {
    EmptyLevel,
    EmptyRow(usize),
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    UnknownTile {
        row: usize,
        col: usize,
        ch: char,
    },
    ConfigParse(String),
    InvalidConfig(String),
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLevel => write!(f, "level has no rows"),
            Self::EmptyRow(row) => write!(f, "level row {row} has no tiles"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "level row {row} has {found} tiles, expected {expected}"
            ),
            Self::UnknownTile { row, col, ch } => {
                write!(f, "unknown tile {ch:?} at row {row}, column {col}")
            },
            Self::ConfigParse(e) => write!(f, "config parse error: {e}"),
            Self::InvalidConfig(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl std::error::Error for SetupError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_row() {
        let err = SetupError::RaggedRow {
            row: 2,
            expected: 20,
            found: 19,
        };
        assert_eq!(err.to_string(), "level row 2 has 19 tiles, expected 20");
    }
}
