use std::fmt;

/// `unique()` found more rows than the single one it promises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncorrectResultSize {
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for IncorrectResultSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Incorrect result size: expected {}, actual {}",
            self.expected, self.actual
        )
    }
}

impl std::error::Error for IncorrectResultSize {}

/// A column resolved to no property while strict mapping is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingFailure {
    /// The column that could not be resolved.
    pub column: String,
    /// Type name of the mapping target.
    pub target: &'static str,
}

impl fmt::Display for MappingFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Could not map the column `{}` to any property of {}",
            self.column, self.target
        )
    }
}

impl std::error::Error for MappingFailure {}
