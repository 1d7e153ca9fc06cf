use thiserror::Error;

/// Errors surfaced while building or querying an answer set.
///
/// Malformed single tokens are NOT errors; they are recovered and
/// reported as [`FactDiagnostic`](crate::FactDiagnostic) values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Parser error: input contains {0} 'Answer:' markers; paste in one answer set at a time")]
    MultipleAnswerSets(usize),
    #[error("Parser error: invalid sort key '{0}', expected an argument index, 'last', or ''")]
    InvalidSortKey(String),
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
