use lexer::TokenKind;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("Parser: expected {expected}, found {found} at offset {offset}")]
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
        offset: usize,
    },

    #[error("Parser: expected {expected}, found end of input")]
    UnexpectedEnd { expected: &'static str },
}

impl ParserError {
    /// Character offset of the offending token, if there was one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParserError::UnexpectedToken { offset, .. } => Some(*offset),
            ParserError::UnexpectedEnd { .. } => None,
        }
    }
}
