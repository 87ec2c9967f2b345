#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("Lexer: unexpected character {character:?} at offset {offset}")]
    UnexpectedCharacter { character: char, offset: usize },

    #[error("Lexer: unterminated string, opening {delimiter:?} at offset {offset} is never closed")]
    UnterminatedString { delimiter: char, offset: usize },

    #[error("Lexer: integer literal {literal} at offset {offset} is out of range")]
    IntegerOutOfRange { literal: String, offset: usize },
}

impl LexerError {
    pub fn offset(&self) -> usize {
        match self {
            LexerError::UnexpectedCharacter { offset, .. }
            | LexerError::UnterminatedString { offset, .. }
            | LexerError::IntegerOutOfRange { offset, .. } => *offset,
        }
    }
}
