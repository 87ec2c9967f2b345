use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Variable,
    Equal,
    String,
    Integer,
    Print,
    Plus,
    Minus,
    Multiply,
    Division,
    Comma,
    Eol,
    Unsupported,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Variable => "VARIABLE",
            TokenKind::Equal => "EQUAL",
            TokenKind::String => "STRING",
            TokenKind::Integer => "INTEGER",
            TokenKind::Print => "PRINT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Division => "DIVISION",
            TokenKind::Comma => "COMMA",
            TokenKind::Eol => "EOL",
            TokenKind::Unsupported => "UNSUPPORTED",
        };
        write!(f, "{name}")
    }
}

/// The payload of a token: either the matched text or a decoded integer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenValue {
    Text(String),
    Integer(i64),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Text(s) => write!(f, "{s:?}"),
            TokenValue::Integer(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    /// Zero-based character offset of the first character of the lexeme.
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: TokenValue, offset: usize) -> Self {
        Self {
            kind,
            value,
            offset,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(s) => Some(s),
            TokenValue::Integer(_) => None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.value)
    }
}
