//! The lexical grammar as an ordered rule table.
//!
//! Rules are tried top to bottom at the current position and the first one
//! whose pattern matches wins, so more specific rules have to come first.

use crate::{LexerError, TokenKind, TokenValue};

pub(crate) enum Pattern {
    /// One or more characters accepted by the predicate.
    Run(fn(char) -> bool),
    /// Exactly one character out of the set.
    OneOf(&'static [char]),
    /// The exact text, case-sensitive.
    Literal(&'static str),
    /// The sigil followed by one or more characters accepted by the predicate.
    Sigil(char, fn(char) -> bool),
    /// The marker and everything up to and including the next newline.
    LineComment(char),
    /// Text between two delimiters where a backslash escapes the next character.
    Quoted(char),
}

impl Pattern {
    /// Returns how many characters at the start of `rest` the pattern matches.
    pub(crate) fn scan(&self, rest: &[char], offset: usize) -> Result<Option<usize>, LexerError> {
        let len = match *self {
            Pattern::Run(accept) => {
                let n = rest.iter().take_while(|c| accept(**c)).count();
                (n > 0).then_some(n)
            }
            Pattern::OneOf(set) => rest.first().filter(|c| set.contains(c)).map(|_| 1),
            Pattern::Literal(text) => {
                let n = text.chars().count();
                rest.iter().copied().take(n).eq(text.chars()).then_some(n)
            }
            Pattern::Sigil(sigil, accept) => match rest.split_first() {
                Some((first, tail)) if *first == sigil => {
                    let n = tail.iter().take_while(|c| accept(**c)).count();
                    (n > 0).then_some(n + 1)
                }
                _ => None,
            },
            Pattern::LineComment(marker) => {
                if rest.first() != Some(&marker) {
                    return Ok(None);
                }
                Some(
                    rest.iter()
                        .position(|c| *c == '\n')
                        .map_or(rest.len(), |i| i + 1),
                )
            }
            Pattern::Quoted(delimiter) => {
                if rest.first() != Some(&delimiter) {
                    return Ok(None);
                }
                let mut i = 1;
                loop {
                    match rest.get(i) {
                        None => {
                            return Err(LexerError::UnterminatedString { delimiter, offset })
                        }
                        Some('\\') => i += 2,
                        Some(c) if *c == delimiter => break Some(i + 1),
                        Some(_) => i += 1,
                    }
                }
            }
        };
        Ok(len)
    }
}

/// How the matched lexeme becomes a token value.
pub(crate) enum Decode {
    Verbatim,
    StripSigil,
    Unescape,
    Integer,
}

impl Decode {
    pub(crate) fn apply(&self, lexeme: &[char], offset: usize) -> Result<TokenValue, LexerError> {
        let value = match self {
            Decode::Verbatim => TokenValue::Text(lexeme.iter().collect()),
            Decode::StripSigil => TokenValue::Text(lexeme[1..].iter().collect()),
            Decode::Unescape => TokenValue::Text(unescape(&lexeme[1..lexeme.len() - 1])),
            Decode::Integer => {
                let literal: String = lexeme.iter().collect();
                let n = literal
                    .parse()
                    .map_err(|_| LexerError::IntegerOutOfRange {
                        literal: literal.clone(),
                        offset,
                    })?;
                TokenValue::Integer(n)
            }
        };
        Ok(value)
    }
}

fn unescape(body: &[char]) -> String {
    let mut result = String::with_capacity(body.len());
    let mut chars = body.iter();
    while let Some(&c) = chars.next() {
        if c == '\\' {
            if let Some(&escaped) = chars.next() {
                result.push(escaped);
            }
        } else {
            result.push(c);
        }
    }
    result
}

pub(crate) enum Action {
    Skip,
    Emit(TokenKind, Decode),
}

pub(crate) struct Rule {
    pub(crate) pattern: Pattern,
    pub(crate) action: Action,
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

fn is_identifier(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

const fn single(c: &'static [char], kind: TokenKind) -> Rule {
    Rule {
        pattern: Pattern::OneOf(c),
        action: Action::Emit(kind, Decode::Verbatim),
    }
}

pub(crate) const RULES: &[Rule] = &[
    Rule {
        pattern: Pattern::Run(is_blank),
        action: Action::Skip,
    },
    Rule {
        pattern: Pattern::LineComment('%'),
        action: Action::Skip,
    },
    single(&['\n', ';'], TokenKind::Eol),
    Rule {
        pattern: Pattern::Sigil('@', is_identifier),
        action: Action::Emit(TokenKind::Unsupported, Decode::Verbatim),
    },
    single(&['='], TokenKind::Equal),
    single(&[','], TokenKind::Comma),
    single(&['+'], TokenKind::Plus),
    single(&['-'], TokenKind::Minus),
    single(&['*'], TokenKind::Multiply),
    single(&['/'], TokenKind::Division),
    Rule {
        pattern: Pattern::Sigil('$', is_identifier),
        action: Action::Emit(TokenKind::Variable, Decode::StripSigil),
    },
    Rule {
        pattern: Pattern::Quoted('"'),
        action: Action::Emit(TokenKind::String, Decode::Unescape),
    },
    Rule {
        pattern: Pattern::Run(is_digit),
        action: Action::Emit(TokenKind::Integer, Decode::Integer),
    },
    Rule {
        pattern: Pattern::Literal("PRINT"),
        action: Action::Emit(TokenKind::Print, Decode::Verbatim),
    },
];
