use tracing::{debug, trace};

mod error;
mod rules;
mod token;

pub use error::*;
pub use token::*;

use rules::{Action, Rule, RULES};

/// Splits Tally source into tokens, one rule match at a time.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    fn match_rule(&self) -> Result<(&'static Rule, usize), LexerError> {
        let rest = &self.chars[self.pos..];
        for rule in RULES {
            if let Some(len) = rule.pattern.scan(rest, self.pos)? {
                return Ok((rule, len));
            }
        }
        Err(LexerError::UnexpectedCharacter {
            character: rest[0],
            offset: self.pos,
        })
    }

    pub fn next_token(&mut self) -> Result<Option<Token>, LexerError> {
        while self.pos < self.chars.len() {
            let offset = self.pos;
            let (rule, len) = self.match_rule()?;
            self.pos += len;

            if let Action::Emit(kind, decode) = &rule.action {
                let value = decode.apply(&self.chars[offset..self.pos], offset)?;
                let token = Token::new(*kind, value, offset);
                trace!(%token, offset, "lexed token");
                return Ok(Some(token));
            }
        }
        Ok(None)
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(e) => {
                self.pos = self.chars.len();
                Some(Err(e))
            }
        }
    }
}

pub fn lex(input: &str) -> Result<Vec<Token>, LexerError> {
    let tokens = Lexer::new(input).collect::<Result<Vec<_>, _>>()?;
    debug!(count = tokens.len(), "lexing finished");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        lex(input).unwrap().into_iter().map(|t| t.kind).collect()
    }

    fn text(kind: TokenKind, value: &str, offset: usize) -> Token {
        Token::new(kind, TokenValue::Text(value.to_string()), offset)
    }

    #[test]
    fn assignment() {
        assert_eq!(
            lex("$a = 5").unwrap(),
            vec![
                text(TokenKind::Variable, "a", 0),
                text(TokenKind::Equal, "=", 3),
                Token::new(TokenKind::Integer, TokenValue::Integer(5), 5),
            ]
        );
    }

    #[test]
    fn print_list() {
        assert_eq!(
            kinds(r#"PRINT $a, "b", 3"#),
            vec![
                TokenKind::Print,
                TokenKind::Variable,
                TokenKind::Comma,
                TokenKind::String,
                TokenKind::Comma,
                TokenKind::Integer,
            ]
        );
    }

    #[test]
    fn operators() {
        assert_eq!(
            kinds("1 + 2 - 3 * 4 / 5"),
            vec![
                TokenKind::Integer,
                TokenKind::Plus,
                TokenKind::Integer,
                TokenKind::Minus,
                TokenKind::Integer,
                TokenKind::Multiply,
                TokenKind::Integer,
                TokenKind::Division,
                TokenKind::Integer,
            ]
        );
    }

    #[test]
    fn newline_and_semicolon_are_both_separators() {
        let tokens = lex("$a = 1;$b = 2\n").unwrap();
        let separators: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Eol)
            .map(|t| t.text().unwrap())
            .collect();
        assert_eq!(separators, vec![";", "\n"]);
    }

    #[test]
    fn escaped_string() {
        let tokens = lex(r#""Hello\"World\"""#).unwrap();
        assert_eq!(tokens, vec![text(TokenKind::String, r#"Hello"World""#, 0)]);
    }

    #[test]
    fn comment_line_adds_no_tokens() {
        let with_comment = lex("$a = 1\n% set up b\n$b = 2\n").unwrap();
        let without_comment = lex("$a = 1\n$b = 2\n").unwrap();
        let strip = |tokens: Vec<Token>| -> Vec<(TokenKind, TokenValue)> {
            tokens.into_iter().map(|t| (t.kind, t.value)).collect()
        };
        assert_eq!(strip(with_comment), strip(without_comment));
    }

    #[test]
    fn trailing_comment_swallows_its_newline() {
        assert_eq!(
            kinds("$a = 1 % one\n$b = 2"),
            vec![
                TokenKind::Variable,
                TokenKind::Equal,
                TokenKind::Integer,
                TokenKind::Variable,
                TokenKind::Equal,
                TokenKind::Integer,
            ]
        );
    }

    #[test]
    fn directive_keeps_its_text() {
        assert_eq!(
            lex("@include").unwrap(),
            vec![text(TokenKind::Unsupported, "@include", 0)]
        );
    }

    #[test]
    fn crlf_lexes_like_lf() {
        assert_eq!(kinds("$a = 1\r\n$b = 2"), kinds("$a = 1\n$b = 2"));
    }

    #[test]
    fn unexpected_character_reports_offset() {
        assert_eq!(
            lex("$a = 1 ? 2"),
            Err(LexerError::UnexpectedCharacter {
                character: '?',
                offset: 7
            })
        );
    }

    #[test]
    fn lowercase_keyword_is_rejected() {
        assert_eq!(
            lex("print 1"),
            Err(LexerError::UnexpectedCharacter {
                character: 'p',
                offset: 0
            })
        );
    }

    #[test]
    fn unterminated_string() {
        let err = lex(r#"PRINT "abc"#).unwrap_err();
        assert_eq!(
            err,
            LexerError::UnterminatedString {
                delimiter: '"',
                offset: 6
            }
        );
        assert_eq!(
            err.to_string(),
            r#"Lexer: unterminated string, opening '"' at offset 6 is never closed"#
        );
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        let err = lex("\"é\" ?").unwrap_err();
        assert_eq!(err.offset(), 4);
    }

    #[test]
    fn iterator_stops_after_error() {
        let mut lexer = Lexer::new("$a ? $b");
        assert!(matches!(lexer.next(), Some(Ok(_))));
        assert!(matches!(lexer.next(), Some(Err(_))));
        assert!(lexer.next().is_none());
    }

    #[test]
    fn empty_input() {
        assert_eq!(lex("").unwrap(), vec![]);
        assert_eq!(lex("  \t ").unwrap(), vec![]);
    }
}
