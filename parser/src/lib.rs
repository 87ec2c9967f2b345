use ast::*;
use lexer::{Token, TokenKind, TokenValue};
use tracing::{debug, trace};

mod error;
mod precedence;

pub use error::*;

use precedence::{binary_operator, precedence};

pub struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self, expected: &'static str) -> Result<&'t Token, ParserError> {
        let token = self
            .peek()
            .ok_or(ParserError::UnexpectedEnd { expected })?;
        self.pos += 1;
        Ok(token)
    }

    fn expect(
        &mut self,
        kind: TokenKind,
        expected: &'static str,
    ) -> Result<&'t Token, ParserError> {
        let token = self.advance(expected)?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(unexpected(token, expected))
        }
    }

    /// Parses every statement up to the end of the token sequence.
    pub fn program(&mut self) -> Result<Vec<Statement>, ParserError> {
        let mut statements = vec![];
        while let Some(token) = self.peek() {
            let statement = match token.kind {
                TokenKind::Variable => self.assignment()?,
                TokenKind::Print => self.print_statement()?,
                TokenKind::Unsupported => self.unsupported_statement()?,
                TokenKind::Eol => {
                    self.pos += 1;
                    continue;
                }
                _ => return Err(unexpected(token, "a statement")),
            };
            trace!(%statement, "parsed statement");
            statements.push(statement);
        }
        Ok(statements)
    }

    fn assignment(&mut self) -> Result<Statement, ParserError> {
        let name = text(self.expect(TokenKind::Variable, "a variable")?);
        self.expect(TokenKind::Equal, "'='")?;
        let value = self.parse_expression(0)?;
        Ok(Statement::Assignment(Assignment { name, value }))
    }

    fn print_statement(&mut self) -> Result<Statement, ParserError> {
        self.expect(TokenKind::Print, "PRINT")?;
        let mut expressions = vec![self.parse_expression(0)?];
        while self.peek().is_some_and(|t| t.kind == TokenKind::Comma) {
            self.pos += 1;
            expressions.push(self.parse_expression(0)?);
        }
        Ok(Statement::PrintStatement(PrintStatement { expressions }))
    }

    fn unsupported_statement(&mut self) -> Result<Statement, ParserError> {
        let directive = text(self.expect(TokenKind::Unsupported, "a directive")?);
        Ok(Statement::UnsupportedStatement(UnsupportedStatement {
            directive,
        }))
    }

    /// Precedence climbing: keeps folding operators that bind tighter than
    /// `min_precedence` into a left-associative tree.
    pub fn parse_expression(&mut self, min_precedence: u8) -> Result<Expression, ParserError> {
        let mut left = self.parse_atom()?;

        while let Some(token) = self.peek() {
            let op_precedence = precedence(token.kind);
            if op_precedence <= min_precedence {
                break;
            }
            let Some(operator) = binary_operator(token.kind) else {
                break;
            };
            self.pos += 1;
            let right = self.parse_expression(op_precedence)?;
            left = Expression::binary(left, operator, right);
        }

        Ok(left)
    }

    fn parse_atom(&mut self) -> Result<Expression, ParserError> {
        let token = self.advance("an expression")?;
        match (token.kind, &token.value) {
            (TokenKind::Variable, TokenValue::Text(name)) => {
                Ok(Expression::Variable(name.clone()))
            }
            (TokenKind::String, TokenValue::Text(s)) => {
                Ok(Expression::Literal(Literal::String(s.clone())))
            }
            (TokenKind::Integer, TokenValue::Integer(n)) => {
                Ok(Expression::Literal(Literal::Integer(*n)))
            }
            _ => Err(unexpected(token, "an expression")),
        }
    }
}

fn unexpected(token: &Token, expected: &'static str) -> ParserError {
    ParserError::UnexpectedToken {
        expected,
        found: token.kind,
        offset: token.offset,
    }
}

fn text(token: &Token) -> String {
    token.text().unwrap_or_default().to_string()
}

pub fn parse(tokens: &[Token]) -> Result<Vec<Statement>, ParserError> {
    let statements = Parser::new(tokens).program()?;
    debug!(count = statements.len(), "parsing finished");
    Ok(statements)
}
