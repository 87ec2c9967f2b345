use ast::BinaryOperator;
use lexer::TokenKind;

pub(crate) fn binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Plus),
        TokenKind::Minus => Some(BinaryOperator::Minus),
        TokenKind::Multiply => Some(BinaryOperator::Multiply),
        TokenKind::Division => Some(BinaryOperator::Divide),
        _ => None,
    }
}

/// Binding strength of `kind` as an infix operator; 0 ends an expression.
pub(crate) fn precedence(kind: TokenKind) -> u8 {
    match binary_operator(kind) {
        Some(BinaryOperator::Plus | BinaryOperator::Minus) => 1,
        Some(BinaryOperator::Multiply | BinaryOperator::Divide) => 2,
        None => 0,
    }
}
