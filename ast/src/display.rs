use std::fmt::{self, Display, Formatter};

use crate::*;

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assignment(Assignment { name, value }) => write!(f, "${name} = {value}"),
            Statement::PrintStatement(PrintStatement { expressions }) => {
                write!(f, "PRINT")?;
                for (i, expression) in expressions.iter().enumerate() {
                    let separator = if i == 0 { " " } else { ", " };
                    write!(f, "{separator}{expression}")?;
                }
                Ok(())
            }
            Statement::UnsupportedStatement(UnsupportedStatement { directive }) => {
                write!(f, "{directive}")
            }
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => {
                write!(f, "\"")?;
                for c in s.chars() {
                    if c == '"' || c == '\\' {
                        write!(f, "\\")?;
                    }
                    write!(f, "{c}")?;
                }
                write!(f, "\"")
            }
            Literal::Integer(n) => write!(f, "{n}"),
        }
    }
}

/// Binary expressions are always parenthesized so the tree shape is visible.
impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Variable(name) => write!(f, "${name}"),
            Expression::Literal(literal) => write!(f, "{literal}"),
            Expression::Binary(left, op, right) => write!(f, "({left} {op} {right})"),
        }
    }
}
