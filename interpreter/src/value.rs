use std::fmt::{self, Display, Formatter};

use ast::{BinaryOperator, Literal};

use crate::InterpreterError;

#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Integer(i64),
    Real(f64),
    String(String),
}

impl Value {
    fn as_real(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Real(x) => Some(*x),
            Value::String(_) => None,
        }
    }

    /// Type and value, for error messages.
    pub fn describe(&self) -> String {
        match self {
            Value::Integer(n) => format!("integer {n}"),
            Value::Real(x) => format!("real {x}"),
            Value::String(s) => format!("string {s:?}"),
        }
    }

    pub(crate) fn apply(
        operator: BinaryOperator,
        left: Value,
        right: Value,
    ) -> Result<Value, InterpreterError> {
        let (l, r) = match (left.as_real(), right.as_real()) {
            (Some(l), Some(r)) => (l, r),
            (None, _) => return Err(non_numeric(operator, &left)),
            (_, None) => return Err(non_numeric(operator, &right)),
        };

        if operator == BinaryOperator::Divide {
            if r == 0.0 {
                return Err(InterpreterError::DivisionByZero);
            }
            return real(operator, l, r);
        }

        if let (Value::Integer(l), Value::Integer(r)) = (&left, &right) {
            let result = match operator {
                BinaryOperator::Plus => l.checked_add(*r),
                BinaryOperator::Minus => l.checked_sub(*r),
                BinaryOperator::Multiply => l.checked_mul(*r),
                BinaryOperator::Divide => unreachable!("division is always real"),
            };
            return result
                .map(Value::Integer)
                .ok_or(InterpreterError::Overflow {
                    left: *l,
                    operator,
                    right: *r,
                });
        }

        real(operator, l, r)
    }
}

/// Operands are always finite, so a non-finite result can only be overflow.
fn real(operator: BinaryOperator, left: f64, right: f64) -> Result<Value, InterpreterError> {
    let result = match operator {
        BinaryOperator::Plus => left + right,
        BinaryOperator::Minus => left - right,
        BinaryOperator::Multiply => left * right,
        BinaryOperator::Divide => left / right,
    };
    if result.is_finite() {
        Ok(Value::Real(result))
    } else {
        Err(InterpreterError::RealOverflow {
            left,
            operator,
            right,
        })
    }
}

fn non_numeric(operator: BinaryOperator, operand: &Value) -> InterpreterError {
    InterpreterError::NonNumeric {
        operator,
        operand: operand.describe(),
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::String(s) => Value::String(s.clone()),
            Literal::Integer(n) => Value::Integer(*n),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            // -0.0 prints as 0
            Value::Real(x) if *x == 0.0 => write!(f, "0"),
            Value::Real(x) => write!(f, "{x}"),
            Value::String(s) => write!(f, "{s}"),
        }
    }
}
