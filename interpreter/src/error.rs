use std::io;

use ast::BinaryOperator;

#[derive(thiserror::Error, Debug)]
pub enum InterpreterError {
    #[error("Interpreter: undefined variable ${name}")]
    UndefinedVariable { name: String },

    #[error("Interpreter: operator '{operator}' needs numeric operands, got {operand}")]
    NonNumeric {
        operator: BinaryOperator,
        operand: String,
    },

    #[error("Interpreter: division by zero")]
    DivisionByZero,

    #[error("Interpreter: integer overflow in {left} {operator} {right}")]
    Overflow {
        left: i64,
        operator: BinaryOperator,
        right: i64,
    },

    #[error("Interpreter: real overflow in {left} {operator} {right}")]
    RealOverflow {
        left: f64,
        operator: BinaryOperator,
        right: f64,
    },
    #[error("Interpreter: unsupported statement {directive}")]
    UnsupportedStatement { directive: String },

    #[error("Interpreter: failed to write output: {0}")]
    Output(#[from] io::Error),
}
