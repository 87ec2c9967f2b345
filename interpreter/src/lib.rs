use std::io::{self, Write};

use ast::*;
use tracing::{debug, trace};

mod error;
mod store;
mod value;

pub use error::*;
pub use store::*;
pub use value::*;

struct Environment<'a> {
    variables: &'a mut VariableStore,
    output: &'a mut dyn Write,
}

/// Executes statements in order against a private variable store, writing
/// one line to `output` per PRINT.
pub struct Interpreter<W: Write> {
    variables: VariableStore,
    output: W,
}

impl<W: Write> Interpreter<W> {
    pub fn new(output: W) -> Self {
        Self {
            variables: VariableStore::new(),
            output,
        }
    }

    pub fn interpret(&mut self, statements: &[Statement]) -> Result<(), InterpreterError> {
        let mut env = Environment {
            variables: &mut self.variables,
            output: &mut self.output,
        };
        for statement in statements {
            trace!(%statement, "executing statement");
            statement.run(&mut env)?;
        }
        debug!(
            statements = statements.len(),
            variables = self.variables.len(),
            "interpretation finished"
        );
        Ok(())
    }

    pub fn variables(&self) -> &VariableStore {
        &self.variables
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Runs `statements` with PRINT output going to stdout.
pub fn interpret(statements: &[Statement]) -> Result<(), InterpreterError> {
    Interpreter::new(io::stdout().lock()).interpret(statements)
}

trait Interpretable {
    type Value;
    fn run(&self, env: &mut Environment) -> Result<Self::Value, InterpreterError>;
}

impl Interpretable for Statement {
    type Value = ();
    fn run(&self, env: &mut Environment) -> Result<Self::Value, InterpreterError> {
        match self {
            Statement::Assignment(Assignment { name, value }) => {
                let value = value.run(env)?;
                env.variables.set(name, value);
            }
            Statement::PrintStatement(PrintStatement { expressions }) => {
                let values = expressions
                    .iter()
                    .map(|expression| expression.run(env).map(|v| v.to_string()))
                    .collect::<Result<Vec<_>, _>>()?;
                writeln!(env.output, "{}", values.join(" "))?;
            }
            Statement::UnsupportedStatement(UnsupportedStatement { directive }) => {
                return Err(InterpreterError::UnsupportedStatement {
                    directive: directive.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Interpretable for Expression {
    type Value = Value;

    fn run(&self, env: &mut Environment) -> Result<Self::Value, InterpreterError> {
        match self {
            Expression::Variable(name) => env.variables.get(name).cloned().ok_or_else(|| {
                InterpreterError::UndefinedVariable {
                    name: name.clone(),
                }
            }),
            Expression::Literal(literal) => Ok(Value::from(literal)),
            Expression::Binary(left, op, right) => {
                let left = left.run(env)?;
                let right = right.run(env)?;
                Value::apply(*op, left, right)
            }
        }
    }
}
