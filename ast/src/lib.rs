mod display;

#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Assignment(Assignment),
    PrintStatement(PrintStatement),
    UnsupportedStatement(UnsupportedStatement),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub name: String,
    pub value: Expression,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrintStatement {
    pub expressions: Vec<Expression>,
}

/// A `@directive` the language recognises but does not implement.
#[derive(Clone, Debug, PartialEq)]
pub struct UnsupportedStatement {
    pub directive: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn symbol(self) -> char {
        match self {
            BinaryOperator::Plus => '+',
            BinaryOperator::Minus => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    String(String),
    Integer(i64),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    Variable(String),
    Literal(Literal),
    Binary(Box<Expression>, BinaryOperator, Box<Expression>),
}

impl Expression {
    pub fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Self {
        Expression::Binary(Box::new(left), operator, Box::new(right))
    }
}
