use tracing::debug;

use crate::{
    environment::Environment,
    error::Error,
    expr::Expr,
    lexer::Lexer,
    native_functions::FunctionTable,
    parser::Parser,
};

impl Expr {
    pub fn evaluate(&self) -> Result<f64> {
        match self {
            Expr::Number(n) => Ok(*n),
            Expr::Binary {
                left,
                operator,
                right,
            } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;

                match *operator {
                    '+' => Ok(left + right),
                    '-' => Ok(left - right),
                    '*' => Ok(left * right),
                    '/' => Ok(left / right),
                    op => Err(RuntimeError::InvalidOperator(op)),
                }
            }
            Expr::Variable(_) => Err(RuntimeError::NotImplemented("Variable evaluation")),
            Expr::Call { .. } => Err(RuntimeError::NotImplemented("Function call evaluation")),
        }
    }
}

/// Runs one line of input through lexing, parsing and evaluation.
///
/// The environment and function table are held for callers but are not
/// consulted while evaluating; variables and calls still fail with
/// [`RuntimeError::NotImplemented`].
#[derive(Debug, Default)]
pub struct Interpreter {
    environment: Environment,
    functions: FunctionTable,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_functions(functions: FunctionTable) -> Self {
        Self {
            functions,
            ..Default::default()
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn evaluate(&self, input: &str) -> std::result::Result<f64, Error> {
        let expr = self.parse(input)?;
        let value = expr.evaluate()?;
        debug!(value, "evaluated");
        Ok(value)
    }

    pub fn parse(&self, input: &str) -> std::result::Result<Expr, Error> {
        let tokens = Lexer::new(input).tokenize()?;
        debug!(count = tokens.len(), "scanned tokens");
        Ok(Parser::new(tokens).parse()?)
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error("Invalid binary operator '{0}'")]
    InvalidOperator(char),
    #[error("{0} not implemented")]
    NotImplemented(&'static str),
    #[error("Undefined variable '{0}'")]
    UndefinedVariable(String),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
