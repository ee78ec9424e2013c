use crate::interpreter::operator::{Operator, UnaryFunction};
use thiserror::Error;

pub type Result<T, E = EvaluationError> = std::result::Result<T, E>;

/// Everything that can make an expression fail to evaluate.
///
/// Conversion to postfix never fails on its own; malformed input such as mismatched
/// parentheses or a missing operand is reported here once the postfix form is evaluated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error("unknown variable: {0}")]
    UnknownVariable(String),
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
    #[error("division by zero in '{0}'")]
    DivideByZero(Operator),
    #[error("{function} is undefined for {argument}")]
    DomainError {
        function: UnaryFunction,
        argument: f64,
    },
    #[error("malformed expression: {0}")]
    MalformedExpression(String),
}
