use crate::interpreter::error::{EvaluationError, Result};
use crate::interpreter::operator::{Function, Operator};
use crate::interpreter::token::Token;
use crate::interpreter::Bindings;
use log::trace;

/// Computes the value of an expression given in postfix order.
///
/// # Arguments
///
/// * `postfix_tokens`: The expression to evaluate, ordered in postfix notation.
/// * `variables`: Values for every variable that occurs in the expression.
///
/// returns: The single value the expression reduces to.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::evaluator::evaluate_postfix;
/// use rpn_calculator::interpreter::token::Token;
/// use rpn_calculator::interpreter::Bindings;
///
/// let postfix_tokens = vec![
///     Token::Variable("x".to_string()),
///     Token::Number(2.0),
///     "*".parse().unwrap(),
/// ];
/// let variables = Bindings::from([("x".to_string(), 21.0)]);
/// assert_eq!(evaluate_postfix(postfix_tokens, &variables), Ok(42.0));
/// ```
pub fn evaluate_postfix(postfix_tokens: Vec<Token>, variables: &Bindings) -> Result<f64> {
    let mut operands: Vec<f64> = Vec::new();

    for token in postfix_tokens {
        match token {
            Token::Number(value) => operands.push(value),
            Token::Variable(name) => match variables.get(&name) {
                Some(value) => operands.push(*value),
                None => return Err(EvaluationError::UnknownVariable(name)),
            },
            Token::Operator(operator) => {
                let value = apply_operator(&mut operands, operator)?;
                operands.push(value);
            }
            Token::Function(function) => {
                let value = apply_function(&mut operands, function)?;
                operands.push(value);
            }
            Token::LeftParenthesis | Token::RightParenthesis | Token::Unrecognized(_) => {
                return Err(EvaluationError::UnknownOperation(token.to_string()));
            }
        }
        trace!("operands: {:?}", operands);
    }

    match operands.as_slice() {
        [result] => Ok(*result),
        [] => Err(EvaluationError::MalformedExpression(
            "the expression has no value".into(),
        )),
        values => Err(EvaluationError::MalformedExpression(format!(
            "expected a single result but {} values remain",
            values.len()
        ))),
    }
}

fn apply_operator(operands: &mut Vec<f64>, operator: Operator) -> Result<f64> {
    let right = pop_operand(operands, &operator.to_string(), 2)?;
    operator.check_right_operand(right)?;
    let left = pop_operand(operands, &operator.to_string(), 2)?;
    operator.evaluate(left, right)
}

fn apply_function(operands: &mut Vec<f64>, function: Function) -> Result<f64> {
    let arity = function.arity();
    match function {
        Function::Unary(function) => {
            let x = pop_operand(operands, function.name(), arity)?;
            function.evaluate(x)
        }
        Function::Binary(function) => {
            let b = pop_operand(operands, function.name(), arity)?;
            let a = pop_operand(operands, function.name(), arity)?;
            Ok(function.evaluate(a, b))
        }
    }
}

/// The first pop for an operation is its right-hand operand.
fn pop_operand(operands: &mut Vec<f64>, operation: &str, arity: usize) -> Result<f64> {
    operands.pop().ok_or_else(|| {
        EvaluationError::MalformedExpression(format!(
            "'{}' expects {} operand{}",
            operation,
            arity,
            if arity == 1 { "" } else { "s" }
        ))
    })
}
