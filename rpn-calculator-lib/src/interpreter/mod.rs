pub mod classifier;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::error::Result;
use crate::interpreter::evaluator::evaluate_postfix;
use crate::interpreter::token::Token;
use itertools::Itertools;
use log::debug;
use std::collections::HashMap;

/// Values of the variables in an expression, by name.
pub type Bindings = HashMap<String, f64>;

/// Evaluates an expression that contains no variables.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The numeric value of the expression.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::evaluate;
///
/// assert_eq!(evaluate("sqrt(9) + 1"), Ok(4.0));
/// assert!(evaluate("5 / 0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64> {
    evaluate_with(expression, &Bindings::new())
}

/// Evaluates an expression, taking variable values from the given bindings.
///
/// Every variable returned by [`extract_variables`] for the expression must be bound,
/// otherwise evaluation fails. No state is kept between calls.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
/// * `variables`: Values for the variables of the expression.
///
/// returns: The numeric value of the expression.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::{evaluate_with, Bindings};
/// # use rpn_calculator::interpreter::error::EvaluationError;
///
/// # fn main() -> Result<(), EvaluationError> {
/// let variables = Bindings::from([
///     ("a".to_string(), 5.0),
///     ("b".to_string(), 10.0),
///     ("c".to_string(), 3.0),
/// ]);
/// let value = evaluate_with("a + b * c", &variables)?;
/// assert_eq!(value, 35.0);
/// # Ok::<(), EvaluationError>(()) }
/// ```
pub fn evaluate_with(expression: &str, variables: &Bindings) -> Result<f64> {
    let postfix_tokens = to_postfix(expression);
    debug!("postfix: {}", tokens_to_string(&postfix_tokens));
    evaluate_postfix(postfix_tokens, variables)
}

/// Converts the given infix expression into postfix tokens.
///
/// Never fails; problems with the expression are reported when it is evaluated.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::{to_postfix, tokens_to_string};
///
/// let postfix_tokens = to_postfix("3 + 4 * 2");
/// assert_eq!(tokens_to_string(&postfix_tokens), "3 4 2 * +");
/// ```
pub fn to_postfix(expression: &str) -> Vec<Token> {
    let infix_tokens = lexer::tokenize_classified(expression);
    parser::parse(infix_tokens)
}

/// Lists the variables of an expression in order of first occurrence, without duplicates.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::extract_variables;
///
/// assert_eq!(extract_variables("a + b * c - a"), ["a", "b", "c"]);
/// ```
pub fn extract_variables(expression: &str) -> Vec<String> {
    lexer::tokenize(expression)
        .into_iter()
        .filter(|lexeme| classifier::is_variable(lexeme))
        .unique()
        .collect()
}

/// Prints the given tokens separated by single spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().join(" ")
}

#[cfg(test)]
mod interpreter_tests {
    use super::*;
    use crate::interpreter::error::EvaluationError;
    use crate::interpreter::operator::{Operator, UnaryFunction};
    use parameterized_macro::parameterized;

    #[test]
    fn simple_expression_converts_to_postfix() {
        let postfix = tokens_to_string(&to_postfix("3 + 4 * 2"));

        assert_eq!(postfix, "3 4 2 * +");
        assert_eq!(evaluate("3 + 4 * 2").unwrap(), 11.0);
    }

    #[test]
    fn complex_expression_converts_to_postfix() {
        let postfix = tokens_to_string(&to_postfix("a + b * (c - d) / e^2"));

        assert_eq!(postfix, "a b c d - * e 2 ^ / +");
    }

    #[parameterized(
    expression = {
    "1 + 2",
    "7 - 2 - 1",
    "2 * (3 + 4)",
    "10 / 4",
    "10 % 4",
    "2^10",
    "sqrt(9) + 1",
    "abs(3 - 10)",
    "floor(2.9) * 2",
    "exp(0)",
    "ln(1)",
    "log(100)",
    "sin(0) + cos(0)",
    "tan(0)",
    "min(3, 8) + max(3, 8)",
    "max(2 4) ^ 2",
    "((((5))))",
    "1.5 * 4",
    "2 ^ 3 ^ 2",
    "100 / 10 / 5",
    },
    expected = {
    3.0,
    4.0,
    14.0,
    2.5,
    2.0,
    1024.0,
    4.0,
    7.0,
    4.0,
    1.0,
    0.0,
    2.0,
    1.0,
    0.0,
    11.0,
    16.0,
    5.0,
    6.0,
    64.0,
    2.0,
    }
    )]
    fn evaluate_expression_returns_correct_value(expression: &str, expected: f64) {
        let actual = evaluate(expression).unwrap();
        assert!(
            (actual - expected).abs() < 1e-12,
            "{} evaluated to {}, expected {}",
            expression,
            actual,
            expected
        );
    }

    #[test]
    fn exponentiation_groups_from_the_left() {
        // (2^3)^2, not 2^(3^2)
        assert_eq!(evaluate("2^3^2").unwrap(), 64.0);
        assert_eq!(evaluate("2^(3^2)").unwrap(), 512.0);
    }

    #[test]
    fn variables_are_extracted_in_order_of_occurrence() {
        assert_eq!(extract_variables("a + b * c"), ["a", "b", "c"]);
    }

    #[test]
    fn extracted_variables_skip_functions_and_numbers() {
        assert_eq!(
            extract_variables("sqrt(x) + 2 * max(y, x) - 1e3"),
            ["x", "y"]
        );
    }

    #[test]
    fn expression_with_variables_uses_bindings() {
        let variables = Bindings::from([
            ("a".to_string(), 5.0),
            ("b".to_string(), 10.0),
            ("c".to_string(), 3.0),
        ]);

        let actual = evaluate_with("a + b * c", &variables).unwrap();

        assert_eq!(actual, 35.0);
    }

    #[test]
    fn unused_bindings_are_ignored() {
        let variables = Bindings::from([("x".to_string(), 2.0), ("unused".to_string(), 1.0)]);

        assert_eq!(evaluate_with("x * x", &variables).unwrap(), 4.0);
    }

    #[test]
    fn unbound_variable_returns_err() {
        let error = evaluate_with("x + 1", &Bindings::new()).unwrap_err();

        assert_eq!(error, EvaluationError::UnknownVariable("x".into()));
    }

    #[parameterized(
    expression = { "5 / 0", "5 % 0", "1 / (2 - 2)" },
    operator = { Operator::Divide, Operator::Remainder, Operator::Divide }
    )]
    fn division_by_zero_returns_err(expression: &str, operator: Operator) {
        let error = evaluate(expression).unwrap_err();
        assert_eq!(error, EvaluationError::DivideByZero(operator));
    }

    #[test]
    fn square_root_of_negative_returns_err() {
        let error = evaluate("sqrt(-4)").unwrap_err();

        assert_eq!(
            error,
            EvaluationError::DomainError {
                function: UnaryFunction::SquareRoot,
                argument: -4.0
            }
        );
    }

    #[parameterized(
    expression = { "-5", "3 * -5", "-(2 + 3) * 3", "2 - -3", "-2^2", "abs(-7.5)", "min(3, (-5))" },
    expected = { -5.0, -15.0, -15.0, 5.0, 4.0, 7.5, -5.0 }
    )]
    fn minus_in_operand_position_negates(expression: &str, expected: f64) {
        assert_eq!(evaluate(expression).unwrap(), expected);
    }

    #[parameterized(
    expression = { "ln(0)", "log(0)", "ln(1 - 3)" }
    )]
    fn logarithm_of_non_positive_returns_err(expression: &str) {
        let error = evaluate(expression).unwrap_err();
        assert!(matches!(error, EvaluationError::DomainError { .. }));
    }

    #[parameterized(
    expression = { "", "   ", "+5", "1 +", "1 * / 2", "1 2", "()", "-" }
    )]
    fn incomplete_expression_is_malformed(expression: &str) {
        let error = evaluate(expression).unwrap_err();
        assert!(matches!(error, EvaluationError::MalformedExpression(_)));
    }

    #[parameterized(
    expression = { "(1 + 2", "2x + 1", "1.2.3" }
    )]
    fn unparsable_expression_is_unknown_operation(expression: &str) {
        let error = evaluate(expression).unwrap_err();
        assert!(matches!(error, EvaluationError::UnknownOperation(_)));
    }

    #[test]
    fn function_names_are_case_sensitive() {
        let error = evaluate("Sqrt(4)").unwrap_err();

        assert_eq!(error, EvaluationError::UnknownVariable("Sqrt".into()));
    }

    #[test]
    fn unmatched_closing_parenthesis_is_tolerated() {
        assert_eq!(evaluate("(1 + 2))").unwrap(), 3.0);
    }

    #[test]
    fn ignored_characters_do_not_affect_value() {
        assert_eq!(evaluate("1 + 2 $").unwrap(), 3.0);
    }

    #[test]
    fn evaluating_twice_returns_same_value() {
        let variables = Bindings::from([("x".to_string(), 0.5)]);

        let first = evaluate_with("sin(x) * 2 + x^2", &variables);
        let second = evaluate_with("sin(x) * 2 + x^2", &variables);

        assert_eq!(first, second);
    }

    #[test]
    fn concurrent_evaluations_are_independent() {
        let results: Vec<f64> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    scope.spawn(move || {
                        let variables = Bindings::from([("n".to_string(), f64::from(i))]);
                        evaluate_with("n * n + 1", &variables)
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap().unwrap())
                .collect()
        });

        let expected: Vec<f64> = (0..8).map(|i| f64::from(i * i + 1)).collect();
        assert_eq!(results, expected);
    }

    #[test]
    fn well_formed_literal_expressions_return_finite_values() {
        let expressions = [
            "1 + 2 * 3 - 4 / 5",
            "max(1, 2) % 3 + floor(7.5)",
            "exp(1) * ln(10) - log(1000)",
            "abs(0 - 2) ^ 0.5",
        ];

        assert!(expressions
            .iter()
            .all(|expression| evaluate(expression).unwrap().is_finite()));
    }
}
