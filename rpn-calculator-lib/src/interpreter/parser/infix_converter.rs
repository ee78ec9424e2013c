use crate::interpreter::operator::{Function, Operator, UnaryFunction};
use crate::interpreter::token::Token;
use log::trace;

/// Reorders infix tokens into postfix order using the shunting-yard algorithm.
///
/// Conversion never fails. A closing parenthesis without a match is ignored, and an
/// opening parenthesis without a match ends up in the output, where the evaluator
/// rejects it. Operators of equal precedence are popped before the new one is pushed,
/// which makes all of them left-associative, `^` included.
///
/// A `-` found where an operand is expected (at the start, after `(`, an operator or a
/// function name) is a unary minus. It is treated as a function, so `-2^2` is `(-2)^2`.
pub fn infix_to_postfix(tokens: Vec<Token>) -> Vec<Token> {
    let mut operators: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut expects_operand = true;

    for token in tokens {
        match token {
            Token::Operator(Operator::Subtract) if expects_operand => {
                operators.push(Token::Function(Function::Unary(UnaryFunction::Negate)));
            }
            Token::Function(_) | Token::LeftParenthesis => {
                operators.push(token);
                expects_operand = true;
            }
            Token::RightParenthesis => {
                parse_closing_parenthesis_token(&mut operators, &mut output);
                expects_operand = false;
            }
            Token::Operator(operator) => {
                parse_operator_token(&mut operators, &mut output, operator);
                expects_operand = true;
            }
            // Unrecognized lexemes take an operand's place so the evaluator sees them.
            Token::Number(_) | Token::Variable(_) | Token::Unrecognized(_) => {
                output.push(token);
                expects_operand = false;
            }
        }
    }

    transfer_leftover_operators(&mut operators, &mut output);

    trace!("converted to postfix: {:?}", output);
    output
}

fn transfer_leftover_operators(operators: &mut Vec<Token>, output: &mut Vec<Token>) {
    while let Some(operator) = operators.pop() {
        output.push(operator);
    }
}

fn parse_closing_parenthesis_token(operators: &mut Vec<Token>, output: &mut Vec<Token>) {
    while let Some(top_of_operator_stack) = operators.pop() {
        if top_of_operator_stack == Token::LeftParenthesis {
            // Discard the open parenthesis.
            break;
        }
        output.push(top_of_operator_stack);
    }

    // A function waiting below the group takes the group as its arguments.
    if matches!(operators.last(), Some(Token::Function(_))) {
        if let Some(function) = operators.pop() {
            output.push(function);
        }
    }
}

fn parse_operator_token(operators: &mut Vec<Token>, output: &mut Vec<Token>, operator: Operator) {
    while let Some(top_of_operator_stack) = operators.last() {
        let binds_tighter = match top_of_operator_stack {
            Token::Operator(other_operator) => other_operator.precedence_ge(&operator),
            Token::Function(function) => function.precedence() >= operator.precedence(),
            _ => false,
        };
        if !binds_tighter {
            break;
        }

        if let Some(other_operator_token) = operators.pop() {
            output.push(other_operator_token);
        }
    }

    operators.push(Token::Operator(operator));
}
