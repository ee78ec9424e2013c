//! Categorizes lexemes produced by the lexer.
//!
//! The checks are ordered: a lexeme is a number if it parses as one, otherwise a function
//! if it names one, otherwise a variable if it starts with a letter, otherwise an operator
//! or a parenthesis. Anything left is kept as [`Token::Unrecognized`] so that the evaluator
//! can report it.

use crate::interpreter::operator::{Function, Operator};
use crate::interpreter::token::Token;

/// Converts a single lexeme into its token.
pub fn classify(lexeme: &str) -> Token {
    if let Some(value) = parse_number(lexeme) {
        return Token::Number(value);
    }
    if let Some(function) = Function::from_name(lexeme) {
        return Token::Function(function);
    }
    if is_variable(lexeme) {
        return Token::Variable(lexeme.to_string());
    }
    if let Some(operator) = Operator::from_symbol(lexeme) {
        return Token::Operator(operator);
    }
    match lexeme {
        "(" => Token::LeftParenthesis,
        ")" => Token::RightParenthesis,
        _ => Token::Unrecognized(lexeme.to_string()),
    }
}

pub fn is_number(lexeme: &str) -> bool {
    parse_number(lexeme).is_some()
}

pub fn is_function(lexeme: &str) -> bool {
    Function::from_name(lexeme).is_some()
}

pub fn is_variable(lexeme: &str) -> bool {
    !is_function(lexeme) && starts_with_letter(lexeme)
}

pub fn is_operator(lexeme: &str) -> bool {
    Operator::from_symbol(lexeme).is_some()
}

/// Only lexemes starting like a numeral are numbers, so `inf` and `nan` stay variables.
fn parse_number(lexeme: &str) -> Option<f64> {
    let starts_like_numeral = lexeme
        .chars()
        .next()
        .map_or(false, |first| first.is_ascii_digit() || first == '.');
    if !starts_like_numeral {
        return None;
    }
    lexeme.parse::<f64>().ok()
}

fn starts_with_letter(lexeme: &str) -> bool {
    lexeme.chars().next().map_or(false, char::is_alphabetic)
}
