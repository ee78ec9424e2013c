use crate::interpreter::classifier;
use crate::interpreter::operator::{Function, Operator};
use std::convert::Infallible;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Variable(String),
    Operator(Operator),
    Function(Function),
    LeftParenthesis,
    RightParenthesis,
    /// A lexeme that is none of the above, e.g. `2x` or `1.2.3`.
    Unrecognized(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Variable(name) => write!(f, "{}", name),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::Function(function) => write!(f, "{}", function),
            Token::LeftParenthesis => write!(f, "("),
            Token::RightParenthesis => write!(f, ")"),
            Token::Unrecognized(lexeme) => write!(f, "{}", lexeme),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl str::FromStr for Token {
    type Err = Infallible;

    /// Every lexeme classifies as some token; see [`classifier::classify`].
    fn from_str(input: &str) -> Result<Token, Self::Err> {
        Ok(classifier::classify(input))
    }
}
