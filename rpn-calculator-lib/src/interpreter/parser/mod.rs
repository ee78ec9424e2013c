mod infix_converter;

use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;

/// Reorders the given infix tokens into postfix (reverse Polish) order,
/// which can be evaluated without any precedence lookups.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The same tokens in postfix order, without parentheses.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::parser::parse;
/// use rpn_calculator::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::Variable("x".to_string()),
///     "^".parse().unwrap(),
///     Token::Number(2.0),
/// ];
/// let postfix_tokens = parse(infix_tokens);
/// let rendered: Vec<String> = postfix_tokens.iter().map(Token::to_string).collect();
/// assert_eq!(rendered, ["x", "2", "^"]);
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Vec<Token> {
    infix_to_postfix(infix_tokens)
}
