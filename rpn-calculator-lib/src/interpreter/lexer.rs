use crate::interpreter::classifier::classify;
use crate::interpreter::token::Token;

/// Characters that always form a token of their own.
pub static SYMBOLS: [char; 8] = ['+', '-', '*', '/', '^', '%', '(', ')'];

/// Splits an expression into its lexemes.
///
/// Digits, `.` and letters are collected greedily into a single lexeme, so `x1` and `1.2.3`
/// both come out whole. Whitespace and symbols end the current lexeme. Any other
/// character is dropped, which makes `min(1, 2)` and `min(1 2)` the same.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The lexemes of the expression, in order.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::lexer::tokenize;
///
/// let lexemes = tokenize("sqrt(x1) + 2.5");
/// assert_eq!(lexemes, ["sqrt", "(", "x1", ")", "+", "2.5"]);
/// ```
pub fn tokenize(expression: &str) -> Vec<String> {
    let mut lexemes = Vec::new();
    let mut current = String::new();

    for character in expression.chars() {
        if character.is_whitespace() {
            flush(&mut current, &mut lexemes);
        } else if character.is_ascii_digit() || character == '.' || character.is_alphabetic() {
            current.push(character);
        } else if SYMBOLS.contains(&character) {
            flush(&mut current, &mut lexemes);
            lexemes.push(character.to_string());
        }
    }
    flush(&mut current, &mut lexemes);

    lexemes
}

/// Splits an expression into lexemes and classifies each of them.
pub fn tokenize_classified(expression: &str) -> Vec<Token> {
    tokenize(expression)
        .iter()
        .map(|lexeme| classify(lexeme))
        .collect()
}

fn flush(current: &mut String, lexemes: &mut Vec<String>) {
    if !current.is_empty() {
        lexemes.push(std::mem::take(current));
    }
}
