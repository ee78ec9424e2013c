//! Evaluation of arithmetic expressions written in infix notation.
//!
//! Expressions are split into tokens, reordered into postfix (reverse Polish) notation
//! with the shunting-yard algorithm and then evaluated with an operand stack.
//!
//! ```
//! use rpn_calculator::interpreter::{evaluate_with, extract_variables, Bindings};
//!
//! let expression = "max(a, b) * 2";
//! let variables: Bindings = extract_variables(expression)
//!     .into_iter()
//!     .zip([3.0, 4.0])
//!     .collect();
//! assert_eq!(evaluate_with(expression, &variables), Ok(8.0));
//! ```

pub mod interpreter;
