use anyhow::{bail, Context, Result};
use log::{debug, info};
use rpn_calculator::interpreter::operator::{BinaryFunction, Operator, UnaryFunction};
use rpn_calculator::interpreter::{
    evaluate_with, extract_variables, to_postfix, tokens_to_string, Bindings,
};
use std::io::{BufRead, Write};

const SEPARATOR_WIDTH: usize = 50;

/// How one expression of an interactive session ended.
#[derive(Debug, PartialEq)]
enum Outcome {
    Value(f64),
    Rejected(String),
    EndOfInput,
}

/// An interactive calculator session: reads expressions, asks for the values of their
/// variables and prints the results until `exit` or the end of the input.
pub struct Session<R, W> {
    input: R,
    output: W,
    show_postfix: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, show_postfix: bool) -> Self {
        Session {
            input,
            output,
            show_postfix,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "=== Reverse Polish notation calculator ===")?;
        writeln!(self.output, "Supported operations: {}", supported_operations())?;
        writeln!(self.output, "Type 'exit' to quit")?;
        writeln!(self.output)?;

        while let Some(expression) = self.prompt("Enter an expression: ")? {
            if expression.eq_ignore_ascii_case("exit") {
                break;
            }
            if expression.is_empty() {
                continue;
            }

            match self.evaluate_expression(&expression)? {
                Outcome::Value(value) => writeln!(self.output, "Result: {}", value)?,
                Outcome::Rejected(reason) => writeln!(self.output, "Error: {}", reason)?,
                Outcome::EndOfInput => break,
            }
            writeln!(self.output, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        }

        writeln!(self.output, "Session ended.")?;
        Ok(())
    }

    fn evaluate_expression(&mut self, expression: &str) -> Result<Outcome> {
        let names = extract_variables(expression);
        let mut variables = Bindings::with_capacity(names.len());

        if !names.is_empty() {
            writeln!(self.output, "Variables found: {}", names.join(", "))?;
            writeln!(self.output, "Enter the values of the variables:")?;
        }
        for name in names {
            let text = match self.prompt(&format!("{} = ", name))? {
                Some(text) => text,
                None => return Ok(Outcome::EndOfInput),
            };
            match text.parse::<f64>() {
                Ok(value) => {
                    variables.insert(name, value);
                }
                Err(_) => {
                    return Ok(Outcome::Rejected(format!(
                        "invalid value for variable {}: '{}'",
                        name, text
                    )))
                }
            }
        }

        if self.show_postfix {
            writeln!(self.output, "Postfix: {}", postfix_text(expression))?;
        }

        let outcome = match evaluate_with(expression, &variables) {
            Ok(value) => Outcome::Value(value),
            Err(error) => {
                info!("could not evaluate '{}': {}", expression, error);
                Outcome::Rejected(error.to_string())
            }
        };
        Ok(outcome)
    }

    /// Returns the next trimmed line of input, or `None` once the input has ended.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            debug!("input ended");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Evaluates a single expression whose variables are all given up front.
pub fn evaluate_once(
    output: &mut impl Write,
    expression: &str,
    variables: &Bindings,
    show_postfix: bool,
) -> Result<()> {
    let missing: Vec<String> = extract_variables(expression)
        .into_iter()
        .filter(|name| !variables.contains_key(name))
        .collect();
    if !missing.is_empty() {
        bail!("Missing values for variables: {}", missing.join(", "));
    }

    if show_postfix {
        writeln!(output, "Postfix: {}", postfix_text(expression))?;
    }
    let value = evaluate_with(expression, variables)
        .with_context(|| format!("Could not evaluate '{}'", expression))?;
    writeln!(output, "{}", value)?;
    Ok(())
}

fn postfix_text(expression: &str) -> String {
    tokens_to_string(&to_postfix(expression))
}

fn supported_operations() -> String {
    let operators = Operator::ALL.iter().map(Operator::to_string);
    let unary_functions = UnaryFunction::ALL.iter().map(UnaryFunction::to_string);
    let binary_functions = BinaryFunction::ALL.iter().map(BinaryFunction::to_string);
    operators
        .chain(unary_functions)
        .chain(binary_functions)
        .collect::<Vec<_>>()
        .join(", ")
}
