mod console;

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::debug;
use rpn_calculator::interpreter::Bindings;
use std::error::Error;
use std::io;

/// Evaluates arithmetic expressions
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate. Starts an interactive session when left out
    expression: Option<String>,

    /// The value of a variable in the expression
    #[clap(
        short = 'D',
        long = "var",
        value_name = "NAME=VALUE",
        parse(try_from_str = parse_binding),
        multiple_occurrences(true),
        number_of_values = 1
    )]
    variables: Vec<(String, f64)>,

    /// Also print the expression in postfix notation
    #[clap(short, long)]
    postfix: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn parse_binding(text: &str) -> Result<(String, f64), Box<dyn Error + Send + Sync + 'static>> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| format!("no `=` found in `{}`", text))?;
    Ok((name.trim().to_string(), value.trim().parse()?))
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    debug!("{:?}", args);

    let stdout = io::stdout();
    match args.expression {
        Some(expression) => {
            let variables: Bindings = args.variables.into_iter().collect();
            console::evaluate_once(&mut stdout.lock(), &expression, &variables, args.postfix)
        }
        None => {
            let stdin = io::stdin();
            console::Session::new(stdin.lock(), stdout.lock(), args.postfix).run()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_is_split_at_equals_sign() {
        let binding = parse_binding("rate = 0.25").unwrap();
        assert_eq!(binding, ("rate".to_string(), 0.25));
    }

    #[test]
    fn binding_without_equals_sign_returns_err() {
        parse_binding("rate").expect_err("Should return Err");
    }

    #[test]
    fn binding_with_non_numeric_value_returns_err() {
        parse_binding("rate=fast").expect_err("Should return Err");
    }

    #[test]
    fn arguments_collect_repeated_variables() {
        let args = Arguments::parse_from(["rpn", "-D", "a=1", "--var", "b=2", "a + b"]);

        assert_eq!(args.expression.as_deref(), Some("a + b"));
        assert_eq!(
            args.variables,
            vec![("a".to_string(), 1.0), ("b".to_string(), 2.0)]
        );
        assert!(!args.postfix);
    }
}
