use crate::interpreter::error::{EvaluationError, Result};
use std::fmt;
use std::fmt::Formatter;

/// A binary mathematical operator, written between its operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Exponentiate,
}

/// A function of a single argument, e.g. `sqrt(x)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryFunction {
    SquareRoot,
    Sine,
    Cosine,
    Tangent,
    NaturalLogarithm,
    CommonLogarithm,
    Exponential,
    AbsoluteValue,
    Floor,
    /// Unary minus. It has no name of its own and is only produced for a `-` that
    /// stands where an operand is expected.
    Negate,
}

/// A function of two arguments, e.g. `min(x y)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryFunction {
    Minimum,
    Maximum,
}

/// A named function, applied to the value of its parenthesized argument list.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    Unary(UnaryFunction),
    Binary(BinaryFunction),
}

/// Functions bind tighter than every operator.
const FUNCTION_PRECEDENCE: u8 = 4;

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Remainder,
        Operator::Exponentiate,
    ];

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Remainder => '%',
            Operator::Exponentiate => '^',
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        Self::ALL
            .into_iter()
            .find(|operator| symbol.len() == 1 && symbol.starts_with(operator.symbol()))
    }

    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide | Operator::Remainder => 2,
            Operator::Exponentiate => 3,
        }
    }

    pub(crate) fn precedence_ge(&self, other: &Self) -> bool {
        self.precedence().ge(&other.precedence())
    }

    /// Applies the operator to its operands, `left <op> right`.
    pub fn evaluate(&self, left: f64, right: f64) -> Result<f64> {
        let value = match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => {
                self.check_right_operand(right)?;
                left / right
            }
            Operator::Remainder => {
                self.check_right_operand(right)?;
                left % right
            }
            Operator::Exponentiate => left.powf(right),
        };
        Ok(value)
    }

    /// Fails if `right` cannot be used as the right operand of this operator.
    pub(crate) fn check_right_operand(&self, right: f64) -> Result<()> {
        let divides = matches!(self, Operator::Divide | Operator::Remainder);
        if divides && right == 0.0 {
            return Err(EvaluationError::DivideByZero(*self));
        }
        Ok(())
    }
}

impl UnaryFunction {
    /// The functions that can be called by name.
    pub const ALL: [UnaryFunction; 9] = [
        UnaryFunction::SquareRoot,
        UnaryFunction::Sine,
        UnaryFunction::Cosine,
        UnaryFunction::Tangent,
        UnaryFunction::NaturalLogarithm,
        UnaryFunction::CommonLogarithm,
        UnaryFunction::Exponential,
        UnaryFunction::AbsoluteValue,
        UnaryFunction::Floor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            UnaryFunction::SquareRoot => "sqrt",
            UnaryFunction::Sine => "sin",
            UnaryFunction::Cosine => "cos",
            UnaryFunction::Tangent => "tan",
            UnaryFunction::NaturalLogarithm => "ln",
            UnaryFunction::CommonLogarithm => "log",
            UnaryFunction::Exponential => "exp",
            UnaryFunction::AbsoluteValue => "abs",
            UnaryFunction::Floor => "floor",
            UnaryFunction::Negate => "neg",
        }
    }

    pub fn evaluate(&self, x: f64) -> Result<f64> {
        let value = match self {
            UnaryFunction::SquareRoot => {
                self.require(x >= 0.0, x)?;
                x.sqrt()
            }
            UnaryFunction::Sine => x.sin(),
            UnaryFunction::Cosine => x.cos(),
            UnaryFunction::Tangent => x.tan(),
            UnaryFunction::NaturalLogarithm => {
                self.require(x > 0.0, x)?;
                x.ln()
            }
            UnaryFunction::CommonLogarithm => {
                self.require(x > 0.0, x)?;
                x.log10()
            }
            UnaryFunction::Exponential => x.exp(),
            UnaryFunction::AbsoluteValue => x.abs(),
            UnaryFunction::Floor => x.floor(),
            UnaryFunction::Negate => -x,
        };
        Ok(value)
    }

    fn require(&self, in_domain: bool, argument: f64) -> Result<()> {
        if in_domain {
            Ok(())
        } else {
            Err(EvaluationError::DomainError {
                function: *self,
                argument,
            })
        }
    }
}

impl BinaryFunction {
    pub const ALL: [BinaryFunction; 2] = [BinaryFunction::Minimum, BinaryFunction::Maximum];

    pub fn name(&self) -> &'static str {
        match self {
            BinaryFunction::Minimum => "min",
            BinaryFunction::Maximum => "max",
        }
    }

    pub fn evaluate(&self, a: f64, b: f64) -> f64 {
        match self {
            BinaryFunction::Minimum => a.min(b),
            BinaryFunction::Maximum => a.max(b),
        }
    }
}

impl Function {
    pub fn name(&self) -> &'static str {
        match self {
            Function::Unary(function) => function.name(),
            Function::Binary(function) => function.name(),
        }
    }

    /// Looks up a function by its exact, case-sensitive name.
    pub fn from_name(name: &str) -> Option<Function> {
        UnaryFunction::ALL
            .into_iter()
            .find(|function| function.name() == name)
            .map(Function::Unary)
            .or_else(|| {
                BinaryFunction::ALL
                    .into_iter()
                    .find(|function| function.name() == name)
                    .map(Function::Binary)
            })
    }

    pub fn precedence(&self) -> u8 {
        FUNCTION_PRECEDENCE
    }

    pub fn arity(&self) -> usize {
        match self {
            Function::Unary(_) => 1,
            Function::Binary(_) => 2,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for UnaryFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for BinaryFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
