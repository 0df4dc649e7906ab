use crate::calc::error::CalcError;
use crate::calc::format::NumberFormat;
use crate::input::{InputError, Terminal};
use std::fmt;
use std::io::{BufRead, Write};

/// Divisors closer to zero than this are treated as zero
const ZERO_DIVISOR: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Integer remainder of both operands truncated toward zero
    Modulus,
    Power,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Modulus,
        Operator::Power,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Modulus => '%',
            Operator::Power => '^',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Subtract => Ok(a - b),
            Operator::Multiply => Ok(a * b),
            Operator::Divide => {
                if b.abs() < ZERO_DIVISOR {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(a / b)
            }
            Operator::Modulus => {
                if b.abs() < ZERO_DIVISOR {
                    return Err(CalcError::DivisionByZero);
                }
                // Fractional parts are dropped before taking the remainder,
                // so a divisor such as 0.5 truncates to zero as well
                let (a, b) = (a.trunc() as i64, b.trunc() as i64);
                if b == 0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(a.wrapping_rem(b) as f64)
            }
            Operator::Power => {
                let result = a.powf(b);
                if result.is_finite() {
                    Ok(result)
                } else {
                    Err(CalcError::InvalidPower)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

pub fn evaluate(a: f64, op: Operator, b: f64) -> Result<f64, CalcError> {
    op.apply(a, b)
}

fn parse_operator(text: &str) -> Result<Operator, String> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Operator::from_symbol(symbol)
            .ok_or_else(|| "Unsupported operator! Please try again.".to_string()),
        _ => Err("Invalid input! Please enter a single operator.".to_string()),
    }
}

/// Two operands, one operator, one result line
pub fn run<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    fmt: &NumberFormat,
) -> Result<(), InputError> {
    term.say("\n===== Basic Arithmetic =====")?;
    term.say(
        "Supported operators: + (Add), - (Subtract), * (Multiply), / (Divide), \
         % (Modulus, integer only), ^ (Power)",
    )?;

    let a = term.prompt_float("Enter first number: ")?;
    let b = term.prompt_float("Enter second number: ")?;
    let op = term.prompt_with("Enter operator (+, -, *, /, %, ^): ", parse_operator)?;

    match evaluate(a, op, b) {
        Ok(result) => {
            tracing::debug!(a, b, %op, result, "arithmetic");
            term.say(&format!(
                "Result: {} {} {} = {}",
                fmt.num(a),
                op,
                fmt.num(b),
                fmt.num(result)
            ))
        }
        Err(err) => {
            tracing::warn!(a, b, %op, error = ?err, "arithmetic failed");
            term.say(&err.to_string())
        }
    }
}
