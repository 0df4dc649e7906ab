use crate::calc::error::CalcError;
use crate::calc::format::NumberFormat;
use crate::input::{Choice, InputError, Terminal};
use std::io::{BufRead, Write};

/// Bases this close to 1 make the change-of-base formula blow up
const UNIT_BASE: f64 = 1e-6;

/// Which logarithm the user picked from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFunction {
    Natural,
    Common,
    CustomBase,
}

impl Choice for LogFunction {
    const ALL: &'static [Self] = &[
        LogFunction::Natural,
        LogFunction::Common,
        LogFunction::CustomBase,
    ];
}

/// A fully specified logarithm, ready to evaluate
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Logarithm {
    Natural,
    Common,
    Base(f64),
}

impl Logarithm {
    /// Render `log(x) = result` for this logarithm
    pub fn equation(&self, fmt: &NumberFormat, x: f64, result: f64) -> String {
        match self {
            Logarithm::Natural => format!("ln({}) = {}", fmt.num(x), fmt.num(result)),
            Logarithm::Common => format!("log10({}) = {}", fmt.num(x), fmt.num(result)),
            Logarithm::Base(base) => format!(
                "log_{}({}) = {}",
                fmt.num(*base),
                fmt.num(x),
                fmt.num(result)
            ),
        }
    }
}

pub fn check_argument(x: f64) -> Result<f64, CalcError> {
    if x > 0.0 {
        Ok(x)
    } else {
        Err(CalcError::NonPositiveArgument)
    }
}

pub fn check_base(base: f64) -> Result<f64, CalcError> {
    if base <= 0.0 {
        Err(CalcError::NonPositiveBase)
    } else if (base - 1.0).abs() < UNIT_BASE {
        Err(CalcError::BaseIsOne)
    } else {
        Ok(base)
    }
}

pub fn evaluate(log: Logarithm, x: f64) -> Result<f64, CalcError> {
    let x = check_argument(x)?;
    match log {
        Logarithm::Natural => Ok(x.ln()),
        Logarithm::Common => Ok(x.log10()),
        Logarithm::Base(base) => {
            let base = check_base(base)?;
            Ok(x.ln() / base.ln())
        }
    }
}

/// Keep asking for a number until `check` accepts it
fn prompt_checked<R, W, F>(
    term: &mut Terminal<R, W>,
    prompt: &str,
    check: F,
) -> Result<f64, InputError>
where
    R: BufRead,
    W: Write,
    F: Fn(f64) -> Result<f64, CalcError>,
{
    loop {
        let value = term.prompt_float(prompt)?;
        match check(value) {
            Ok(value) => return Ok(value),
            Err(err) => term.say(&err.to_string())?,
        }
    }
}

pub fn run<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    fmt: &NumberFormat,
) -> Result<(), InputError> {
    term.say("\n===== Logarithmic Functions =====")?;
    term.say("Supported functions: 1.Natural Log(ln)  2.Common Log(log10)  3.Custom Base Log")?;
    let function: LogFunction = term.select("Select function (1-3): ")?;

    let x = prompt_checked(term, "Enter argument x (x > 0): ", check_argument)?;
    let log = match function {
        LogFunction::Natural => Logarithm::Natural,
        LogFunction::Common => Logarithm::Common,
        LogFunction::CustomBase => Logarithm::Base(prompt_checked(
            term,
            "Enter base (base > 0 and base != 1): ",
            check_base,
        )?),
    };

    match evaluate(log, x) {
        Ok(result) => {
            tracing::debug!(?log, x, result, "logarithm");
            term.say(&format!("Result: {}", log.equation(fmt, x, result)))
        }
        Err(err) => {
            tracing::warn!(?log, x, error = ?err, "logarithm failed");
            term.say(&err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_logarithms() {
        assert_eq!(evaluate(Logarithm::Natural, 1.0), Ok(0.0));
        assert!((evaluate(Logarithm::Natural, std::f64::consts::E).unwrap() - 1.0).abs() < EPS);
        assert!((evaluate(Logarithm::Common, 1000.0).unwrap() - 3.0).abs() < EPS);
        assert!((evaluate(Logarithm::Base(2.0), 8.0).unwrap() - 3.0).abs() < EPS);
        assert!((evaluate(Logarithm::Base(0.5), 4.0).unwrap() + 2.0).abs() < EPS);
    }

    #[test]
    fn test_rejected_arguments() {
        assert_eq!(
            evaluate(Logarithm::Natural, 0.0),
            Err(CalcError::NonPositiveArgument)
        );
        assert_eq!(
            evaluate(Logarithm::Common, -3.0),
            Err(CalcError::NonPositiveArgument)
        );
        assert_eq!(
            evaluate(Logarithm::Base(0.0), 8.0),
            Err(CalcError::NonPositiveBase)
        );
        assert_eq!(
            evaluate(Logarithm::Base(-2.0), 8.0),
            Err(CalcError::NonPositiveBase)
        );
        assert_eq!(
            evaluate(Logarithm::Base(1.0000001), 8.0),
            Err(CalcError::BaseIsOne)
        );
    }

    #[test]
    fn test_equations() {
        let fmt = NumberFormat::default();
        assert_eq!(
            Logarithm::Natural.equation(&fmt, 1.0, 0.0),
            "ln(1.000000) = 0.000000"
        );
        assert_eq!(
            Logarithm::Common.equation(&fmt, 100.0, 2.0),
            "log10(100.000000) = 2.000000"
        );
        assert_eq!(
            Logarithm::Base(2.0).equation(&fmt, 8.0, 3.0),
            "log_2.000000(8.000000) = 3.000000"
        );
    }
}
