use crate::calc::error::CalcError;
use crate::calc::format::NumberFormat;
use crate::input::{Choice, InputError, Terminal};
use std::f64::consts::{FRAC_PI_2, PI};
use std::io::{BufRead, Write};

/// Distance from an odd multiple of pi/2 at which tangent is undefined
const TANGENT_POLE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrigFunction {
    Sine,
    Cosine,
    Tangent,
}

impl TrigFunction {
    pub fn name(self) -> &'static str {
        match self {
            TrigFunction::Sine => "sin",
            TrigFunction::Cosine => "cos",
            TrigFunction::Tangent => "tan",
        }
    }
}

impl Choice for TrigFunction {
    const ALL: &'static [Self] = &[
        TrigFunction::Sine,
        TrigFunction::Cosine,
        TrigFunction::Tangent,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    Degree,
    Radian,
}

impl AngleUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            AngleUnit::Degree => "°",
            AngleUnit::Radian => "rad",
        }
    }

    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            AngleUnit::Degree => value * PI / 180.0,
            AngleUnit::Radian => value,
        }
    }

    pub fn in_unit(self, radians: f64) -> f64 {
        match self {
            AngleUnit::Degree => radians * 180.0 / PI,
            AngleUnit::Radian => radians,
        }
    }
}

impl Choice for AngleUnit {
    const ALL: &'static [Self] = &[AngleUnit::Degree, AngleUnit::Radian];
}

/// True when `radians` sits on a pole of tangent, at pi/2 + k*pi for any k
pub fn is_tangent_pole(radians: f64) -> bool {
    (radians.rem_euclid(PI) - FRAC_PI_2).abs() < TANGENT_POLE
}

/// Evaluate `function` at `value` given in `unit`
pub fn evaluate(function: TrigFunction, unit: AngleUnit, value: f64) -> Result<f64, CalcError> {
    let radians = unit.to_radians(value);
    match function {
        TrigFunction::Sine => Ok(radians.sin()),
        TrigFunction::Cosine => Ok(radians.cos()),
        TrigFunction::Tangent => {
            if is_tangent_pole(radians) {
                return Err(CalcError::UndefinedTangent);
            }
            Ok(radians.tan())
        }
    }
}

pub fn run<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    fmt: &NumberFormat,
) -> Result<(), InputError> {
    term.say("\n===== Trigonometric Functions =====")?;
    term.say("Supported functions: 1.Sine(sin)  2.Cosine(cos)  3.Tangent(tan)")?;
    let function: TrigFunction = term.select("Select function (1-3): ")?;

    term.say("Select input unit: 1.Degree(°)  2.Radian(rad)")?;
    let unit: AngleUnit = term.select("Selection (1-2): ")?;

    let value = term.prompt_float("Enter value: ")?;

    match evaluate(function, unit, value) {
        Ok(result) => {
            tracing::debug!(function = function.name(), ?unit, value, result, "trig");
            // The value is echoed after the round trip through radians
            let shown = unit.in_unit(unit.to_radians(value));
            term.say(&format!(
                "Result: {}({} {}) = {}",
                function.name(),
                fmt.num(shown),
                unit.symbol(),
                fmt.num(result)
            ))
        }
        Err(err) => {
            tracing::warn!(function = function.name(), ?unit, value, "tangent pole");
            term.say(&err.to_string())
        }
    }
}
