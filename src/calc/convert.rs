//! Unit conversion through one pivot unit per domain.
//!
//! Every unit knows how to reach its domain's pivot (centimeter, Celsius,
//! gram) and how to come back, so a conversion is always
//! `to.in_unit(from.to_pivot(value))`.

use crate::calc::format::NumberFormat;
use crate::input::{Choice, InputError, Terminal};
use std::io::{BufRead, Write};

/// A unit within one conversion domain
pub trait Unit: Choice {
    /// Display label with symbol, e.g. "Meter(m)"
    fn label(self) -> &'static str;

    fn to_pivot(self, value: f64) -> f64;

    fn in_unit(self, pivot: f64) -> f64;
}

pub fn convert<U: Unit>(value: f64, from: U, to: U) -> f64 {
    to.in_unit(from.to_pivot(value))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Length,
    Temperature,
    Weight,
}

impl Choice for Domain {
    const ALL: &'static [Self] = &[Domain::Length, Domain::Temperature, Domain::Weight];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Meter,
    Centimeter,
    Inch,
    Foot,
}

impl LengthUnit {
    /// Centimeters per unit
    pub fn factor(self) -> f64 {
        match self {
            LengthUnit::Meter => 100.0,
            LengthUnit::Centimeter => 1.0,
            LengthUnit::Inch => 2.54,
            LengthUnit::Foot => 30.48,
        }
    }
}

impl Choice for LengthUnit {
    const ALL: &'static [Self] = &[
        LengthUnit::Meter,
        LengthUnit::Centimeter,
        LengthUnit::Inch,
        LengthUnit::Foot,
    ];
}

impl Unit for LengthUnit {
    fn label(self) -> &'static str {
        match self {
            LengthUnit::Meter => "Meter(m)",
            LengthUnit::Centimeter => "Centimeter(cm)",
            LengthUnit::Inch => "Inch(in)",
            LengthUnit::Foot => "Foot(ft)",
        }
    }

    fn to_pivot(self, value: f64) -> f64 {
        value * self.factor()
    }

    fn in_unit(self, pivot: f64) -> f64 {
        pivot / self.factor()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Choice for TemperatureUnit {
    const ALL: &'static [Self] = &[
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];
}

impl Unit for TemperatureUnit {
    fn label(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius(°C)",
            TemperatureUnit::Fahrenheit => "Fahrenheit(°F)",
            TemperatureUnit::Kelvin => "Kelvin(K)",
        }
    }

    fn to_pivot(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureUnit::Kelvin => value - 273.15,
        }
    }

    fn in_unit(self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            TemperatureUnit::Kelvin => celsius + 273.15,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Kilogram,
    Gram,
    Pound,
}

impl WeightUnit {
    /// Grams per unit
    pub fn factor(self) -> f64 {
        match self {
            WeightUnit::Kilogram => 1000.0,
            WeightUnit::Gram => 1.0,
            WeightUnit::Pound => 453.592,
        }
    }
}

impl Choice for WeightUnit {
    const ALL: &'static [Self] = &[WeightUnit::Kilogram, WeightUnit::Gram, WeightUnit::Pound];
}

impl Unit for WeightUnit {
    fn label(self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "Kilogram(kg)",
            WeightUnit::Gram => "Gram(g)",
            WeightUnit::Pound => "Pound(lb)",
        }
    }

    fn to_pivot(self, value: f64) -> f64 {
        value * self.factor()
    }

    fn in_unit(self, pivot: f64) -> f64 {
        pivot / self.factor()
    }
}

/// Pick source and target units of one domain, then report the conversion
fn convert_in<U, R, W>(
    term: &mut Terminal<R, W>,
    fmt: &NumberFormat,
    heading: &str,
    value: f64,
) -> Result<(), InputError>
where
    U: Unit,
    R: BufRead,
    W: Write,
{
    let menu: Vec<String> = U::ALL
        .iter()
        .enumerate()
        .map(|(i, unit)| format!("{}.{}", i + 1, short_name(unit.label())))
        .collect();
    term.say(&format!("\n{} units: {}", heading, menu.join("  ")))?;

    let count = U::count();
    let from: U = term.select(&format!("Select source unit (1-{}): ", count))?;
    let to: U = term.select(&format!("Select target unit (1-{}): ", count))?;

    let result = convert(value, from, to);
    tracing::debug!(value, from = from.label(), to = to.label(), result, "convert");
    term.say(&format!(
        "Result: {} {} = {} {}",
        fmt.num(value),
        from.label(),
        fmt.num(result),
        to.label()
    ))
}

/// "Meter(m)" is listed in menus as "Meter"
fn short_name(label: &str) -> &str {
    label.split('(').next().unwrap_or(label)
}

pub fn run<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    fmt: &NumberFormat,
) -> Result<(), InputError> {
    term.say("\n===== Unit Conversion =====")?;
    term.say("Supported types: 1.Length  2.Temperature  3.Weight")?;
    let domain: Domain = term.select("Select conversion type (1-3): ")?;

    let value = term.prompt_float("Enter value to convert: ")?;

    match domain {
        Domain::Length => convert_in::<LengthUnit, _, _>(term, fmt, "Length", value),
        Domain::Temperature => {
            convert_in::<TemperatureUnit, _, _>(term, fmt, "Temperature", value)
        }
        Domain::Weight => convert_in::<WeightUnit, _, _>(term, fmt, "Weight", value),
    }
}
