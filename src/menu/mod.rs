//! Main menu of the interactive session.
//!
//! Loops over the four calculators until the user picks exit. After each
//! calculator the user must type `b` or `B` to get back to the menu.

use crate::calc::{arithmetic, convert, log, trig, NumberFormat};
use crate::input::{Choice, InputError, Terminal};
use std::io::{BufRead, Write};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Arithmetic,
    Trigonometry,
    Logarithm,
    UnitConversion,
    Exit,
}

impl MenuItem {
    pub fn description(self) -> &'static str {
        match self {
            MenuItem::Arithmetic => {
                "Basic Arithmetic (Add, Subtract, Multiply, Divide, Modulus, Power)"
            }
            MenuItem::Trigonometry => {
                "Trigonometric Functions (sin, cos, tan; Degree/Radian support)"
            }
            MenuItem::Logarithm => "Logarithmic Functions (Natural log, Common log, Custom base)",
            MenuItem::UnitConversion => "Unit Conversion (Length, Temperature, Weight)",
            MenuItem::Exit => "Exit",
        }
    }
}

impl Choice for MenuItem {
    const ALL: &'static [Self] = &[
        MenuItem::Arithmetic,
        MenuItem::Trigonometry,
        MenuItem::Logarithm,
        MenuItem::UnitConversion,
        MenuItem::Exit,
    ];
}

fn print_menu<R: BufRead, W: Write>(term: &mut Terminal<R, W>) -> Result<(), InputError> {
    term.say("\n=========== Scientific Calculator ===========")?;
    for (i, item) in MenuItem::ALL.iter().enumerate() {
        term.say(&format!("\t{}. {}", i + 1, item.description()))?;
    }
    term.say("=============================================")
}

/// Block until the user types exactly `b` or `B`
fn back_to_main<R: BufRead, W: Write>(term: &mut Terminal<R, W>) -> Result<(), InputError> {
    loop {
        term.write("\nEnter 'b' or 'B' to return to main menu: ")?;
        if term.read_line()?.eq_ignore_ascii_case("b") {
            return Ok(());
        }
    }
}

/// Run the session until the user exits
pub fn run<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    fmt: &NumberFormat,
) -> Result<(), InputError> {
    loop {
        print_menu(term)?;
        let item: MenuItem = term.select_with(
            &format!("\nSelect function (enter number 1-{}): ", MenuItem::count()),
            &format!(
                "Invalid input! Please select a number between 1-{}.",
                MenuItem::count()
            ),
        )?;
        tracing::debug!(?item, "menu selection");

        match item {
            MenuItem::Arithmetic => arithmetic::run(term, fmt)?,
            MenuItem::Trigonometry => trig::run(term, fmt)?,
            MenuItem::Logarithm => log::run(term, fmt)?,
            MenuItem::UnitConversion => convert::run(term, fmt)?,
            MenuItem::Exit => {
                term.say("\nThank you for using. Goodbye!")?;
                return Ok(());
            }
        }
        back_to_main(term)?;
    }
}
