use std::fmt;

/// A calculation that cannot produce a result. Reported, never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    DivisionByZero,
    InvalidPower,
    UndefinedTangent,
    NonPositiveArgument,
    NonPositiveBase,
    BaseIsOne,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::DivisionByZero => write!(f, "Error: Division by zero is not allowed!"),
            CalcError::InvalidPower => write!(f, "Error: Invalid power operation!"),
            CalcError::UndefinedTangent => write!(f, "Error: Tangent is undefined at this point!"),
            CalcError::NonPositiveArgument => {
                write!(f, "Error: Argument must be greater than 0! Please try again.")
            }
            CalcError::NonPositiveBase => {
                write!(f, "Error: Base must be greater than 0! Please try again.")
            }
            CalcError::BaseIsOne => write!(f, "Error: Base cannot be 1! Please try again."),
        }
    }
}

impl std::error::Error for CalcError {}
