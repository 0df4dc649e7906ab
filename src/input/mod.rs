// Validation of raw text lines and the re-prompt loops built on it

pub mod choice;
pub mod error;
pub mod terminal;
pub mod validator;

pub use choice::Choice;
pub use error::InputError;
pub use terminal::Terminal;
pub use validator::{is_float, is_integer};
