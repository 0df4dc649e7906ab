// The four calculators. Each exposes a pure `evaluate`/`convert` entry point
// and a `run` flow that prompts for its inputs and prints one result line.

pub mod arithmetic;
pub mod convert;
pub mod error;
pub mod format;
pub mod log;
pub mod trig;


pub use error::CalcError;
pub use format::NumberFormat;
