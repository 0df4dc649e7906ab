use crate::input::choice::Choice;
use crate::input::error::InputError;
use crate::input::validator::{is_float, is_integer};
use std::io::{BufRead, Write};

/// Line-based prompting over any reader/writer pair
///
/// Every prompt loops until the input is acceptable. The only way out of a
/// prompt without a value is an `InputError`, which callers propagate.
pub struct Terminal<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, mainly to inspect captured output
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write text without a line break and flush so the prompt is visible
    pub fn write(&mut self, text: &str) -> Result<(), InputError> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a full line
    pub fn say(&mut self, text: &str) -> Result<(), InputError> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    /// Read one line with its line terminator removed
    /// Bytes that are not UTF-8 become replacement characters, so such a
    /// line is rejected by the validators instead of ending the session.
    pub fn read_line(&mut self) -> Result<String, InputError> {
        let mut buf = Vec::new();
        let read = self.reader.read_until(b'\n', &mut buf)?;
        if read == 0 {
            return Err(InputError::Closed);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Show `prompt` and hand each answer to `accept` until it yields a value.
    /// A rejected answer prints the returned message and asks again.
    pub fn prompt_with<T, F>(&mut self, prompt: &str, mut accept: F) -> Result<T, InputError>
    where
        F: FnMut(&str) -> Result<T, String>,
    {
        loop {
            self.write(prompt)?;
            let line = self.read_line()?;
            match accept(&line) {
                Ok(value) => return Ok(value),
                Err(message) => {
                    tracing::debug!(input = %line, "rejected input");
                    self.say(&message)?;
                }
            }
        }
    }

    /// Ask for a decimal number until one is given
    pub fn prompt_float(&mut self, prompt: &str) -> Result<f64, InputError> {
        self.prompt_with(prompt, parse_float)
    }

    /// Ask for an integer in `[lo, hi]` until one is given
    pub fn prompt_integer_in_range(
        &mut self,
        prompt: &str,
        lo: i64,
        hi: i64,
    ) -> Result<i64, InputError> {
        self.prompt_with(prompt, |text| parse_integer_in_range(text, lo, hi))
    }

    /// Ask for one of the options of `T` by its 1-based number
    pub fn select<T: Choice>(&mut self, prompt: &str) -> Result<T, InputError> {
        self.select_with(prompt, &range_message(1, T::count()))
    }

    /// Like `select`, but out-of-range numbers report `out_of_range`
    pub fn select_with<T: Choice>(
        &mut self,
        prompt: &str,
        out_of_range: &str,
    ) -> Result<T, InputError> {
        self.prompt_with(prompt, |text| {
            if !is_integer(text) {
                return Err(INTEGER_MESSAGE.to_string());
            }
            text.parse::<i64>()
                .ok()
                .and_then(T::from_number)
                .ok_or_else(|| out_of_range.to_string())
        })
    }
}

fn parse_float(text: &str) -> Result<f64, String> {
    const MESSAGE: &str = "Invalid input! Please enter a valid float number.";
    if !is_float(text) {
        return Err(MESSAGE.to_string());
    }
    text.parse::<f64>().map_err(|_| MESSAGE.to_string())
}

const INTEGER_MESSAGE: &str = "Invalid input! Please enter an integer.";

fn parse_integer_in_range(text: &str, lo: i64, hi: i64) -> Result<i64, String> {
    if !is_integer(text) {
        return Err(INTEGER_MESSAGE.to_string());
    }
    // Digits beyond the i64 range can never be a valid selection
    match text.parse::<i64>() {
        Ok(value) if (lo..=hi).contains(&value) => Ok(value),
        _ => Err(range_message(lo, hi)),
    }
}

fn range_message(lo: i64, hi: i64) -> String {
    format!("Invalid selection! Please enter {}-{}.", lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn terminal(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(term: Terminal<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(term.into_writer()).unwrap()
    }

    #[test]
    fn test_read_line_strips_terminators() {
        let mut term = terminal("first\r\nsecond\nthird");
        assert_eq!(term.read_line().unwrap(), "first");
        assert_eq!(term.read_line().unwrap(), "second");
        assert_eq!(term.read_line().unwrap(), "third");
        assert!(matches!(term.read_line(), Err(InputError::Closed)));
    }

    #[test]
    fn test_prompt_float_reprompts() {
        let mut term = terminal("abc\n1.2.3\n\n-2.5\n");
        let value = term.prompt_float("Value: ").unwrap();
        assert_eq!(value, -2.5);

        let out = output(term);
        assert_eq!(out.matches("Value: ").count(), 4);
        assert_eq!(
            out.matches("Invalid input! Please enter a valid float number.")
                .count(),
            3
        );
    }

    #[test]
    fn test_prompt_float_reprompts_on_invalid_utf8() {
        let mut term = Terminal::new(Cursor::new(b"\xff\xfe\n2.5\n".to_vec()), Vec::new());
        assert_eq!(term.prompt_float("Value: ").unwrap(), 2.5);

        let out = output(term);
        assert_eq!(out.matches("Value: ").count(), 2);
        assert!(out.contains("Invalid input! Please enter a valid float number."));
    }

    #[test]
    fn test_prompt_integer_reprompts_on_invalid_utf8() {
        let mut term = Terminal::new(Cursor::new(b"1\xc3\n2\n".to_vec()), Vec::new());
        assert_eq!(term.prompt_integer_in_range("Pick: ", 1, 3).unwrap(), 2);
        assert!(output(term).contains("Please enter an integer."));
    }

    #[test]
    fn test_prompt_float_closed_stream() {
        let mut term = terminal("oops\n");
        assert!(matches!(
            term.prompt_float("Value: "),
            Err(InputError::Closed)
        ));
    }

    #[test]
    fn test_prompt_integer_in_range() {
        let mut term = terminal("x\n0\n99999999999999999999\n4\n3\n");
        let value = term.prompt_integer_in_range("Pick: ", 1, 3).unwrap();
        assert_eq!(value, 3);

        let out = output(term);
        assert_eq!(out.matches("Please enter an integer.").count(), 1);
        assert_eq!(out.matches("Invalid selection! Please enter 1-3.").count(), 3);
    }

    #[test]
    fn test_select_maps_number_to_option() {
        #[derive(Debug, Clone, Copy, PartialEq)]
        enum Side {
            Left,
            Right,
        }

        impl Choice for Side {
            const ALL: &'static [Self] = &[Side::Left, Side::Right];
        }

        let mut term = terminal("3\n+2\n");
        assert_eq!(term.select::<Side>("Side: ").unwrap(), Side::Right);
        assert!(output(term).contains("Invalid selection! Please enter 1-2."));

        let mut term = terminal("left\n0\n1\n");
        assert_eq!(
            term.select_with::<Side>("Side: ", "Pick a side, 1 or 2.").unwrap(),
            Side::Left
        );
        let out = output(term);
        assert!(out.contains("Invalid input! Please enter an integer."));
        assert!(out.contains("Pick a side, 1 or 2."));
        assert!(!out.contains("Invalid selection!"));
    }
}
