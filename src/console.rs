use std::io::{BufRead, Write};

use crate::error::{BikeshareError, Result};

pub const SEPARATOR: &str = "----------------------------------------";

/// Line-oriented prompt/answer channel. Generic over the streams so the
/// session can run against stdin/stdout or an in-memory script.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and read one answer, trimmed and lowercased.
    /// `None` once the input is closed.
    fn read_answer(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }

    /// Fails with `InputClosed` once the input is closed.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        self.read_answer(question)?.ok_or(BikeshareError::InputClosed)
    }

    /// Only a literal `yes` counts as agreement; closed input declines.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(self.read_answer(question)?.as_deref() == Some("yes"))
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
