//! Line-oriented operator I/O.

use crate::error::{PosError, Result};
use std::io::{BufRead, Write};

/// The operator's terminal: one prompt outstanding at a time.
///
/// Generic over the reader and writer so sessions can be driven from a
/// script in tests and from stdin/stdout in the binary.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Terminal { input, output }
    }

    /// Writes `text` without a newline, then reads one line of input.
    ///
    /// The trailing line terminator is stripped. Returns
    /// [`PosError::InputClosed`] once the input stream is exhausted.
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PosError::InputClosed);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Writes one line of output.
    pub fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Direct access to the output, for multi-line renderers.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the terminal and returns the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}
