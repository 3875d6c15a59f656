//! Line-oriented console I/O with colored output.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

/// Reads answers from `input` and writes menus to `output`.
///
/// Generic over the streams so whole sessions can be scripted in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: true,
        }
    }

    /// Disables color escape sequences.
    pub fn plain(mut self) -> Self {
        self.color = false;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    pub fn colored(&mut self, text: impl Display, color: Color) -> io::Result<()> {
        if self.color {
            queue!(
                self.output,
                SetForegroundColor(color),
                Print(text),
                ResetColor,
                Print("\n")
            )
        } else {
            self.line(text)
        }
    }

    pub fn title(&mut self, text: impl Display) -> io::Result<()> {
        self.colored(text, Color::Yellow)
    }

    pub fn option(&mut self, text: impl Display) -> io::Result<()> {
        self.colored(text, Color::Cyan)
    }

    pub fn success(&mut self, text: impl Display) -> io::Result<()> {
        self.colored(text, Color::Green)
    }

    pub fn notice(&mut self, text: impl Display) -> io::Result<()> {
        self.colored(text, Color::Yellow)
    }

    pub fn error(&mut self, text: impl Display) -> io::Result<()> {
        self.colored(text, Color::Red)
    }

    /// Writes `text` without a newline and reads the answer.
    ///
    /// Returns `None` once input is exhausted.
    pub fn prompt(&mut self, text: impl Display) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.read_line()
    }

    /// Reads one line without its line terminator; `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lines_until_exhausted() {
        let mut console = Console::new("first\r\nsecond\n".as_bytes(), Vec::new());
        assert_eq!(console.read_line().unwrap().as_deref(), Some("first"));
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("second"));
        assert_eq!(console.read_line().unwrap(), None);
        assert_eq!(console.into_output(), b"> ");
    }

    #[test]
    fn plain_console_writes_no_escapes() {
        let mut console = Console::new(&b""[..], Vec::new()).plain();
        console.success("done").unwrap();
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "done\n");
    }

    #[test]
    fn colored_output_wraps_text() {
        let mut console = Console::new(&b""[..], Vec::new());
        console.error("boom").unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("boom"));
        assert!(output.ends_with('\n'));
    }
}
