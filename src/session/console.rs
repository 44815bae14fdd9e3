use crate::error::{GwaError, GwaResult};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Line-oriented prompt/response channel the session talks through.
pub trait Console {
    /// Shows `prompt` without a trailing newline and returns the next line of
    /// input with its line ending removed. End of input is
    /// [`GwaError::InputClosed`].
    fn read_line(&mut self, prompt: &str) -> GwaResult<String>;

    fn write_line(&mut self, line: &str) -> GwaResult<()>;
}

/// [`Console`] over any reader/writer pair.
pub struct Terminal<R, W> {
    reader: R,
    writer: W,
}

impl Terminal<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> GwaResult<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        // Invalid UTF-8 becomes U+FFFD so it fails parsing instead of the read.
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Err(GwaError::InputClosed);
        }
        let line = String::from_utf8_lossy(&bytes);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn write_line(&mut self, line: &str) -> GwaResult<()> {
        writeln!(self.writer, "{}", line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_crlf_and_echoes_prompt() {
        let mut term = Terminal::new(Cursor::new("Math\r\nnext\n"), Vec::new());
        assert_eq!(term.read_line("name: ").unwrap(), "Math");
        assert_eq!(term.read_line("again: ").unwrap(), "next");
        assert_eq!(String::from_utf8(term.into_writer()).unwrap(), "name: again: ");
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_an_error() {
        let mut term = Terminal::new(Cursor::new(&b"Ma\xfft\n\xff\n"[..]), Vec::new());
        assert_eq!(term.read_line("").unwrap(), "Ma\u{FFFD}t");
        assert_eq!(term.read_line("").unwrap(), "\u{FFFD}");
    }

    #[test]
    fn test_end_of_input_is_input_closed() {
        let mut term = Terminal::new(Cursor::new(""), Vec::new());
        assert!(matches!(term.read_line("> "), Err(GwaError::InputClosed)));
    }
}
