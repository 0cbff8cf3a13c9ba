use crate::domain::ports::Console;
use crate::utils::error::{Result, StudentMarkError};
use std::io::{BufRead, Write};

/// Console over any reader/writer pair: stdin/stdout in the binary, buffers in tests.
pub struct LineConsole<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl LineConsole<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }

        let mut line = String::from_utf8(bytes).map_err(|e| {
            let lossy = String::from_utf8_lossy(e.as_bytes());
            StudentMarkError::invalid_input("input", lossy.trim_end(), "not valid UTF-8")
        })?;

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_until_eof() {
        let mut console = LineConsole::new(Cursor::new("1\r\nhello world\n"), Vec::new());
        assert_eq!(console.read_line().unwrap(), Some("1".to_string()));
        assert_eq!(console.read_line().unwrap(), Some("hello world".to_string()));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_line_is_recoverable() {
        let mut console = LineConsole::new(Cursor::new(b"Ad\xffa\nnext\n".to_vec()), Vec::new());
        let err = console.read_line().unwrap_err();
        assert!(matches!(err, StudentMarkError::InvalidInput { ref field, .. } if field == "input"));
        assert!(err.is_recoverable());
        assert_eq!(console.read_line().unwrap(), Some("next".to_string()));
    }

    #[test]
    fn test_writes_lines() {
        let mut console = LineConsole::new(Cursor::new(""), Vec::new());
        console.write_line("a").unwrap();
        console.write_line("b").unwrap();
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "a\nb\n");
    }
}
