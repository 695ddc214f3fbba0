//! Terminal I/O for the CLI.
//!
//! Provides the stdin-backed `Console` used by the rename command.

use std::io::{self, BufRead, IsTerminal, Write};

use stampr::console::Console;
use stampr::{Error, Result};

pub fn is_stdin_tty() -> bool {
    io::stdin().is_terminal()
}

/// Which stream status lines and prompts are written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    /// Keeps stdout free for the JSON envelope.
    Stderr,
}

pub struct TerminalConsole {
    stream: Stream,
}

impl TerminalConsole {
    pub fn new(stream: Stream) -> Self {
        Self { stream }
    }

    fn write(&self, text: &str, newline: bool) -> Result<()> {
        let result = match self.stream {
            Stream::Stdout => write_to(&mut io::stdout().lock(), text, newline),
            Stream::Stderr => write_to(&mut io::stderr().lock(), text, newline),
        };
        result.map_err(|e| Error::internal_io(e.to_string(), Some("write console".to_string())))
    }
}

fn write_to(out: &mut impl Write, text: &str, newline: bool) -> io::Result<()> {
    if newline {
        writeln!(out, "{}", text)?;
    } else {
        write!(out, "{}", text)?;
    }
    out.flush()
}

impl Console for TerminalConsole {
    fn say(&mut self, line: &str) -> Result<()> {
        self.write(line, true)
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        self.write(message, false)?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::console_read_failed(Some(e.to_string())))?;

        if read == 0 {
            return Err(Error::console_read_failed(None));
        }

        Ok(line)
    }
}
