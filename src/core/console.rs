//! Console seam for status lines and yes/no prompts.

use crate::error::Result;

/// Where the renamer reports progress and asks for confirmation.
pub trait Console {
    /// Print one status line.
    fn say(&mut self, line: &str) -> Result<()>;

    /// Show `message` (no trailing newline) and block for one line of input.
    ///
    /// Returns the raw line. Closed or unreadable input is an error, never an
    /// empty answer.
    fn prompt(&mut self, message: &str) -> Result<String>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn say(&mut self, line: &str) -> Result<()> {
        (**self).say(line)
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        (**self).prompt(message)
    }
}
