use crate::core::{InjeqlError, Result};
use std::io::{self, BufRead, BufReader, Stdin, Write};

/// Source of interactively supplied values. One named field is requested
/// per demo cycle; the value is taken exactly as typed, so quote
/// characters pass straight through to the query builder.
pub trait PromptSource {
    /// Requests a single named value, suspending until a line arrives.
    ///
    /// # Errors
    ///
    /// Returns `InjeqlError::Prompt` when the input ends before a line is
    /// read, and `InjeqlError::Io` when reading fails outright.
    fn field(&mut self, name: &str) -> Result<String>;
}

/// Line-oriented prompt over any buffered reader. Interactive use wraps
/// stdin; tests drive it with an in-memory cursor.
#[derive(Debug)]
pub struct LinePrompt<R> {
    input: R,
}

impl LinePrompt<BufReader<Stdin>> {
    /// A prompt reading from standard input.
    pub fn stdin() -> Self {
        LinePrompt {
            input: BufReader::new(io::stdin()),
        }
    }
}

impl<R: BufRead> LinePrompt<R> {
    /// A prompt reading from the given source.
    pub fn new(input: R) -> Self {
        LinePrompt { input }
    }
}

impl<R: BufRead> PromptSource for LinePrompt<R> {
    fn field(&mut self, name: &str) -> Result<String> {
        print!("{}: ", name);
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes_read = self.input.read_line(&mut line)?;
        if bytes_read == 0 {
            return Err(InjeqlError::Prompt(format!(
                "end of input while waiting for {}",
                name
            )));
        }

        // Strip the line ending, nothing else.
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}
