use crate::ports::outbound::PathPrompt;
use crate::shared::Result;
use std::cell::RefCell;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// ConsolePathPrompt adapter - prints a prompt and reads one line back
///
/// Generic over the streams so it can be exercised against buffers; see
/// `StdinPathPrompt` for the terminal-backed alias.
pub struct ConsolePathPrompt<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

/// Prompt wired to the process's stdin and stdout
pub type StdinPathPrompt = ConsolePathPrompt<StdinLock<'static>, Stdout>;

impl<R, W> ConsolePathPrompt<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input.into_inner(), self.output.into_inner())
    }
}

impl StdinPathPrompt {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R, W> PathPrompt for ConsolePathPrompt<R, W>
where
    R: BufRead,
    W: Write,
{
    fn prompt_path(&self, message: &str) -> Result<String> {
        {
            let mut output = self.output.borrow_mut();
            write!(output, "{}", message)?;
            output.flush()?;
        }

        let mut line = String::new();
        let read = self.input.borrow_mut().read_line(&mut line)?;
        if read == 0 {
            log::debug!("Input closed while waiting for a path");
            return Ok(String::new());
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}
