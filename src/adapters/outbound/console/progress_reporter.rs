use crate::ports::outbound::ProgressReporter;
use std::cell::RefCell;
use std::io::{self, Stdout, Write};

/// ConsoleProgressReporter adapter for reporting status lines
///
/// Write errors (e.g. a closed pipe) are ignored; status lines are best effort.
pub struct ConsoleProgressReporter<W> {
    output: RefCell<W>,
}

/// Reporter wired to the process's stdout
pub type StdoutProgressReporter = ConsoleProgressReporter<Stdout>;

impl<W: Write> ConsoleProgressReporter<W> {
    pub fn with_writer(output: W) -> Self {
        Self {
            output: RefCell::new(output),
        }
    }

    pub fn into_inner(self) -> W {
        self.output.into_inner()
    }
}

impl StdoutProgressReporter {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for StdoutProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ProgressReporter for ConsoleProgressReporter<W> {
    fn report(&self, message: &str) {
        let _ = writeln!(self.output.borrow_mut(), "{}", message);
    }

    fn report_inline(&self, message: &str) {
        let mut output = self.output.borrow_mut();
        let _ = write!(output, "{}", message);
        let _ = output.flush();
    }

    fn report_error(&self, message: &str) {
        let _ = writeln!(self.output.borrow_mut(), "{}", message);
    }
}
