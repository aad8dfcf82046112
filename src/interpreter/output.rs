use std::io::{self, Write};

use crate::{
    errors::errors::{Error, ErrorImpl},
    format_number,
};

/// Receives one line of text per printed value, in execution order.
pub trait Output {
    fn emit(&mut self, line: &str) -> io::Result<()>;
}

impl Output for Vec<String> {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Emits the canonical text of a number, turning a failed write into a
/// runtime fault.
pub fn emit_value(output: &mut impl Output, value: f32) -> Result<(), Error> {
    output.emit(&format_number(value)).map_err(|error| {
        Error::runtime(ErrorImpl::OutputFailed {
            message: error.to_string(),
        })
    })
}

/// Writes every line to standard output as it is emitted.
#[derive(Debug, Default)]
pub struct StdoutOutput;

impl Output for StdoutOutput {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)
    }
}
