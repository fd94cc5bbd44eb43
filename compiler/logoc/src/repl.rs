//! Interactive driver.
//!
//! A [`Session`] accumulates input lines. After each line the whole buffer
//! is evaluated from scratch: an unterminated program keeps the buffer and
//! asks for more, any other outcome clears it. Definitions made by
//! successful (and partially analyzed) attempts stay in the interpreter.

use std::io::{self, BufRead, Write};

use logo_eval::{Interpreter, LogoError, Value};
use tracing::debug;

use crate::host::Host;

pub const PROMPT: &str = "logo > ";
pub const CONTINUATION_PROMPT: &str = "  ... > ";

/// Result of feeding one line to a [`Session`].
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// The buffer formed a complete program.
    Value(Value),
    /// The buffer is a prefix of a program; more input is needed.
    Incomplete,
    Failed(LogoError),
    /// The program asked the driver to stop.
    Quit,
}

pub struct Session {
    host: Host,
    interpreter: Interpreter,
    buffer: String,
}

impl Session {
    pub fn new(host: Host, interpreter: Interpreter) -> Self {
        Session {
            host,
            interpreter,
            buffer: String::new(),
        }
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Whether earlier lines are waiting for the rest of a program.
    pub fn is_pending(&self) -> bool {
        !self.buffer.is_empty()
    }

    pub fn prompt(&self) -> &'static str {
        if self.is_pending() {
            CONTINUATION_PROMPT
        } else {
            PROMPT
        }
    }

    pub fn feed(&mut self, line: &str) -> Outcome {
        self.buffer.push_str(line);
        let outcome = match self.interpreter.eval(&self.buffer) {
            Ok(value) => Outcome::Value(value),
            Err(err) if err.is_incomplete() => {
                debug!(%err, "waiting for more input");
                self.buffer.push('\n');
                return Outcome::Incomplete;
            }
            Err(err) => Outcome::Failed(err),
        };
        self.buffer.clear();
        if self.host.quit_requested() {
            Outcome::Quit
        } else {
            outcome
        }
    }

    /// Drop a pending partial program.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Names visible to programs that start with `prefix`, sorted.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        self.interpreter
            .env()
            .all_keys()
            .into_iter()
            .filter(|name| name.starts_with(&prefix))
            .collect()
    }
}

/// Run the read-eval-print loop until end of input or `quit`.
pub fn run_repl<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    session: &mut Session,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{}", session.prompt())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        match session.feed(line.trim_end_matches(['\n', '\r'])) {
            Outcome::Value(value) => {
                if !value.is_unit() {
                    writeln!(output, " => {value}")?;
                }
            }
            Outcome::Incomplete => {}
            Outcome::Failed(err) => writeln!(output, "error: {err}")?,
            Outcome::Quit => return Ok(()),
        }
    }
}
