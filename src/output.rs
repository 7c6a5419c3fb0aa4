#![forbid(unsafe_code)]

//! Status output
//!
//! Human-readable progress goes to stderr, one line per stage, so stdout
//! stays clean for data (the JSONL rule listing). Coloring follows the
//! global --color choice.

use std::fmt::Display;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes stage status and warning lines to stderr
pub struct StatusReporter {
    stream: StandardStream,
}

impl StatusReporter {
    /// Creates a reporter with the given color behavior
    pub fn new(choice: ColorChoice) -> Self {
        StatusReporter {
            stream: StandardStream::stderr(choice),
        }
    }

    /// One line for a completed stage
    pub fn stage_ok(&mut self, name: &str) {
        let _ = self.colored(Color::Green, "ok", &format!("stage '{}'", name));
    }

    /// One line for a failed stage, with the underlying cause
    pub fn stage_error(&mut self, name: &str, cause: &dyn Display) {
        let _ = self.colored(Color::Red, "error", &format!("stage '{}': {}", name, cause));
    }

    /// A pre-flight warning line
    pub fn warn(&mut self, message: &str) {
        let _ = self.colored(Color::Yellow, "warning", message);
    }

    fn colored(&mut self, color: Color, label: &str, message: &str) -> std::io::Result<()> {
        self.stream
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(self.stream, "{}", label)?;
        self.stream.reset()?;
        writeln!(self.stream, ": {}", message)
    }
}
