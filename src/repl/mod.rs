//! Interactive validation shell
//!
//! Reads one line at a time and reports a verdict for each. The loop itself
//! stays thin: every non-empty line that is not an exit keyword goes
//! verbatim to the recognizer, leading and trailing content included.
//!
//! The line classification is a pure function and the loop is generic over
//! its reader and writer, so both are driven by in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use crate::parser::parser::is_valid_function_header;

/// What to do with one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand<'a> {
    /// `exit` or `quit`, matched exactly: leave the loop.
    Quit,
    /// Empty line: read the next one without invoking the recognizer.
    Skip,
    /// Anything else: validate the line as typed.
    Validate(&'a str),
}

/// Classify one input line.
pub fn classify(line: &str) -> ReplCommand<'_> {
    if line == "exit" || line == "quit" {
        ReplCommand::Quit
    } else if line.is_empty() {
        ReplCommand::Skip
    } else {
        ReplCommand::Validate(line)
    }
}

/// Run the shell until the reader runs dry or an exit keyword arrives.
pub fn run<R: BufRead, W: Write>(reader: R, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "Enter a function header ('exit' to leave):")?;

    let mut lines = reader.lines();
    loop {
        write!(writer, "> ")?;
        writer.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match classify(&line) {
            ReplCommand::Quit => break,
            ReplCommand::Skip => continue,
            ReplCommand::Validate(header) => {
                let verdict = if is_valid_function_header(header) {
                    "valid function header"
                } else {
                    "invalid function header"
                };
                writeln!(writer, "\"{header}\": {verdict}")?;
                writeln!(writer)?;
            }
        }
    }

    writeln!(writer, "Done.")?;
    Ok(())
}
