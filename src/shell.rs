//! Glue between the validator and the outside world: reading a description from a stream and
//! turning the outcome into the text the `fsa` binary writes.

use std::{fmt::Display, io::BufRead};

use crate::{diagnostics::FsaError, parser::LINE_COUNT, validation::Report};

/// Reads the first [`LINE_COUNT`] lines from `read`. The `\n` separator and a trailing `\r`
/// are removed from every line, including a last line that is not terminated. Bytes that are
/// not valid UTF-8 are replaced, so they surface as a validation error rather than a read
/// error. Anything after the first lines is ignored, and shorter input yields fewer lines.
pub fn read_lines<R: BufRead>(read: R) -> std::io::Result<Vec<String>> {
    read.split(b'\n')
        .take(LINE_COUNT)
        .map(|line| {
            line.map(|bytes| {
                let bytes = bytes.strip_suffix(b"\r").unwrap_or(&bytes[..]);
                String::from_utf8_lossy(bytes).into_owned()
            })
        })
        .collect()
}

/// Text form of the outcome of a validation. A report gives the classification followed by a
/// `Warning:` block if there are any warnings, an error is given after an `Error:` line.
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a>(pub &'a Result<Report, FsaError>);

impl Display for Rendered<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Ok(report) => {
                writeln!(f, "{}", report.completeness())?;
                if !report.diagnostics().is_empty() {
                    writeln!(f, "Warning:")?;
                    for warning in report.diagnostics().warnings() {
                        writeln!(f, "{warning}")?;
                    }
                }
                Ok(())
            }
            Err(error) => writeln!(f, "Error:\n{error}"),
        }
    }
}

/// Renders the outcome of a validation, see [`Rendered`].
pub fn render(outcome: &Result<Report, FsaError>) -> String {
    Rendered(outcome).to_string()
}
