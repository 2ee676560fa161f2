//! Output file writing and console reporting.

use std::path::Path;

use tracing::debug;

use crate::cli::VerbosityLevel;
use crate::error::{ExtractError, Result};
use crate::extractor::RunReport;

/// Join values with a single newline, no trailing newline.
pub fn serialize<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|value| value.as_ref())
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Fail unless the directory that will hold `output_path` exists.
///
/// A bare file name refers to the current directory.
pub fn ensure_output_directory(output_path: &Path) -> Result<()> {
    let dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if dir.is_dir() {
        Ok(())
    } else {
        Err(ExtractError::OutputDirectoryMissing {
            dir: dir.to_path_buf(),
        })
    }
}

/// Write `text` to `path`, replacing whatever was there.
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    debug!(path = %path.display(), bytes = text.len(), "writing output");
    std::fs::write(path, text).map_err(|source| ExtractError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Console formatter for run results and errors
pub struct Output {
    verbosity: VerbosityLevel,
    show_colors: bool,
}

impl Output {
    pub fn new(verbosity: VerbosityLevel) -> Self {
        Self {
            verbosity,
            show_colors: atty::is(atty::Stream::Stdout),
        }
    }

    pub fn with_colors(mut self, show_colors: bool) -> Self {
        self.show_colors = show_colors;
        self
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.show_colors {
            format!("\x1b[{}m{}\x1b[0m", color, text)
        } else {
            text.to_string()
        }
    }

    /// Lines to print after a successful run.
    pub fn format_report(&self, report: &RunReport) -> Vec<String> {
        if self.verbosity == VerbosityLevel::Quiet {
            return Vec::new();
        }

        let mut lines = vec![self.colorize(
            &format!(
                "Successfully saved all '{}' tags to '{}'.",
                report.tag,
                report.output_path.display()
            ),
            "32",
        )];

        let extraction = &report.extraction;
        if extraction.missing > 0 {
            lines.push(self.colorize(
                &format!("Warning: {} tags were missing or empty.", extraction.missing),
                "33",
            ));
        }
        if extraction.empty > 0 {
            lines.push(self.colorize(
                &format!(
                    "Warning: {} matched tag{} had no text.",
                    extraction.empty,
                    if extraction.empty == 1 { "" } else { "s" }
                ),
                "33",
            ));
        }
        if self.verbosity >= VerbosityLevel::Verbose {
            lines.push(format!("Values written: {}", extraction.len()));
        }

        lines
    }

    pub fn format_error(&self, error: &ExtractError) -> String {
        let mut line = self.colorize(&format!("Error: {}", error), "31");
        if self.verbosity == VerbosityLevel::Debug {
            let mut current: &dyn std::error::Error = error;
            while let Some(source) = current.source() {
                line.push_str(&format!("\n  caused by: {}", source));
                current = source;
            }
        }
        line
    }

    pub fn report(&self, report: &RunReport) {
        for line in self.format_report(report) {
            println!("{}", line);
        }
    }

    /// Errors are printed at every verbosity, quiet included.
    pub fn report_error(&self, error: &ExtractError) {
        println!("{}", self.format_error(error));
    }
}
