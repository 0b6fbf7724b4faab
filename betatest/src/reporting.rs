//! Console reporting of test progress and results.

use crate::config::ReportOptions;
use crate::error::Error;
use crate::outcome::AssertionFailure;
use crate::state::RunState;
use colored::{ColoredString, Colorize};
use std::io::Write;

const BANNER: &str = "========================================";

/// Column at which failure diagnostics are indented.
const DETAIL_INDENT: usize = 7;

/// Renders live notices and the final summary of a run.
///
/// The reporter owns no run state; it only formats what it is handed, gated by its
/// [`ReportOptions`].
pub struct Reporter {
    options: ReportOptions,
    writer: Box<dyn Write>,
}

impl Reporter {
    /// Creates a reporter that writes to standard output.
    pub fn new(options: ReportOptions) -> Self {
        Self::with_writer(options, std::io::stdout())
    }

    /// Creates a reporter that writes to the given sink.
    ///
    /// Unless `disable_color` is set, output is colored whether or not the sink (or stdout)
    /// is a terminal.
    pub fn with_writer(options: ReportOptions, writer: impl Write + 'static) -> Self {
        if !options.disable_color {
            // `colored` would otherwise consult stdout and the CLICOLOR/NO_COLOR variables.
            colored::control::set_override(true);
        }

        Self {
            options,
            writer: Box::new(writer),
        }
    }

    /// Returns the options this reporter was created with.
    pub const fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Announces that a test is starting.
    pub fn announce_test(&mut self, name: &str) -> Result<(), Error> {
        let tag = self.paint("[TEST]", |s| s.bold().cyan());
        writeln!(self.writer, "{tag} {name}")?;
        Ok(())
    }

    /// Announces that a test passed.
    pub fn announce_pass(&mut self, name: &str) -> Result<(), Error> {
        let tag = self.paint("[PASS]", |s| s.green());
        writeln!(self.writer, "{tag} {name}")?;
        Ok(())
    }

    /// Reports a failed assertion within the named test.
    pub fn announce_failure(
        &mut self,
        test_name: &str,
        failure: &AssertionFailure,
    ) -> Result<(), Error> {
        let tag = self.paint("[FAIL]", |s| s.red());
        writeln!(self.writer, "{tag} {test_name}")?;
        let message = indent::indent_all_by(DETAIL_INDENT, failure.message());
        writeln!(self.writer, "{}", message.trim_end_matches('\n'))?;
        writeln!(
            self.writer,
            "{:indent$}at {}",
            "",
            failure.location,
            indent = DETAIL_INDENT
        )?;
        Ok(())
    }

    /// Writes the blank line that separates one test's notices from the next.
    pub fn end_test_block(&mut self) -> Result<(), Error> {
        writeln!(self.writer)?;
        Ok(())
    }

    /// Writes the summary block for a run.
    pub fn print_summary(&mut self, state: &RunState) -> Result<(), Error> {
        let header = format!("{BANNER}\n           TEST SUMMARY\n{BANNER}");
        let header = self.paint(&header, |s| s.bold().cyan());
        writeln!(self.writer, "{header}")?;

        let tests = self.format_counts(state.tests_run, state.tests_passed, state.tests_failed);
        writeln!(self.writer, "Tests:      {tests}")?;

        let assertions = self.format_counts(
            state.assertions_run,
            state.assertions_passed,
            state.assertions_failed,
        );
        writeln!(self.writer, "Assertions: {assertions}")?;

        let footer = self.paint(BANNER, |s| s.cyan());
        writeln!(self.writer, "{footer}")?;

        let verdict = if state.tests_failed == 0 {
            self.paint("ALL TESTS PASSED!", |s| s.bold().green())
        } else {
            self.paint("SOME TESTS FAILED", |s| s.bold().red())
        };
        writeln!(self.writer, "{verdict}")?;
        writeln!(self.writer)?;

        self.writer.flush()?;
        Ok(())
    }

    fn format_counts(&self, run: u32, passed: u32, failed: u32) -> String {
        format!(
            "{run} run, {}, {}",
            self.paint(&format!("{passed} passed"), |s| s.green()),
            self.paint(&format!("{failed} failed"), |s| s.red()),
        )
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.options.disable_color {
            text.to_owned()
        } else {
            style(text).to_string()
        }
    }
}
