//! The run context threaded through every test body and assertion.

use crate::config::ReportOptions;
use crate::error::Error;
use crate::outcome::AssertionOutcome;
use crate::reporting::Reporter;
use crate::state::RunState;

/// Everything a running test needs: the accounting state for the run and the reporter that
/// renders progress.
///
/// Test bodies receive `&mut TestContext` and call its `assert_*` methods. Independent
/// contexts share nothing, so several runs can coexist in one process.
pub struct TestContext {
    state: RunState,
    reporter: Reporter,
}

impl TestContext {
    /// Creates a context reporting to standard output with the given options.
    pub fn new(options: ReportOptions) -> Self {
        Self::with_reporter(Reporter::new(options))
    }

    /// Creates a context around an existing reporter.
    pub fn with_reporter(reporter: Reporter) -> Self {
        Self {
            state: RunState::new(),
            reporter,
        }
    }

    /// Returns the accounting state of the run.
    pub const fn state(&self) -> &RunState {
        &self.state
    }

    /// Returns the reporter.
    pub const fn reporter_mut(&mut self) -> &mut Reporter {
        &mut self.reporter
    }

    /// Runs `body` as a test unit named `name` and returns whether it passed.
    ///
    /// The unit fails if any assertion evaluated while it runs fails; no matter how many
    /// do, it counts as a single failed test. The body is not isolated: a panic inside it
    /// propagates to the caller.
    pub fn run_test(&mut self, name: &str, body: impl FnOnce(&mut Self)) -> bool {
        self.state.begin_test(name);
        tracing::debug!(target: "tests", "running test: {name}");

        let options = *self.reporter.options();
        let mut printed_notice = if options.show_test_start {
            self.report_result(|r| r.announce_test(name));
            true
        } else {
            false
        };

        body(self);

        let passed = self.state.finish_test();
        tracing::debug!(
            target: "tests",
            "test {name} {}",
            if passed { "passed" } else { "failed" }
        );

        if passed && options.show_on_pass {
            self.report_result(|r| r.announce_pass(name));
            printed_notice = true;
        }

        if printed_notice {
            self.report_result(Reporter::end_test_block);
        }

        passed
    }

    /// Records the outcome of an assertion and returns whether it passed.
    ///
    /// A failure is attributed to the test currently running and, unless failure output is
    /// hidden, reported immediately. Control flow is never interrupted.
    pub fn record(&mut self, outcome: AssertionOutcome) -> bool {
        match outcome {
            AssertionOutcome::Pass => {
                self.state.record_pass();
                true
            }
            AssertionOutcome::Fail(failure) => {
                self.state.record_failure();
                tracing::debug!(
                    target: "assertions",
                    "assertion failed at {}: {}",
                    failure.location,
                    failure.description
                );

                if !self.reporter.options().hide_on_fail {
                    let test_name = self
                        .state
                        .current_test_name()
                        .unwrap_or("(unnamed)")
                        .to_owned();
                    self.report_result(|r| r.announce_failure(&test_name, &failure));
                }

                false
            }
        }
    }

    /// Zeroes all counters and forgets the current test.
    ///
    /// Called from inside a test body, the running unit is left out of the test tally, so
    /// `tests_run == tests_passed + tests_failed` still holds once it finishes.
    pub fn reset_state(&mut self) {
        self.state.reset();
    }

    /// Writes the run summary through the reporter.
    pub fn print_summary(&mut self) -> Result<(), Error> {
        self.reporter.print_summary(&self.state)
    }

    /// Returns the process exit code for the run so far.
    pub const fn exit_code(&self) -> u8 {
        self.state.exit_code()
    }

    fn report_result(&mut self, report: impl FnOnce(&mut Reporter) -> Result<(), Error>) {
        if let Err(err) = report(&mut self.reporter) {
            tracing::warn!("failed to write test report: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{AssertionFailure, SourceLocation};
    use crate::reporting::tests::{CaptureBuffer, plain_reporter};
    use pretty_assertions::assert_eq;

    fn context(options: ReportOptions) -> (TestContext, CaptureBuffer) {
        let (reporter, buffer) = plain_reporter(options);
        (TestContext::with_reporter(reporter), buffer)
    }

    fn failure() -> AssertionOutcome {
        AssertionOutcome::Fail(AssertionFailure::new(
            "nope",
            SourceLocation {
                file: "unit.rs",
                line: 7,
            },
        ))
    }

    #[test]
    fn passing_unit() {
        let (mut ctx, buffer) = context(ReportOptions::default());
        let passed = ctx.run_test("ok", |t| {
            t.record(AssertionOutcome::Pass);
        });

        assert!(passed);
        assert_eq!(ctx.state().tests_run(), 1);
        assert_eq!(ctx.state().tests_passed(), 1);
        assert_eq!(ctx.state().assertions_passed(), 1);
        assert_eq!(buffer.contents(), "");
        assert_eq!(ctx.exit_code(), 0);
    }

    #[test]
    fn many_failures_count_as_one_failed_test() {
        let (mut ctx, _buffer) = context(ReportOptions::default());
        let passed = ctx.run_test("bad", |t| {
            t.record(failure());
            t.record(AssertionOutcome::Pass);
            t.record(failure());
            t.record(failure());
        });

        assert!(!passed);
        assert_eq!(ctx.state().tests_failed(), 1);
        assert_eq!(ctx.state().tests_passed(), 0);
        assert_eq!(ctx.state().assertions_run(), 4);
        assert_eq!(ctx.state().assertions_failed(), 3);
        assert_eq!(ctx.exit_code(), 1);
    }

    #[test]
    fn failure_is_reported_under_test_name() {
        let (mut ctx, buffer) = context(ReportOptions::default());
        ctx.run_test("bad", |t| {
            t.record(failure());
        });

        assert_eq!(
            buffer.contents(),
            "[FAIL] bad\n       Assertion failed: nope\n       at unit.rs:7\n"
        );
    }

    #[test]
    fn hide_on_fail_still_counts() {
        let (mut ctx, buffer) = context(ReportOptions::default().with_hide_on_fail(true));
        ctx.run_test("bad", |t| {
            t.record(failure());
        });

        assert_eq!(buffer.contents(), "");
        assert_eq!(ctx.state().assertions_failed(), 1);
        assert_eq!(ctx.state().tests_failed(), 1);
    }

    #[test]
    fn start_and_pass_notices() {
        let options = ReportOptions::default()
            .with_show_test_start(true)
            .with_show_on_pass(true);
        let (mut ctx, buffer) = context(options);

        ctx.run_test("good", |t| {
            t.record(AssertionOutcome::Pass);
        });
        ctx.run_test("bad", |t| {
            t.record(failure());
        });

        assert_eq!(
            buffer.contents(),
            "[TEST] good\n[PASS] good\n\n[TEST] bad\n[FAIL] bad\n       Assertion failed: nope\n       at unit.rs:7\n\n"
        );
    }

    #[test]
    fn next_unit_starts_clean() {
        let (mut ctx, _buffer) = context(ReportOptions::default());
        ctx.run_test("bad", |t| {
            t.record(failure());
        });
        let passed = ctx.run_test("good", |t| {
            t.record(AssertionOutcome::Pass);
        });

        assert!(passed);
        assert_eq!(ctx.state().tests_run(), 2);
        assert_eq!(ctx.state().tests_passed(), 1);
        assert_eq!(ctx.state().tests_failed(), 1);
    }

    #[test]
    fn reset_inside_unit_keeps_test_tally_consistent() {
        let (mut ctx, _buffer) = context(ReportOptions::default());
        ctx.run_test("good", |t| {
            t.record(AssertionOutcome::Pass);
        });

        let passed = ctx.run_test("resets", |t| {
            t.record(failure());
            t.reset_state();
            t.record(AssertionOutcome::Pass);
        });

        let state = ctx.state();
        assert!(passed);
        assert_eq!(state.tests_run(), 0);
        assert_eq!(state.tests_run(), state.tests_passed() + state.tests_failed());
        assert_eq!(state.assertions_run(), 1);
        assert_eq!(state.assertions_passed(), 1);
        assert_eq!(ctx.exit_code(), 0);
    }

    #[test]
    fn new_context_uses_given_options() {
        let options = ReportOptions::default()
            .with_disable_color(true)
            .with_hide_on_fail(true);
        let mut ctx = TestContext::new(options);

        assert_eq!(*ctx.state(), RunState::default());
        assert_eq!(*ctx.reporter_mut().options(), options);
    }

    #[test]
    fn reporter_is_shared_with_assertions() -> anyhow::Result<()> {
        let (mut ctx, buffer) = context(ReportOptions::default());
        ctx.reporter_mut().announce_test("manual")?;
        ctx.run_test("bad", |t| {
            t.record(failure());
        });

        assert!(buffer.contents().starts_with("[TEST] manual\n[FAIL] bad\n"));
        Ok(())
    }

    #[test]
    fn reset_after_runs() {
        let (mut ctx, _buffer) = context(ReportOptions::default());
        ctx.run_test("good", |t| {
            t.record(AssertionOutcome::Pass);
        });
        ctx.run_test("bad", |t| {
            t.record(failure());
        });

        ctx.reset_state();
        assert_eq!(*ctx.state(), RunState::default());
        assert_eq!(ctx.exit_code(), 0);
    }
}
