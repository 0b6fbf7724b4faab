//! Run state: the counters and current-test context of a single run.

/// Accounting for a run of tests.
///
/// The counters only ever grow within a run; [`RunState::reset`] zeroes all of them
/// together. `assertions_run == assertions_passed + assertions_failed` holds at all times,
/// and `tests_run == tests_passed + tests_failed` holds whenever no test is executing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunState {
    pub(crate) tests_run: u32,
    pub(crate) tests_passed: u32,
    pub(crate) tests_failed: u32,
    pub(crate) assertions_run: u32,
    pub(crate) assertions_passed: u32,
    pub(crate) assertions_failed: u32,
    pub(crate) current_test_name: Option<String>,
    pub(crate) current_test_failed: bool,
    /// Set between `begin_test` and `finish_test`; cleared by `reset`.
    pub(crate) unit_open: bool,
}

impl RunState {
    /// Creates a zero-initialized run state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeroes all counters and forgets the current test.
    ///
    /// If a test unit is executing, it is dropped from the tally: its remaining assertions
    /// are still counted, but its verdict is not.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns the exit code a process should report for this run: 0 when no test failed,
    /// 1 otherwise.
    pub const fn exit_code(&self) -> u8 {
        if self.tests_failed == 0 { 0 } else { 1 }
    }

    /// Number of test units started.
    pub const fn tests_run(&self) -> u32 {
        self.tests_run
    }

    /// Number of test units that completed without a failing assertion.
    pub const fn tests_passed(&self) -> u32 {
        self.tests_passed
    }

    /// Number of test units that had at least one failing assertion.
    pub const fn tests_failed(&self) -> u32 {
        self.tests_failed
    }

    /// Number of assertions evaluated.
    pub const fn assertions_run(&self) -> u32 {
        self.assertions_run
    }

    /// Number of assertions that held.
    pub const fn assertions_passed(&self) -> u32 {
        self.assertions_passed
    }

    /// Number of assertions that did not hold.
    pub const fn assertions_failed(&self) -> u32 {
        self.assertions_failed
    }

    /// Name of the test unit most recently started, if any.
    pub fn current_test_name(&self) -> Option<&str> {
        self.current_test_name.as_deref()
    }

    /// Whether an assertion has failed in the current test unit.
    pub const fn current_test_failed(&self) -> bool {
        self.current_test_failed
    }

    pub(crate) fn begin_test(&mut self, name: &str) {
        self.current_test_name = Some(name.to_owned());
        self.tests_run += 1;
        self.current_test_failed = false;
        self.unit_open = true;
    }

    /// Closes out the current test unit and returns whether it passed. Only a unit that is
    /// still open is tallied.
    pub(crate) const fn finish_test(&mut self) -> bool {
        let passed = !self.current_test_failed;

        if self.unit_open {
            self.unit_open = false;
            if passed {
                self.tests_passed += 1;
            } else {
                self.tests_failed += 1;
            }
        }

        passed
    }

    pub(crate) const fn record_pass(&mut self) {
        self.assertions_run += 1;
        self.assertions_passed += 1;
    }

    pub(crate) const fn record_failure(&mut self) {
        self.assertions_run += 1;
        self.assertions_failed += 1;
        self.current_test_failed = true;
    }
}
