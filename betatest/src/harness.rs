//! Test registration and execution.

use crate::config::{HarnessOptions, ReportOptions};
use crate::context::TestContext;
use crate::error::Error;
use crate::reporting::Reporter;
use crate::state::RunState;
use indexmap::IndexMap;

/// The body of a test: a sequence of assertions against a [`TestContext`].
pub type TestBody = Box<dyn Fn(&mut TestContext)>;

/// A named test that can be run any number of times.
pub struct TestUnit {
    name: String,
    body: TestBody,
}

impl TestUnit {
    /// Creates a test unit.
    pub fn new(name: impl Into<String>, body: impl Fn(&mut TestContext) + 'static) -> Self {
        Self {
            name: name.into(),
            body: Box::new(body),
        }
    }

    /// Returns the name of the test.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the test in the given context and returns whether it passed.
    pub fn run(&self, context: &mut TestContext) -> bool {
        context.run_test(&self.name, |t| (self.body)(t))
    }
}

/// A table of named tests and the context they run in.
///
/// Tests are run in registration order and only when explicitly requested.
pub struct Harness {
    context: TestContext,
    tests: IndexMap<String, TestUnit>,
}

impl Harness {
    /// Creates an empty harness reporting to standard output.
    pub fn new(options: ReportOptions) -> Self {
        Self::with_reporter(Reporter::new(options))
    }

    /// Creates an empty harness around an existing reporter.
    pub fn with_reporter(reporter: Reporter) -> Self {
        Self {
            context: TestContext::with_reporter(reporter),
            tests: IndexMap::new(),
        }
    }

    /// Registers a test under `name`.
    pub fn define_test(
        &mut self,
        name: impl Into<String>,
        body: impl Fn(&mut TestContext) + 'static,
    ) -> Result<(), Error> {
        self.add_test(TestUnit::new(name, body))
    }

    /// Registers an already-constructed test unit.
    pub fn add_test(&mut self, unit: TestUnit) -> Result<(), Error> {
        if self.tests.contains_key(unit.name()) {
            return Err(Error::DuplicateTest(unit.name));
        }

        tracing::debug!(target: "tests", "registered test: {}", unit.name);
        self.tests.insert(unit.name.clone(), unit);
        Ok(())
    }

    /// Runs the named test and returns whether it passed.
    pub fn run_test(&mut self, name: &str) -> Result<bool, Error> {
        let unit = self
            .tests
            .get(name)
            .ok_or_else(|| Error::UnknownTest(name.to_owned()))?;

        Ok(unit.run(&mut self.context))
    }

    /// Runs every registered test selected by the filters in `options`, in registration
    /// order, and returns how many ran.
    pub fn run_all(&mut self, options: &HarnessOptions) -> usize {
        let mut ran = 0;

        for unit in self.tests.values() {
            if !options.should_run_test(unit.name()) {
                tracing::debug!(target: "tests", "skipping filtered test: {}", unit.name);
                continue;
            }

            unit.run(&mut self.context);
            ran += 1;
        }

        ran
    }

    /// Returns the names of all registered tests, in registration order.
    pub fn test_names(&self) -> impl Iterator<Item = &str> {
        self.tests.keys().map(String::as_str)
    }

    /// Returns the context tests run in.
    pub const fn context_mut(&mut self) -> &mut TestContext {
        &mut self.context
    }

    /// Returns the accounting state of the run.
    pub const fn state(&self) -> &RunState {
        self.context.state()
    }

    /// Zeroes all counters. Registered tests are kept.
    pub fn reset_state(&mut self) {
        self.context.reset_state();
    }

    /// Writes the run summary.
    pub fn print_summary(&mut self) -> Result<(), Error> {
        self.context.print_summary()
    }

    /// Returns the process exit code for the run so far: 0 if no test failed, else 1.
    pub const fn exit_code(&self) -> u8 {
        self.context.exit_code()
    }
}
