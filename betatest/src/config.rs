//! Configuration types for the test harness.

/// Toggles controlling what the reporter prints.
///
/// These only ever gate output; they never affect how assertions or tests are counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::Args)]
pub struct ReportOptions {
    /// Print a `[TEST]` line before each test runs.
    #[clap(long = "show-test-start", env = "BETATEST_SHOW_TEST_START")]
    pub show_test_start: bool,

    /// Print a `[PASS]` line after each passing test.
    #[clap(long = "show-on-pass", env = "BETATEST_SHOW_ON_PASS")]
    pub show_on_pass: bool,

    /// Suppress `[FAIL]` diagnostics (failures are still counted).
    #[clap(long = "hide-on-fail", env = "BETATEST_HIDE_ON_FAIL")]
    pub hide_on_fail: bool,

    /// Disable ANSI colors in output. When unset, output is colored even if it is not a
    /// terminal.
    #[clap(long = "disable-color", env = "BETATEST_NO_COLOR")]
    pub disable_color: bool,
}

impl ReportOptions {
    /// Sets whether a notice is printed when each test starts.
    #[must_use]
    pub const fn with_show_test_start(mut self, value: bool) -> Self {
        self.show_test_start = value;
        self
    }

    /// Sets whether a notice is printed when a test passes.
    #[must_use]
    pub const fn with_show_on_pass(mut self, value: bool) -> Self {
        self.show_on_pass = value;
        self
    }

    /// Sets whether failure diagnostics are suppressed.
    #[must_use]
    pub const fn with_hide_on_fail(mut self, value: bool) -> Self {
        self.hide_on_fail = value;
        self
    }

    /// Sets whether ANSI colors are disabled.
    #[must_use]
    pub const fn with_disable_color(mut self, value: bool) -> Self {
        self.disable_color = value;
        self
    }
}

/// Command-line options for a harness-driven test binary.
#[derive(Clone, Debug, Default, clap::Args)]
pub struct HarnessOptions {
    /// Output options.
    #[clap(flatten)]
    pub report: ReportOptions,

    /// List registered tests without running them.
    #[clap(long = "list")]
    pub list_tests_only: bool,

    /// Exactly match filters (not just substring match).
    #[clap(long = "exact")]
    pub exact_match: bool,

    /// Patterns for tests to be excluded.
    #[clap(long = "skip")]
    pub exclude_filters: Vec<String>,

    /// Patterns for tests to be included.
    pub include_filters: Vec<String>,
}

impl HarnessOptions {
    /// Returns whether a test should run based on include/exclude filters.
    pub fn should_run_test(&self, name: &str) -> bool {
        if self.include_filters.is_empty() && self.exclude_filters.is_empty() {
            return true;
        }

        // If any include filters were given, then we are in opt-in mode.
        if !self.include_filters.is_empty()
            && !self.test_matches_filters(name, &self.include_filters)
        {
            return false;
        }

        // In all cases, exclude filters may be used to exclude tests.
        if !self.exclude_filters.is_empty()
            && self.test_matches_filters(name, &self.exclude_filters)
        {
            return false;
        }

        true
    }

    fn test_matches_filters(&self, name: &str, filters: &[String]) -> bool {
        if self.exact_match {
            filters.iter().any(|f| f == name)
        } else {
            filters.iter().any(|filter| name.contains(filter.as_str()))
        }
    }
}
