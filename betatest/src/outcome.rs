//! Outcome of a single assertion.

use std::fmt::Display;

/// A place in the source code where an assertion was evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    /// Path of the source file.
    pub file: &'static str,
    /// 1-based line number.
    pub line: u32,
}

impl SourceLocation {
    /// Returns the location of the caller. Propagates through any chain of
    /// `#[track_caller]` functions.
    #[track_caller]
    pub fn caller() -> Self {
        std::panic::Location::caller().into()
    }
}

impl From<&'static std::panic::Location<'static>> for SourceLocation {
    fn from(location: &'static std::panic::Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Diagnostic describing an assertion that did not hold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssertionFailure {
    /// One-line summary of what was expected.
    pub description: String,
    /// Supporting lines: operand expressions and their computed values.
    pub details: Vec<String>,
    /// Where the assertion was evaluated.
    pub location: SourceLocation,
}

impl AssertionFailure {
    /// Creates a failure with no supporting detail lines.
    pub fn new(description: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            description: description.into(),
            details: vec![],
            location,
        }
    }

    /// Appends a supporting detail line.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    /// Renders the message body: the description line followed by the detail lines.
    pub fn message(&self) -> String {
        let mut message = format!("Assertion failed: {}", self.description);
        for detail in &self.details {
            message.push('\n');
            message.push_str(detail);
        }
        message
    }
}

impl Display for AssertionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (at {})", self.message(), self.location)
    }
}

/// Result of evaluating an assertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssertionOutcome {
    /// The asserted predicate held.
    Pass,
    /// The asserted predicate did not hold.
    Fail(AssertionFailure),
}

impl AssertionOutcome {
    /// Returns a passing outcome if `condition` holds; otherwise builds the failure lazily.
    pub fn check(condition: bool, failure: impl FnOnce() -> AssertionFailure) -> Self {
        if condition {
            Self::Pass
        } else {
            Self::Fail(failure())
        }
    }

    /// Returns whether this outcome is a pass.
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}
