//! String assertions. Operands are `Option<&str>`, where `None` plays the role of a null
//! string; a plain `&str` converts implicitly.

use crate::context::TestContext;
use crate::outcome::{AssertionFailure, AssertionOutcome, SourceLocation};
use crate::util::write_diff;

fn display_or_null(s: Option<&str>) -> String {
    s.map_or_else(|| String::from("NULL"), |s| format!("\"{s}\""))
}

impl TestContext {
    /// Asserts that two strings are equal. Two null strings are equal; a null string never
    /// equals a non-null one.
    #[track_caller]
    pub fn assert_str_eq<'a, 'b>(
        &mut self,
        a: impl Into<Option<&'a str>>,
        b: impl Into<Option<&'b str>>,
        a_expr: &str,
        b_expr: &str,
    ) -> bool {
        let location = SourceLocation::caller();

        let outcome = match (a.into(), b.into()) {
            (None, None) => AssertionOutcome::Pass,
            (a @ None, b) | (a, b @ None) => AssertionOutcome::Fail(
                AssertionFailure::new("one string is NULL", location)
                    .with_detail(format!("{a_expr} = {}", a.unwrap_or("NULL")))
                    .with_detail(format!("{b_expr} = {}", b.unwrap_or("NULL"))),
            ),
            (Some(a), Some(b)) => AssertionOutcome::check(a == b, || {
                let mut failure = AssertionFailure::new("strings not equal", location)
                    .with_detail(format!("1:  {a_expr} = \"{a}\""))
                    .with_detail(format!("2:  {b_expr} = \"{b}\""));

                // Multi-line values are hard to compare by eye; add a line diff.
                if a.contains('\n') || b.contains('\n') {
                    let mut diff = String::new();
                    if write_diff(&mut diff, b, a).is_ok() {
                        failure = failure.with_detail(format!("Diff ({b_expr} -> {a_expr}):"));
                        for line in diff.lines() {
                            failure = failure.with_detail(line);
                        }
                    }
                }

                failure
            }),
        };

        self.record(outcome)
    }

    /// Asserts that two strings differ. Passes whenever either side is null.
    #[track_caller]
    pub fn assert_str_ne<'a, 'b>(
        &mut self,
        a: impl Into<Option<&'a str>>,
        b: impl Into<Option<&'b str>>,
        a_expr: &str,
        b_expr: &str,
    ) -> bool {
        let location = SourceLocation::caller();

        let outcome = match (a.into(), b.into()) {
            (Some(a), Some(b)) if a == b => AssertionOutcome::Fail(
                AssertionFailure::new("strings should not be equal", location)
                    .with_detail(format!("Expression: {a_expr} != {b_expr}"))
                    .with_detail(format!("Both: \"{a}\"")),
            ),
            _ => AssertionOutcome::Pass,
        };

        self.record(outcome)
    }

    /// Asserts that `s` contains `needle`.
    #[track_caller]
    pub fn assert_str_contains<'a>(
        &mut self,
        s: impl Into<Option<&'a str>>,
        needle: &str,
        expr: &str,
    ) -> bool {
        let location = SourceLocation::caller();
        let s = s.into();
        let holds = s.is_some_and(|s| s.contains(needle));
        self.record(AssertionOutcome::check(holds, || {
            AssertionFailure::new("string does not contain substring", location)
                .with_detail(format!("{expr} = {}", display_or_null(s)))
                .with_detail(format!("Substring: \"{needle}\""))
        }))
    }

    /// Asserts that `s` starts with `prefix`.
    #[track_caller]
    pub fn assert_str_starts_with<'a>(
        &mut self,
        s: impl Into<Option<&'a str>>,
        prefix: &str,
        expr: &str,
    ) -> bool {
        let location = SourceLocation::caller();
        let s = s.into();
        let holds = s.is_some_and(|s| s.starts_with(prefix));
        self.record(AssertionOutcome::check(holds, || {
            AssertionFailure::new("string does not start with prefix", location)
                .with_detail(format!("{expr} = {}", display_or_null(s)))
                .with_detail(format!("Prefix: \"{prefix}\""))
        }))
    }

    /// Asserts that `s` ends with `suffix`.
    #[track_caller]
    pub fn assert_str_ends_with<'a>(
        &mut self,
        s: impl Into<Option<&'a str>>,
        suffix: &str,
        expr: &str,
    ) -> bool {
        let location = SourceLocation::caller();
        let s = s.into();
        let holds = s.is_some_and(|s| s.ends_with(suffix));
        self.record(AssertionOutcome::check(holds, || {
            AssertionFailure::new("string does not end with suffix", location)
                .with_detail(format!("{expr} = {}", display_or_null(s)))
                .with_detail(format!("Suffix: \"{suffix}\""))
        }))
    }

    /// Asserts that `s` is the empty string. A null string is not empty.
    #[track_caller]
    pub fn assert_str_empty<'a>(&mut self, s: impl Into<Option<&'a str>>, expr: &str) -> bool {
        let location = SourceLocation::caller();
        let s = s.into();
        let holds = s.is_some_and(str::is_empty);
        self.record(AssertionOutcome::check(holds, || {
            AssertionFailure::new("expected empty string", location)
                .with_detail(format!("{expr} = {}", display_or_null(s)))
        }))
    }

    /// Asserts that `s` is a non-empty string. A null string fails.
    #[track_caller]
    pub fn assert_str_not_empty<'a>(&mut self, s: impl Into<Option<&'a str>>, expr: &str) -> bool {
        let location = SourceLocation::caller();
        let s = s.into();
        let holds = s.is_some_and(|s| !s.is_empty());
        self.record(AssertionOutcome::check(holds, || {
            AssertionFailure::new("expected non-empty string", location)
                .with_detail(format!("{expr} = {}", display_or_null(s)))
        }))
    }

    /// Asserts that the regular expression `pattern` matches somewhere in `s`. Anchor the
    /// pattern with `^`/`$` to require a full match. An invalid pattern fails the assertion.
    #[track_caller]
    pub fn assert_str_matches<'a>(
        &mut self,
        s: impl Into<Option<&'a str>>,
        pattern: &str,
        expr: &str,
    ) -> bool {
        let location = SourceLocation::caller();
        let s = s.into();

        let outcome = match regex::Regex::new(pattern) {
            Ok(re) => AssertionOutcome::check(s.is_some_and(|s| re.is_match(s)), || {
                AssertionFailure::new("string does not match pattern", location)
                    .with_detail(format!("{expr} = {}", display_or_null(s)))
                    .with_detail(format!("Pattern: {pattern}"))
            }),
            Err(err) => AssertionOutcome::Fail(
                AssertionFailure::new("invalid regular expression", location)
                    .with_detail(format!("Pattern: {pattern}"))
                    .with_detail(format!("Error: {err}")),
            ),
        };

        self.record(outcome)
    }
}
