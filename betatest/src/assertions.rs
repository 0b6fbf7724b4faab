//! The assertion engine: typed predicates with diagnostic failure messages.
//!
//! Every assertion takes its operands plus the source text of each operand, evaluates its
//! predicate, and records the outcome in the [`TestContext`]. The call site is captured
//! automatically. Each method returns whether the assertion held; callers are free to
//! ignore it.

use crate::context::TestContext;
use crate::outcome::{AssertionFailure, AssertionOutcome, SourceLocation};
use crate::util::format_general;
use std::fmt::{Debug, Display};

/// Significant digits used when printing floating-point operands.
const FLOAT_DIGITS: usize = 10;

fn format_float(value: f64) -> String {
    format_general(value, FLOAT_DIGITS)
}

/// Values that have a distinguished null state.
pub trait Nullable {
    /// Returns whether this value is null.
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    fn is_null(&self) -> bool {
        (*self).is_null()
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_null(&self) -> bool {
        (*self).is_null()
    }
}

/// Primitive integers, widened to a common signed 64-bit representation for comparison.
///
/// Values that do not fit are reinterpreted in two's complement (e.g. `u64::MAX` widens to
/// `-1`), matching a plain `as i64` conversion.
pub trait WidenInt: Copy {
    /// Converts this value to `i64`.
    fn widen(self) -> i64;
}

macro_rules! impl_widen_int {
    ($($t:ty),*) => {
        $(
            impl WidenInt for $t {
                #[allow(
                    clippy::cast_lossless,
                    clippy::cast_possible_truncation,
                    clippy::cast_possible_wrap
                )]
                fn widen(self) -> i64 {
                    self as i64
                }
            }
        )*
    };
}

impl_widen_int!(i8, i16, i32, i64, i128, isize);
impl_widen_int!(u8, u16, u32, u64, u128, usize);

#[allow(clippy::needless_pass_by_value)]
impl TestContext {
    /// Asserts that `condition` is true.
    #[track_caller]
    pub fn assert_true(&mut self, condition: bool, expr: &str) -> bool {
        let location = SourceLocation::caller();
        self.record(AssertionOutcome::check(condition, || {
            AssertionFailure::new("expected true, got false", location)
                .with_detail(format!("Expression: {expr}"))
        }))
    }

    /// Asserts that `condition` is false.
    #[track_caller]
    pub fn assert_false(&mut self, condition: bool, expr: &str) -> bool {
        let location = SourceLocation::caller();
        self.record(AssertionOutcome::check(!condition, || {
            AssertionFailure::new("expected false, got true", location)
                .with_detail(format!("Expression: {expr}"))
        }))
    }

    /// Asserts that `a == b` using the operands' own equality.
    #[track_caller]
    pub fn assert_eq<A, B>(&mut self, a: A, b: B, a_expr: &str, b_expr: &str) -> bool
    where
        A: PartialEq<B> + Debug,
        B: Debug,
    {
        let location = SourceLocation::caller();
        self.record(AssertionOutcome::check(a == b, || {
            AssertionFailure::new("expected equal", location)
                .with_detail(format!("Expression: {a_expr} == {b_expr}"))
                .with_detail(format!("1:  {a_expr} = {a:?}"))
                .with_detail(format!("2:  {b_expr} = {b:?}"))
        }))
    }

    /// Asserts that `a != b` using the operands' own equality.
    #[track_caller]
    pub fn assert_ne<A, B>(&mut self, a: A, b: B, a_expr: &str, b_expr: &str) -> bool
    where
        A: PartialEq<B> + Debug,
        B: Debug,
    {
        let location = SourceLocation::caller();
        self.record(AssertionOutcome::check(a != b, || {
            AssertionFailure::new("expected not equal", location)
                .with_detail(format!("Expression: {a_expr} != {b_expr}"))
                .with_detail(format!("Both: {a:?}"))
        }))
    }

    /// Asserts that `value` is null.
    #[track_caller]
    pub fn assert_null<P: Nullable + ?Sized>(&mut self, value: &P, expr: &str) -> bool {
        let location = SourceLocation::caller();
        self.record(AssertionOutcome::check(value.is_null(), || {
            AssertionFailure::new("expected NULL", location)
                .with_detail(format!("Expression: {expr}"))
        }))
    }

    /// Asserts that `value` is not null.
    #[track_caller]
    pub fn assert_not_null<P: Nullable + ?Sized>(&mut self, value: &P, expr: &str) -> bool {
        let location = SourceLocation::caller();
        self.record(AssertionOutcome::check(!value.is_null(), || {
            AssertionFailure::new("expected not NULL", location)
                .with_detail(format!("Expression: {expr}"))
        }))
    }

    /// Asserts that two integers are equal once both are widened to `i64`, so operands of
    /// different widths and signedness compare by value.
    #[track_caller]
    pub fn assert_int_eq(
        &mut self,
        a: impl WidenInt,
        b: impl WidenInt,
        a_expr: &str,
        b_expr: &str,
    ) -> bool {
        let location = SourceLocation::caller();
        let (a, b) = (a.widen(), b.widen());
        self.record(AssertionOutcome::check(a == b, || {
            AssertionFailure::new("integers not equal", location)
                .with_detail(format!("1:  {a_expr} = {a}"))
                .with_detail(format!("2:  {b_expr} = {b}"))
        }))
    }

    /// Asserts that two integers differ once both are widened to `i64`.
    #[track_caller]
    pub fn assert_int_ne(
        &mut self,
        a: impl WidenInt,
        b: impl WidenInt,
        a_expr: &str,
        b_expr: &str,
    ) -> bool {
        let location = SourceLocation::caller();
        let (a, b) = (a.widen(), b.widen());
        self.record(AssertionOutcome::check(a != b, || {
            AssertionFailure::new("integers should not be equal", location)
                .with_detail(format!("Expression: {a_expr} != {b_expr}"))
                .with_detail(format!("Both: {a}"))
        }))
    }

    /// Asserts that `|a - b| <= epsilon`. A NaN operand never compares equal.
    #[track_caller]
    pub fn assert_float_eq(
        &mut self,
        a: impl Into<f64>,
        b: impl Into<f64>,
        epsilon: impl Into<f64>,
        a_expr: &str,
        b_expr: &str,
    ) -> bool {
        let location = SourceLocation::caller();
        let (a, b, epsilon) = (a.into(), b.into(), epsilon.into());
        let diff = (a - b).abs();

        self.record(AssertionOutcome::check(diff <= epsilon, || {
            AssertionFailure::new("floats not equal within epsilon", location)
                .with_detail(format!("Got:      {a_expr} = {}", format_float(a)))
                .with_detail(format!("Expected: {b_expr} = {}", format_float(b)))
                .with_detail(format!("Epsilon:  {}", format_float(epsilon)))
                .with_detail(format!("Diff:     {}", format_float(diff)))
        }))
    }

    /// Asserts that `a < b`.
    #[track_caller]
    pub fn assert_lt<A, B>(&mut self, a: A, b: B, a_expr: &str, b_expr: &str) -> bool
    where
        A: PartialOrd<B> + Debug,
        B: Debug,
    {
        let location = SourceLocation::caller();
        self.record_ordering(a < b, "<", (&a, a_expr), (&b, b_expr), location)
    }

    /// Asserts that `a <= b`.
    #[track_caller]
    pub fn assert_le<A, B>(&mut self, a: A, b: B, a_expr: &str, b_expr: &str) -> bool
    where
        A: PartialOrd<B> + Debug,
        B: Debug,
    {
        let location = SourceLocation::caller();
        self.record_ordering(a <= b, "<=", (&a, a_expr), (&b, b_expr), location)
    }

    /// Asserts that `a > b`.
    #[track_caller]
    pub fn assert_gt<A, B>(&mut self, a: A, b: B, a_expr: &str, b_expr: &str) -> bool
    where
        A: PartialOrd<B> + Debug,
        B: Debug,
    {
        let location = SourceLocation::caller();
        self.record_ordering(a > b, ">", (&a, a_expr), (&b, b_expr), location)
    }

    /// Asserts that `a >= b`.
    #[track_caller]
    pub fn assert_ge<A, B>(&mut self, a: A, b: B, a_expr: &str, b_expr: &str) -> bool
    where
        A: PartialOrd<B> + Debug,
        B: Debug,
    {
        let location = SourceLocation::caller();
        self.record_ordering(a >= b, ">=", (&a, a_expr), (&b, b_expr), location)
    }

    /// Asserts `condition`, reporting `message` verbatim if it does not hold.
    #[track_caller]
    pub fn assert_msg(&mut self, condition: bool, message: impl Display) -> bool {
        let location = SourceLocation::caller();
        self.record(AssertionOutcome::check(condition, || {
            AssertionFailure::new(message.to_string(), location)
        }))
    }

    fn record_ordering(
        &mut self,
        holds: bool,
        op: &str,
        (a, a_expr): (&dyn Debug, &str),
        (b, b_expr): (&dyn Debug, &str),
        location: SourceLocation,
    ) -> bool {
        self.record(AssertionOutcome::check(holds, || {
            AssertionFailure::new(format!("expected {a_expr} {op} {b_expr}"), location)
                .with_detail(format!("1:  {a_expr} = {a:?}"))
                .with_detail(format!("2:  {b_expr} = {b:?}"))
        }))
    }
}
