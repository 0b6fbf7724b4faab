//! Lightweight in-process unit test harness.
//!
//! Tests are registered by name in a [`Harness`] and run explicitly. Each test body receives
//! a [`TestContext`], through which it evaluates assertions. Assertions never interrupt
//! control flow: a failing assertion is counted, attributed to the test that is currently
//! executing, and (unless suppressed) reported with a diagnostic that shows the operand
//! expressions, their values, and the call site. At the end of a run the harness renders a
//! summary and derives a process exit code from the number of failed tests.
//!
//! # Example
//!
//! ```no_run
//! use betatest::{Harness, ReportOptions};
//!
//! fn add(a: i32, b: i32) -> i32 {
//!     a + b
//! }
//!
//! let mut harness = Harness::new(ReportOptions::default());
//!
//! harness
//!     .define_test("addition", |t| {
//!         t.assert_int_eq(add(2, 3), 5, "add(2, 3)", "5");
//!         t.assert_float_eq(0.1 + 0.2, 0.3, 1e-9, "0.1 + 0.2", "0.3");
//!     })
//!     .expect("unique test name");
//!
//! harness.run_test("addition").expect("registered test");
//! harness.print_summary().expect("writable stdout");
//! std::process::exit(i32::from(harness.exit_code()));
//! ```

mod assertions;
mod config;
mod context;
mod error;
mod harness;
mod outcome;
mod reporting;
mod state;
mod string_assertions;
pub mod util;

pub use assertions::{Nullable, WidenInt};
pub use config::{HarnessOptions, ReportOptions};
pub use context::TestContext;
pub use error::Error;
pub use harness::{Harness, TestBody, TestUnit};
pub use outcome::{AssertionFailure, AssertionOutcome, SourceLocation};
pub use reporting::Reporter;
pub use state::RunState;
