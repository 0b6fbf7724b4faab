//! End-to-end accounting scenarios for the harness.

#![allow(clippy::panic_in_result_fn)]

use betatest::{Harness, HarnessOptions, ReportOptions, Reporter, RunState};
use std::{cell::RefCell, io::Write, rc::Rc};

#[derive(Clone, Default)]
struct SharedSink(Rc<RefCell<Vec<u8>>>);

impl SharedSink {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn quiet_harness() -> Harness {
    Harness::with_reporter(Reporter::with_writer(
        ReportOptions::default().with_disable_color(true),
        std::io::sink(),
    ))
}

#[test]
fn single_passing_assertion() -> anyhow::Result<()> {
    let mut harness = quiet_harness();
    harness.define_test("sum", |t| {
        t.assert_int_eq(2 + 2, 4, "2 + 2", "4");
    })?;

    assert!(harness.run_test("sum")?);

    let state = harness.state();
    assert_eq!(state.tests_run(), 1);
    assert_eq!(state.tests_passed(), 1);
    assert_eq!(state.tests_failed(), 0);
    assert_eq!(state.assertions_run(), 1);
    assert_eq!(state.assertions_passed(), 1);
    assert_eq!(state.assertions_failed(), 0);
    assert_eq!(harness.exit_code(), 0);
    Ok(())
}

#[test]
fn one_failing_assertion_fails_the_unit() -> anyhow::Result<()> {
    let mut harness = quiet_harness();
    harness.define_test("sum", |t| {
        t.assert_int_eq(2 + 2, 4, "2 + 2", "4");
        t.assert_int_eq(2 + 2, 5, "2 + 2", "5");
    })?;

    assert!(!harness.run_test("sum")?);

    let state = harness.state();
    assert_eq!(state.assertions_run(), 2);
    assert_eq!(state.assertions_passed(), 1);
    assert_eq!(state.assertions_failed(), 1);
    assert_eq!(state.tests_failed(), 1);
    assert_ne!(harness.exit_code(), 0);
    Ok(())
}

#[test]
#[allow(clippy::approx_constant)]
fn float_tolerance() -> anyhow::Result<()> {
    let mut harness = quiet_harness();
    harness.define_test("close_enough", |t| {
        t.assert_float_eq(3.141_592_653_59, 3.14159, 0.001, "pi", "3.14159");
    })?;
    harness.define_test("exact", |t| {
        t.assert_float_eq(0.1 + 0.2, 0.3, 0.0, "0.1 + 0.2", "0.3");
    })?;

    assert!(harness.run_test("close_enough")?);
    assert!(!harness.run_test("exact")?);
    Ok(())
}

#[test]
fn reset_after_mixed_results() -> anyhow::Result<()> {
    let mut harness = quiet_harness();
    harness.define_test("good", |t| {
        t.assert_true(true, "true");
    })?;
    harness.define_test("bad", |t| {
        t.assert_true(false, "false");
    })?;

    assert_eq!(harness.run_all(&HarnessOptions::default()), 2);
    assert_eq!(harness.state().tests_run(), 2);
    assert_eq!(harness.exit_code(), 1);

    harness.reset_state();
    assert_eq!(*harness.state(), RunState::default());
    assert!(!harness.state().current_test_failed());
    assert_eq!(harness.exit_code(), 0);
    Ok(())
}

#[test]
fn string_null_semantics() -> anyhow::Result<()> {
    let mut harness = quiet_harness();
    harness.define_test("both_null", |t| {
        t.assert_str_eq(None, None, "NULL", "NULL");
    })?;
    harness.define_test("one_null", |t| {
        t.assert_str_eq(None, "x", "NULL", "\"x\"");
    })?;
    harness.define_test("same", |t| {
        t.assert_str_eq("x", "x", "\"x\"", "\"x\"");
    })?;

    assert!(harness.run_test("both_null")?);
    assert!(!harness.run_test("one_null")?);
    assert!(harness.run_test("same")?);
    Ok(())
}

#[test]
fn full_report() -> anyhow::Result<()> {
    let sink = SharedSink::default();
    let options = ReportOptions::default()
        .with_disable_color(true)
        .with_show_on_pass(true);
    let mut harness = Harness::with_reporter(Reporter::with_writer(options, sink.clone()));

    harness.define_test("test_pass", |t| {
        t.assert_ge(10, 10, "x", "10");
    })?;
    harness.define_test("test_fail", |t| {
        t.assert_true(false, "0");
    })?;

    harness.run_all(&HarnessOptions::default());
    harness.print_summary()?;

    let output = sink.contents();
    assert!(output.starts_with("[PASS] test_pass\n\n[FAIL] test_fail\n"));
    assert!(output.contains("       Assertion failed: expected true, got false\n"));
    assert!(output.contains("       Expression: 0\n"));
    assert!(output.contains(&format!("       at {}:", file!())));
    assert!(output.contains("Tests:      2 run, 1 passed, 1 failed\n"));
    assert!(output.contains("Assertions: 2 run, 1 passed, 1 failed\n"));
    assert!(output.ends_with("SOME TESTS FAILED\n\n"));
    Ok(())
}

#[test]
fn independent_harnesses_do_not_share_state() -> anyhow::Result<()> {
    let mut first = quiet_harness();
    let mut second = quiet_harness();
    first.define_test("bad", |t| {
        t.assert_msg(false, "always fails");
    })?;
    second.define_test("good", |t| {
        t.assert_msg(true, "never fails");
    })?;

    first.run_test("bad")?;
    second.run_test("good")?;

    assert_eq!(first.exit_code(), 1);
    assert_eq!(second.exit_code(), 0);
    Ok(())
}
