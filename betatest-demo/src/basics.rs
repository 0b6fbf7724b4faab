//! The basics suite: one test per core assertion family, plus one test that fails on
//! purpose.

use betatest::{Error, Harness};

const fn add(a: i32, b: i32) -> i32 {
    a + b
}

const fn multiply(a: i32, b: i32) -> i32 {
    a * b
}

fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Registers the basics suite with the harness.
#[allow(clippy::approx_constant)]
pub fn register(harness: &mut Harness) -> Result<(), Error> {
    harness.define_test("test_addition", |t| {
        t.assert_int_eq(add(2, 3), 5, "add(2, 3)", "5");
        t.assert_int_eq(add(-1, 1), 0, "add(-1, 1)", "0");
        t.assert_int_eq(add(0, 0), 0, "add(0, 0)", "0");
    })?;

    harness.define_test("test_multiplication", |t| {
        t.assert_int_eq(multiply(2, 3), 6, "multiply(2, 3)", "6");
        t.assert_int_eq(multiply(-2, 3), -6, "multiply(-2, 3)", "-6");
        t.assert_int_eq(multiply(0, 100), 0, "multiply(0, 100)", "0");
    })?;

    harness.define_test("test_boolean_assertions", |t| {
        let one = 1;
        t.assert_true(one == 1, "one == 1");
        t.assert_false(one == 2, "one == 2");
        t.assert_true(add(2, 2) == 4, "add(2, 2) == 4");
    })?;

    harness.define_test("test_comparisons", |t| {
        let x = 10;
        t.assert_gt(x, 5, "x", "5");
        t.assert_ge(x, 10, "x", "10");
        t.assert_lt(x, 20, "x", "20");
        t.assert_le(x, 10, "x", "10");
    })?;

    harness.define_test("test_string_operations", |t| {
        let result = greet("World");
        t.assert_str_eq(
            result.as_str(),
            "Hello, World!",
            "result",
            "\"Hello, World!\"",
        );
        t.assert_str_ne(result.as_str(), "Goodbye", "result", "\"Goodbye\"");
    })?;

    harness.define_test("test_null_pointers", |t| {
        let mut ptr: Option<&str> = None;
        t.assert_null(&ptr, "ptr");

        ptr = Some("not null");
        t.assert_not_null(&ptr, "ptr");
    })?;

    harness.define_test("test_float_equality", |t| {
        let pi = 3.141_592_653_59;
        t.assert_float_eq(pi, 3.14159, 0.001, "pi", "3.14159");
        t.assert_float_eq(0.1 + 0.2, 0.3, 0.0001, "0.1 + 0.2", "0.3");
    })?;

    harness.define_test("test_with_intentional_failure", |t| {
        t.assert_int_eq(2 + 2, 4, "2 + 2", "4");
        t.assert_int_eq(2 + 2, 5, "2 + 2", "5");
        t.assert_float_eq(0.1 + 0.2, 0.3, 0.0, "0.1 + 0.2", "0.3");
        t.assert_true(false, "false");
    })?;

    Ok(())
}
