//! The strings suite: substring, prefix/suffix, emptiness and pattern assertions.

use betatest::{Error, Harness};

/// Registers the strings suite with the harness.
pub fn register(harness: &mut Harness) -> Result<(), Error> {
    harness.define_test("test_string_contains", |t| {
        let text = "Hello, World!";
        t.assert_str_contains(text, "World", "text");
        t.assert_str_contains(text, "Hello", "text");
        t.assert_str_contains(text, ", ", "text");
    })?;

    harness.define_test("test_string_starts_with", |t| {
        let text = "Hello, World!";
        t.assert_str_starts_with(text, "Hello", "text");
        t.assert_str_starts_with(text, "Hello,", "text");
    })?;

    harness.define_test("test_string_ends_with", |t| {
        let text = "Hello, World!";
        t.assert_str_ends_with(text, "World!", "text");
        t.assert_str_ends_with(text, "!", "text");
    })?;

    harness.define_test("test_string_empty", |t| {
        let empty = "";
        let not_empty = "data";
        t.assert_str_empty(empty, "empty");
        t.assert_str_not_empty(not_empty, "not_empty");
    })?;

    harness.define_test("test_string_regex_matches", |t| {
        let email = "user@example.com";
        t.assert_str_matches(
            email,
            r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$",
            "email",
        );

        let phone = "123-456-7890";
        t.assert_str_matches(phone, r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$", "phone");

        let color = "#FF5733";
        t.assert_str_matches(color, "^#[0-9A-Fa-f]{6}$", "color");

        // Unanchored patterns match anywhere.
        let text = "Hello World";
        t.assert_str_matches(text, "Hello", "text");
        t.assert_str_matches(text, ".*World.*", "text");
    })?;

    harness.define_test("test_string_regex_numbers", |t| {
        let number = "12345";
        t.assert_str_matches(number, "^[0-9]+$", "number");

        let decimal = "123.45";
        t.assert_str_matches(decimal, r"^[0-9]+\.[0-9]+$", "decimal");
    })?;

    Ok(())
}
