//! Formatting helpers used when composing diagnostics.

/// Formats a floating-point value the way C's `%.<precision>g` conversion does: the
/// shorter of fixed and scientific notation for the given number of significant digits,
/// with trailing zeros removed.
#[allow(
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        return String::from(if value < 0.0 { "-inf" } else { "inf" });
    }

    let precision = precision.max(1);

    // Round to the requested number of significant digits first; the exponent of the
    // rounded value decides which notation is used.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let exponent: i64 = exponent.parse().unwrap_or_default();

    if exponent < -4 || exponent >= precision as i64 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction_zeros(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i64 - 1 - exponent) as usize;
        trim_fraction_zeros(&format!("{value:.decimals$}")).to_owned()
    }
}

fn trim_fraction_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Writes a line diff between two strings, one `- `/`+ `/`  ` prefixed line per entry.
pub fn write_diff(
    writer: &mut impl std::fmt::Write,
    expected: &str,
    actual: &str,
) -> std::fmt::Result {
    for d in diff::lines(expected, actual) {
        match d {
            diff::Result::Left(l) => writeln!(writer, "- {l}")?,
            diff::Result::Both(l, _) => writeln!(writer, "  {l}")?,
            diff::Result::Right(r) => writeln!(writer, "+ {r}")?,
        }
    }

    Ok(())
}
