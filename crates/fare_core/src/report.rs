//! Text formatting for the console report.

use std::io::Write;

/// Width of the dashed separator line.
pub const SEPARATOR_WIDTH: usize = 40;

/// Significant digits used when printing distances, fares and ratings.
const SIGNIFICANT_DIGITS: i32 = 6;

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

pub fn write_separator<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", separator())
}

/// Shortest general notation with six significant digits.
///
/// Trailing zeros are dropped (`12.0` prints as `12`, `9.2400` as `9.24`). Values whose
/// decimal exponent is below -4 or at least 6 switch to scientific notation (`1.5e+06`).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Rounding to six digits can carry into the next power of ten, so take the exponent
    // from the rounded scientific form.
    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
