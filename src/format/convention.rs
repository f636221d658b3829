//! Numeral conventions and the shared fixed-point digit helpers.

/// Cap on requested fractional digits; the shortest digits of any `f64` fit within it.
pub(crate) const MAX_FRACTION_DIGITS: usize = 340;

/// Fractional digits shown by the grouped (comma) format.
const GROUPED_FRACTION_DIGITS: usize = 3;

/// Decimal and grouping separators used when rendering numerals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralConvention {
    /// `1,234.5`
    Us,
    /// `1.234,5`
    European,
}

impl NumeralConvention {
    /// Pick the convention from the `us-number-format` flag.
    pub fn from_us_flag(use_us_format: bool) -> Self {
        if use_us_format {
            NumeralConvention::Us
        } else {
            NumeralConvention::European
        }
    }

    /// Separator between integer and fractional digits.
    pub fn decimal_separator(self) -> char {
        match self {
            NumeralConvention::Us => '.',
            NumeralConvention::European => ',',
        }
    }

    /// Separator between groups of three integer digits.
    pub fn grouping_separator(self) -> char {
        match self {
            NumeralConvention::Us => ',',
            NumeralConvention::European => '.',
        }
    }

    /// Get the convention name.
    pub fn name(self) -> &'static str {
        match self {
            NumeralConvention::Us => "US",
            NumeralConvention::European => "European",
        }
    }

    /// Format a value with grouping separators and up to three fractional digits.
    pub fn format_grouped(self, value: f64) -> String {
        if let Some(text) = non_finite(value) {
            return text.to_string();
        }

        let digits = FixedDigits::new(value, GROUPED_FRACTION_DIGITS);
        let mut result = String::with_capacity(digits.integer.len() * 4 / 3 + digits.fraction.len() + 2);
        if digits.negative {
            result.push('-');
        }
        result.push_str(&group_digits(&digits.integer, self.grouping_separator()));
        if !digits.fraction.is_empty() {
            result.push(self.decimal_separator());
            result.push_str(&digits.fraction);
        }
        result
    }
}

/// A value split into sign, integer digits and trimmed fractional digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FixedDigits {
    pub(crate) negative: bool,
    pub(crate) integer: String,
    pub(crate) fraction: String,
}

impl FixedDigits {
    /// Round `value` to at most `max_fraction` digits and drop trailing zeros.
    ///
    /// Rounding starts from the shortest digits that read back as `value`. A
    /// dropped `5` with nothing after it rounds to even when `value` is exactly
    /// that decimal, and toward the binary value otherwise. `value` must be
    /// finite.
    pub(crate) fn new(value: f64, max_fraction: usize) -> Self {
        let max_fraction = max_fraction.min(MAX_FRACTION_DIGITS);
        let magnitude = value.abs();
        let (mut integer, mut fraction) = shortest_digits(magnitude);

        if fraction.len() > max_fraction {
            let dropped = fraction.split_off(max_fraction);
            if rounds_up(magnitude, &integer, &fraction, &dropped) {
                increment(&mut integer, &mut fraction);
            }
        }

        let significant = fraction.trim_end_matches('0').len();
        fraction.truncate(significant);

        Self {
            negative: value.is_sign_negative(),
            integer,
            fraction,
        }
    }
}

/// Shortest round-trip digits of a non-negative value, split at the decimal point.
fn shortest_digits(magnitude: f64) -> (String, String) {
    let scientific = format!("{:e}", magnitude);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or_default();
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();

    // Digits before the decimal point.
    let point = exponent + 1;
    match usize::try_from(point) {
        Ok(0) | Err(_) => {
            let zeros = usize::try_from(-point).unwrap_or_default();
            ("0".to_string(), "0".repeat(zeros) + &digits)
        }
        Ok(point) if point >= digits.len() => {
            let zeros = point - digits.len();
            (digits + &"0".repeat(zeros), String::new())
        }
        Ok(point) => {
            let (integer, fraction) = digits.split_at(point);
            (integer.to_string(), fraction.to_string())
        }
    }
}

/// Whether dropping `dropped` from the shortest digits should round up.
fn rounds_up(magnitude: f64, integer: &str, kept: &str, dropped: &str) -> bool {
    let mut rest = dropped.bytes();
    match rest.next() {
        Some(b'6'..=b'9') => true,
        Some(b'5') if rest.any(|b| b != b'0') => true,
        Some(b'5') if exact_fraction_digits(magnitude) == kept.len() + dropped.len() => {
            // Exact tie: keep the last digit even.
            kept.bytes()
                .last()
                .or_else(|| integer.bytes().last())
                .map_or(false, |digit| digit % 2 == 1)
        }
        Some(b'5') => exceeds_shortest(magnitude, integer, kept, dropped),
        _ => false,
    }
}

/// Whether the exact binary value is above its shortest decimal digits.
fn exceeds_shortest(magnitude: f64, integer: &str, kept: &str, dropped: &str) -> bool {
    let exact = format!("{:.*}", exact_fraction_digits(magnitude), magnitude);
    let (exact_integer, exact_fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    if exact_integer != integer {
        return (exact_integer.len(), exact_integer) > (integer.len(), integer);
    }

    let shortest = [kept, dropped].concat();
    let width = exact_fraction.len().max(shortest.len());
    format!("{:0<width$}", exact_fraction) > format!("{:0<width$}", shortest)
}

/// Number of fractional digits in the exact decimal expansion of a value.
fn exact_fraction_digits(magnitude: f64) -> usize {
    let bits = magnitude.to_bits();
    let biased = i64::try_from((bits >> 52) & 0x7ff).unwrap_or_default();
    let mantissa = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (mantissa, -1074)
    } else {
        (mantissa | (1u64 << 52), biased - 1075)
    };
    if mantissa == 0 {
        return 0;
    }

    let exponent = exponent + i64::from(mantissa.trailing_zeros());
    usize::try_from(-exponent).unwrap_or_default()
}

/// Add one unit in the last kept place, carrying into the integer digits.
fn increment(integer: &mut String, fraction: &mut String) {
    let mut digits: Vec<u8> = integer.bytes().chain(fraction.bytes()).collect();
    let split = integer.len();

    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }

    let fraction_digits = digits.split_off(split);
    if carry {
        digits.insert(0, b'1');
    }
    *integer = digits.into_iter().map(char::from).collect();
    *fraction = fraction_digits.into_iter().map(char::from).collect();
}

/// Text for NaN and the infinities, `None` for finite values.
pub(crate) fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("∞")
    } else if value == f64::NEG_INFINITY {
        Some("-∞")
    } else {
        None
    }
}

/// Insert `separator` between groups of three digits.
fn group_digits(digits: &str, separator: char) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result
}
