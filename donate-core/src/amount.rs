use std::{str::FromStr, sync::LazyLock};

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

/// Optional sign, a mantissa with at least one digit, optional exponent.
static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?)([0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("amount pattern")
});

/// Error returned when a donation amount cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount '{0}'")]
    Invalid(String),

    #[error("amount '{0}' is outside the decimal range")]
    OutOfRange(String),
}

/// Parses a donation amount typed by the donor.
///
/// Surrounding whitespace is ignored. Plain decimals (`"250"`, `"99.50"`)
/// and scientific notation (`"1e3"`) are accepted; separators such as
/// commas are not, since the raw text is forwarded to the backend as-is.
/// Well-formed numbers that [`Decimal`] cannot hold give
/// [`ParseAmountError::OutOfRange`]. Digits past its 28-place scale are
/// rounded away.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let trimmed = numeric_text(s)?;
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|e| {
            tracing::debug!(input = %s, "amount outside decimal range: {}", e);
            ParseAmountError::OutOfRange(s.to_string())
        })
}

/// Whether `s` is a number strictly greater than zero.
///
/// The sign is read from the text itself whenever [`parse_amount`] cannot
/// settle it, so `"1e29"` and `"1e-30"` count as positive even though they
/// overflow or round to zero as a [`Decimal`].
pub fn is_positive_amount(s: &str) -> Result<bool, ParseAmountError> {
    match parse_amount(s) {
        Ok(amount) if !amount.is_zero() => return Ok(amount.is_sign_positive()),
        Ok(_) | Err(ParseAmountError::OutOfRange(_)) => {}
        Err(e) => return Err(e),
    }
    let trimmed = numeric_text(s)?;
    let caps = AMOUNT_RE
        .captures(trimmed)
        .ok_or_else(|| ParseAmountError::Invalid(s.to_string()))?;
    let negative = &caps[1] == "-";
    let nonzero = caps[2].bytes().any(|b| matches!(b, b'1'..=b'9'));
    Ok(nonzero && !negative)
}

/// Trims `s` and checks it against the amount grammar.
fn numeric_text(s: &str) -> Result<&str, ParseAmountError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseAmountError::Empty);
    }
    if !AMOUNT_RE.is_match(trimmed) {
        return Err(ParseAmountError::Invalid(s.to_string()));
    }
    Ok(trimmed)
}

/// Formats an amount in paise as rupees with two decimals and
/// thousands separators every three digits (`123456` → `"1,234.56"`).
pub fn format_grouped(paise: u64) -> String {
    let rupees = (paise / 100).to_string();
    format!("{}.{:02}", group_digits(&rupees, 3), paise % 100)
}

/// Formats an amount in paise as an Indian-rupee currency string using
/// lakh/crore grouping (`12345678` → `"₹1,23,456.78"`).
pub fn format_inr(paise: u64) -> String {
    let rupees = (paise / 100).to_string();
    let grouped = if rupees.len() <= 3 {
        rupees
    } else {
        let (head, tail) = rupees.split_at(rupees.len() - 3);
        format!("{},{}", group_digits(head, 2), tail)
    };
    format!("₹{}.{:02}", grouped, paise % 100)
}

/// Formats a whole-rupee amount with three-digit grouping (`5000` → `"5,000"`).
pub fn format_whole(rupees: u64) -> String {
    group_digits(&rupees.to_string(), 3)
}

/// Inserts a comma every `width` digits, counting from the right.
fn group_digits(
    digits: &str,
    width: usize,
) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / width);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % width == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
