//! Quantity text validation for measurement input fields.
//!
//! A quantity is valid iff the text parses to a non-NaN number >= 0.
//! Empty (or whitespace-only) input counts as a valid 0, the same way
//! `Number("")` coerces in the browser.

use thiserror::Error;

/// Rejected quantity input. Recovered locally by the input field (the
/// invalid marker is toggled); never propagated or logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidQuantityError {
    #[error("not a number")]
    NotANumber,
    #[error("negative quantity")]
    Negative,
}

/// Parse user-typed quantity text into a non-negative number.
pub fn parse_quantity(raw: &str) -> Result<f64, InvalidQuantityError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| InvalidQuantityError::NotANumber)?;
    if value.is_nan() {
        return Err(InvalidQuantityError::NotANumber);
    }
    if value < 0.0 {
        return Err(InvalidQuantityError::Negative);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_negative_numbers() {
        assert_eq!(parse_quantity("0"), Ok(0.0));
        assert_eq!(parse_quantity("12.5"), Ok(12.5));
        assert_eq!(parse_quantity("1e3"), Ok(1000.0));
        assert_eq!(parse_quantity(" 7 "), Ok(7.0));
        assert_eq!(parse_quantity("+5"), Ok(5.0));
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(parse_quantity(""), Ok(0.0));
        assert_eq!(parse_quantity("   "), Ok(0.0));
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert_eq!(parse_quantity("abc"), Err(InvalidQuantityError::NotANumber));
        assert_eq!(parse_quantity("12x"), Err(InvalidQuantityError::NotANumber));
        assert_eq!(parse_quantity("NaN"), Err(InvalidQuantityError::NotANumber));
    }

    #[test]
    fn rejects_negative_numbers() {
        assert_eq!(parse_quantity("-3"), Err(InvalidQuantityError::Negative));
        assert_eq!(parse_quantity("-0.001"), Err(InvalidQuantityError::Negative));
    }

    #[test]
    fn has_no_upper_bound() {
        assert_eq!(parse_quantity("1e308"), Ok(1e308));
    }
}
