//! Strict numeric parsing. Inputs either parse in full or fail with a typed
//! error; there is no coercion of blanks, booleans, or partial matches.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("not an integer: {0:?}")]
    NotAnInteger(String),
    #[error("not a number: {0:?}")]
    NotANumber(String),
}

/// Parses a base-10 integer. Surrounding whitespace is tolerated; fractions,
/// exponents, and empty input are not.
pub fn parse_integer(input: &str) -> Result<i64, ParseError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ParseError::NotAnInteger(input.to_string()))
}

/// Parses a finite decimal number. NaN and infinity spellings are rejected
/// because the sealed-payload encoding cannot represent them.
pub fn parse_number(input: &str) -> Result<f64, ParseError> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::NotANumber(input.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_integer, parse_number, ParseError};

    #[test]
    fn parses_integers() {
        assert_eq!(parse_integer("42").unwrap(), 42);
        assert_eq!(parse_integer("  -7 ").unwrap(), -7);
    }

    #[test]
    fn rejects_non_integers() {
        for input in ["", "12.5", "abc", "1e3", "0x10"] {
            assert!(matches!(
                parse_integer(input),
                Err(ParseError::NotAnInteger(_))
            ));
        }
    }

    #[test]
    fn parses_numbers() {
        assert_eq!(parse_number("3.25").unwrap(), 3.25);
        assert_eq!(parse_number("1e3").unwrap(), 1000.0);
    }

    #[test]
    fn rejects_non_numbers_and_non_finite_values() {
        for input in ["", "abc", "NaN", "inf", "-inf"] {
            assert!(matches!(parse_number(input), Err(ParseError::NotANumber(_))));
        }
    }
}
