//! Arithmetic over coordinate values that arrive as text
//!
//! Shape attributes reach the translator as raw strings and the drawing
//! commands are emitted as strings, so coordinates are added and subtracted
//! without ever leaving decimal text form. Only base-10 signed integers are
//! accepted; there is no fractional or unit-suffixed input.

use thiserror::Error;

/// A value that could not be parsed as a base-10 signed integer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedNumberError {
    #[error("`{0}` is not a base-10 integer")]
    NotAnInteger(String),
    #[error("no values to operate on")]
    EmptyInput,
}

fn parse(value: &str) -> Result<i64, MalformedNumberError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| MalformedNumberError::NotAnInteger(value.to_string()))
}

/// Add integer strings, starting the accumulator at 0.
///
/// ```
/// use svg2ass::numeric::sum;
/// assert_eq!(sum(["5", "2"]).unwrap(), "7");
/// ```
pub fn sum<'a>(values: impl IntoIterator<Item = &'a str>) -> Result<String, MalformedNumberError> {
    let mut acc: i64 = 0;
    for value in values {
        acc += parse(value)?;
    }
    Ok(acc.to_string())
}

/// Subtract integer strings left to right; the first value seeds the
/// accumulator, so at least one value is required.
///
/// ```
/// use svg2ass::numeric::sub;
/// assert_eq!(sub(["5", "2"]).unwrap(), "3");
/// ```
pub fn sub<'a>(values: impl IntoIterator<Item = &'a str>) -> Result<String, MalformedNumberError> {
    let mut values = values.into_iter();
    let first = values.next().ok_or(MalformedNumberError::EmptyInput)?;
    let mut acc = parse(first)?;
    for value in values {
        acc -= parse(value)?;
    }
    Ok(acc.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_pair() {
        assert_eq!(sum(["5", "2"]).unwrap(), "7");
        assert_eq!(sum(["0", "0"]).unwrap(), "0");
    }

    #[test]
    fn test_sum_negative_values() {
        assert_eq!(sum(["-5", "2"]).unwrap(), "-3");
        assert_eq!(sum(["10", "-20"]).unwrap(), "-10");
    }

    #[test]
    fn test_sum_many_operands() {
        // Left-to-right accumulation matches ordinary integer addition
        assert_eq!(sum(["1", "2", "3", "4"]).unwrap(), "10");
        assert_eq!(sum(["0", "10", "10"]).unwrap(), "20");
    }

    #[test]
    fn test_sum_empty_is_zero() {
        assert_eq!(sum([]).unwrap(), "0");
    }

    #[test]
    fn test_sum_trims_whitespace() {
        assert_eq!(sum([" 5", "2 "]).unwrap(), "7");
    }

    #[test]
    fn test_sub_pair() {
        assert_eq!(sub(["5", "2"]).unwrap(), "3");
        assert_eq!(sub(["2", "5"]).unwrap(), "-3");
    }

    #[test]
    fn test_sub_many_operands() {
        assert_eq!(sub(["10", "2", "3"]).unwrap(), "5");
    }

    #[test]
    fn test_sub_single_value_passes_through() {
        assert_eq!(sub(["42"]).unwrap(), "42");
    }

    #[test]
    fn test_sub_empty_is_error() {
        assert_eq!(sub([]).unwrap_err(), MalformedNumberError::EmptyInput);
    }

    #[test]
    fn test_malformed_value_is_typed_error() {
        let err = sum(["5", "2px"]).unwrap_err();
        assert_eq!(err, MalformedNumberError::NotAnInteger("2px".to_string()));

        let err = sub(["abc"]).unwrap_err();
        assert_eq!(err, MalformedNumberError::NotAnInteger("abc".to_string()));
    }

    #[test]
    fn test_fractional_values_rejected() {
        assert!(sum(["1.5"]).is_err());
        assert!(sub(["10", "0.5"]).is_err());
    }
}
