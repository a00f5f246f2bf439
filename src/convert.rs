use std::num::IntErrorKind;
use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
  #[error("input is empty")]
  Empty,
  #[error("input contains a character outside the number's base")]
  InvalidDigit,
  #[error("value does not fit into a signed 64-bit integer")]
  OutOfRange,
}

impl From<ParseIntError> for ConversionError {
  fn from(err: ParseIntError) -> Self {
    match err.kind() {
      IntErrorKind::Empty => ConversionError::Empty,
      IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ConversionError::OutOfRange,
      _ => ConversionError::InvalidDigit,
    }
  }
}

/// Parses a signed base-2 integer and renders it in base 10.
pub fn binary_to_decimal(input: &str) -> Result<String, ConversionError> {
  let value = i64::from_str_radix(input, 2)?;
  Ok(value.to_string())
}

/// Parses a signed base-10 integer and renders it in base 2.
///
/// Negative values come out as their 64-bit two's complement pattern.
pub fn decimal_to_binary(input: &str) -> Result<String, ConversionError> {
  let value: i64 = input.parse()?;
  Ok(format!("{value:b}"))
}

#[cfg(test)]
mod tests {
  use super::ConversionError;
  use super::binary_to_decimal;
  use super::decimal_to_binary;

  #[test]
  fn converts_binary_input() {
    assert_eq!(binary_to_decimal("101"), Ok("5".to_string()));
    assert_eq!(binary_to_decimal("0"), Ok("0".to_string()));
    assert_eq!(binary_to_decimal("-101"), Ok("-5".to_string()));
    assert_eq!(binary_to_decimal("+11"), Ok("3".to_string()));
  }

  #[test]
  fn converts_decimal_input() {
    assert_eq!(decimal_to_binary("10"), Ok("1010".to_string()));
    assert_eq!(decimal_to_binary("0"), Ok("0".to_string()));
    assert_eq!(decimal_to_binary("0010"), Ok("1010".to_string()));
    assert_eq!(decimal_to_binary(&i64::MAX.to_string()), Ok("1".repeat(63)));
  }

  #[test]
  fn negative_decimal_renders_twos_complement() {
    assert_eq!(decimal_to_binary("-1"), Ok("1".repeat(64)));
    assert_eq!(decimal_to_binary("-5"), Ok(format!("{}011", "1".repeat(61))));
  }

  #[test]
  fn accepts_full_signed_range() {
    let min = format!("-1{}", "0".repeat(63));
    assert_eq!(binary_to_decimal(&min), Ok(i64::MIN.to_string()));
    assert_eq!(binary_to_decimal(&"1".repeat(63)), Ok(i64::MAX.to_string()));
  }

  #[test]
  fn rejects_malformed_input() {
    assert_eq!(binary_to_decimal(""), Err(ConversionError::Empty));
    assert_eq!(binary_to_decimal("102"), Err(ConversionError::InvalidDigit));
    assert_eq!(binary_to_decimal(" 101"), Err(ConversionError::InvalidDigit));
    assert_eq!(binary_to_decimal("-"), Err(ConversionError::InvalidDigit));
    assert_eq!(decimal_to_binary("12a"), Err(ConversionError::InvalidDigit));
    assert_eq!(decimal_to_binary("1.5"), Err(ConversionError::InvalidDigit));
  }

  #[test]
  fn rejects_out_of_range_input() {
    assert_eq!(binary_to_decimal(&"1".repeat(64)), Err(ConversionError::OutOfRange));
    assert_eq!(decimal_to_binary("9223372036854775808"), Err(ConversionError::OutOfRange));
    assert_eq!(decimal_to_binary("-9223372036854775809"), Err(ConversionError::OutOfRange));
  }
}
