//! Base-36 short codes for recipe links.
//!
//! A recipe id maps to exactly one canonical code and back, so short links need
//! no lookup table of their own. The alphabet is URL-safe and decoding is
//! case-insensitive.

use thiserror::Error;

/// Digits of the base-36 alphabet, in value order.
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

const RADIX: u64 = 36;

/// Errors returned by [`encode`] and [`decode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortCodeError {
    /// The identifier is outside the non-negative id space.
    #[error("identifier must be non-negative, got {0}")]
    InvalidInput(i64),

    /// The code is empty, contains a character outside `[0-9a-zA-Z]`,
    /// or does not fit into the identifier range.
    #[error("invalid short code '{0}'")]
    InvalidCode(String),
}

/// Encodes a recipe identifier as a canonical base-36 code.
///
/// # Errors
///
/// Returns [`ShortCodeError::InvalidInput`] for negative identifiers.
///
/// # Examples
///
/// ```
/// use foodgram::utils::short_code::encode;
///
/// assert_eq!(encode(0).unwrap(), "0");
/// assert_eq!(encode(36).unwrap(), "10");
/// assert!(encode(-1).is_err());
/// ```
pub fn encode(id: i64) -> Result<String, ShortCodeError> {
    let value = u64::try_from(id).map_err(|_| ShortCodeError::InvalidInput(id))?;
    Ok(encode_unsigned(value))
}

fn encode_unsigned(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    // u64::MAX needs 13 base-36 digits
    let mut digits = Vec::with_capacity(13);
    while value > 0 {
        digits.push(ALPHABET[(value % RADIX) as usize]);
        value /= RADIX;
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}

/// Decodes a base-36 code back into a recipe identifier.
///
/// Letter digits are accepted in either case. Leading zeros are tolerated,
/// so `"00a"` decodes to the same id as `"a"`.
///
/// # Errors
///
/// Returns [`ShortCodeError::InvalidCode`] if the code is empty, contains a
/// character outside `[0-9a-zA-Z]`, or exceeds `i64::MAX`.
///
/// # Examples
///
/// ```
/// use foodgram::utils::short_code::decode;
///
/// assert_eq!(decode("10").unwrap(), 36);
/// assert_eq!(decode("aB").unwrap(), decode("ab").unwrap());
/// assert!(decode("#").is_err());
/// ```
pub fn decode(code: &str) -> Result<i64, ShortCodeError> {
    let invalid = || ShortCodeError::InvalidCode(code.to_string());

    if code.is_empty() {
        return Err(invalid());
    }

    let mut value: i64 = 0;
    for ch in code.chars() {
        let digit = ch
            .to_digit(RADIX as u32)
            .ok_or_else(invalid)? as i64;

        value = value
            .checked_mul(RADIX as i64)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(invalid)?;
    }

    Ok(value)
}
