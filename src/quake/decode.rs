//! Column value decoding
//!
//! Counters are stored as 8-byte big-endian signed integers, everything else
//! as decimal text. An absent column decodes to zero.

use thiserror::Error;

/// A stored value that cannot be interpreted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("expected 8 bytes for a big-endian i64, got {0}")]
    InvalidLength(usize),

    #[error("{0:?} is not a number")]
    NotANumber(String),
}

/// Decode an 8-byte big-endian two's-complement integer
pub fn decode_int64_be(raw: Option<&[u8]>) -> Result<i64, DecodeError> {
    let Some(bytes) = raw else {
        return Ok(0);
    };
    let buf: [u8; 8] = bytes
        .try_into()
        .map_err(|_| DecodeError::InvalidLength(bytes.len()))?;
    Ok(i64::from_be_bytes(buf))
}

/// Decode a decimal number stored as text
///
/// Surrounding whitespace is ignored. Empty text is zero; NaN and infinities
/// are rejected along with anything else that is not a finite number.
pub fn decode_decimal(raw: Option<&[u8]>) -> Result<f64, DecodeError> {
    let Some(bytes) = raw else {
        return Ok(0.0);
    };
    let not_a_number = || DecodeError::NotANumber(String::from_utf8_lossy(bytes).into_owned());

    let text = std::str::from_utf8(bytes).map_err(|_| not_a_number())?.trim();
    if text.is_empty() {
        return Ok(0.0);
    }

    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(not_a_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int64_absent_is_zero() {
        assert_eq!(decode_int64_be(None), Ok(0));
    }

    #[test]
    fn test_int64_big_endian() {
        assert_eq!(decode_int64_be(Some(&[0xFF; 8])), Ok(-1));
        assert_eq!(decode_int64_be(Some(&[0, 0, 0, 0, 0, 0, 1, 2])), Ok(258));
        assert_eq!(
            decode_int64_be(Some(&i64::MIN.to_be_bytes())),
            Ok(i64::MIN)
        );
    }

    #[test]
    fn test_int64_wrong_length() {
        assert_eq!(
            decode_int64_be(Some(&[0; 7])),
            Err(DecodeError::InvalidLength(7))
        );
        assert_eq!(
            decode_int64_be(Some(&[0; 9])),
            Err(DecodeError::InvalidLength(9))
        );
        assert_eq!(decode_int64_be(Some(&[])), Err(DecodeError::InvalidLength(0)));
    }

    #[test]
    fn test_decimal() {
        assert_eq!(decode_decimal(None), Ok(0.0));
        assert_eq!(decode_decimal(Some(b"")), Ok(0.0));
        assert_eq!(decode_decimal(Some(b"  ")), Ok(0.0));
        assert_eq!(decode_decimal(Some(b"0.8765")), Ok(0.8765));
        assert_eq!(decode_decimal(Some(b" 4.5\n")), Ok(4.5));
        assert_eq!(decode_decimal(Some(b"1")), Ok(1.0));
    }

    #[test]
    fn test_decimal_rejects_non_numbers() {
        for raw in [&b"abc"[..], b"NaN", b"inf", b"4.5.1", &[0xFF, 0xFE]] {
            assert!(
                matches!(decode_decimal(Some(raw)), Err(DecodeError::NotANumber(_))),
                "{:?}",
                raw
            );
        }
    }
}
