//! Digit-pair fields
//!
//! TID, PID and ADR travel as two ASCII decimal digits: the value 7 is sent
//! as the bytes `0x30 0x37` ("07"), never as a raw binary byte.

use std::fmt;

use crate::config::DigitPolicy;
use crate::error::{MbusAsciiError, Result};
use super::constants::MAX_FIELD_VALUE;

/// The three digit-pair header fields of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Transaction id
    Tid,
    /// Protocol id (checksum flag)
    Pid,
    /// Device address
    Adr,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Tid => write!(f, "TID"),
            Field::Pid => write!(f, "PID"),
            Field::Adr => write!(f, "ADR"),
        }
    }
}

/// Check that a field value fits in two decimal digits
pub fn field_value(field: Field, value: u32) -> Result<u8> {
    if value > MAX_FIELD_VALUE as u32 {
        return Err(MbusAsciiError::InvalidFieldRange { field, value });
    }
    Ok(value as u8)
}

/// Encode a value in [0, 99] as two zero-padded ASCII digits
///
/// Callers validate the range first (see [`field_value`]).
pub fn encode_digit_pair(n: u8) -> [u8; 2] {
    debug_assert!(n <= MAX_FIELD_VALUE, "digit pair out of range: {}", n);
    [b'0' + n / 10, b'0' + n % 10]
}

/// Decode two digit bytes without checking them
///
/// Computes `(b0 - '0') * 10 + (b1 - '0')` with wrapping arithmetic, so bytes
/// outside '0'..='9' give a meaningless value rather than a panic.
pub fn decode_digit_pair(b0: u8, b1: u8) -> u8 {
    b0.wrapping_sub(b'0')
        .wrapping_mul(10)
        .wrapping_add(b1.wrapping_sub(b'0'))
}

/// Decode two digit bytes, rejecting anything that is not an ASCII digit
pub fn checked_decode_digit_pair(field: Field, b0: u8, b1: u8) -> Result<u8> {
    if !b0.is_ascii_digit() || !b1.is_ascii_digit() {
        return Err(MbusAsciiError::MalformedDigits {
            field,
            bytes: [b0, b1],
        });
    }
    Ok(decode_digit_pair(b0, b1))
}

/// Decode a digit pair according to the configured policy
pub(crate) fn decode_field(field: Field, b0: u8, b1: u8, policy: DigitPolicy) -> Result<u8> {
    match policy {
        DigitPolicy::Strict => checked_decode_digit_pair(field, b0, b1),
        DigitPolicy::Lenient => Ok(decode_digit_pair(b0, b1)),
    }
}
