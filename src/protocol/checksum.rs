//! Frame checksum
//!
//! The checksum is the sum of every byte between the leading sentinel and
//! the checksum itself (TID, PID, ADR and payload), truncated to 8 bits and
//! sent as two uppercase ASCII hex characters.
//!
//! A mod-256 sum catches most single-bit corruption but is not collision
//! free: reordered bytes or compensating errors pass unnoticed.

use crate::error::{MbusAsciiError, Result};

/// Sum all bytes modulo 256
pub fn compute_checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |sum, &b| sum.wrapping_add(b))
}

/// Render a checksum as two uppercase ASCII hex characters
pub fn checksum_ascii(sum: u8) -> [u8; 2] {
    let text = ::hex::encode_upper([sum]);
    let digits = text.as_bytes();
    [digits[0], digits[1]]
}

/// Compare the checksum of `covered` against the two trailer characters
///
/// The comparison is exact: a lowercase trailer does not match.
pub fn verify_checksum(covered: &[u8], trailer: [u8; 2]) -> Result<()> {
    let computed = compute_checksum(covered);
    if checksum_ascii(computed) != trailer {
        tracing::debug!(
            "Checksum mismatch: computed {:02X}, trailer {:02X?}",
            computed,
            trailer
        );
        return Err(MbusAsciiError::ChecksumMismatch {
            computed,
            found: String::from_utf8_lossy(&trailer).into_owned(),
        });
    }
    Ok(())
}
