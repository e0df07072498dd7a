//! Error types for the M-Bus ASCII codec
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::protocol::Field;

/// Result type alias using MbusAsciiError
pub type Result<T> = std::result::Result<T, MbusAsciiError>;

/// Unified error type for encoding, decoding and input parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MbusAsciiError {
    // -------------------------------------------------------------------------
    // Decoding Errors
    // -------------------------------------------------------------------------
    #[error("Invalid package length: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    #[error("Unknown package: first byte 0x{0:02X} is not a valid sentinel")]
    UnknownSentinel(u8),

    #[error("Package doesn't end with ETX (last byte 0x{0:02X})")]
    MissingTerminator(u8),

    #[error("Malformed {field} digits: {bytes:02X?}")]
    MalformedDigits { field: Field, bytes: [u8; 2] },

    #[error("Invalid package length with checksum: expected at least {expected} bytes, got {actual}")]
    TooShortForChecksum { expected: usize, actual: usize },

    #[error("Invalid checksum: computed {computed:02X}, package carries {found:?}")]
    ChecksumMismatch { computed: u8, found: String },

    #[error("NAK payload must be exactly one error code byte, got {0} bytes")]
    InvalidNakPayload(usize),

    // -------------------------------------------------------------------------
    // Encoding Errors
    // -------------------------------------------------------------------------
    #[error("{field} out of range: {value} (must be 0-99)")]
    InvalidFieldRange { field: Field, value: u32 },

    #[error("Encoding error: {0}")]
    Encoding(String),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("'{0}' is not a valid hexadecimal number")]
    InvalidHex(String),

    #[error("Given package has not an even length ({0} characters)")]
    OddHexLength(usize),

    #[error("No package bytes given")]
    EmptyInput,
}
