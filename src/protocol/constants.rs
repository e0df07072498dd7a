//! Protocol constants
//!
//! Sentinel bytes and fixed frame offsets of the M-Bus ASCII protocol.

// ============================================================================
// Sentinel Bytes
// ============================================================================

/// Start of a request frame.
pub const STX: u8 = 0x02;
/// End of every frame.
pub const ETX: u8 = 0x03;
/// Start of a positive response.
pub const ACK: u8 = 0x06;
/// Start of a negative response.
pub const NAK: u8 = 0x15;

// ============================================================================
// Frame Layout
// ============================================================================

/// Sentinel + TID(2) + PID(2) + ADR(2) + one payload byte + ETX.
pub const MIN_FRAME_LEN: usize = 8;
/// `MIN_FRAME_LEN` plus the two checksum characters.
pub const MIN_FRAME_LEN_WITH_CHECKSUM: usize = 10;

/// Offset of the first TID digit.
pub const TID_OFFSET: usize = 1;
/// Offset of the first PID digit.
pub const PID_OFFSET: usize = 3;
/// Offset of the first ADR digit.
pub const ADR_OFFSET: usize = 5;
/// Offset of the first payload (item or value) byte.
pub const PAYLOAD_OFFSET: usize = 7;

/// Number of ASCII hex characters carrying the checksum.
pub const CHECKSUM_LEN: usize = 2;

/// PID value that switches the checksum on.
pub const PID_WITH_CHECKSUM: u8 = 1;
/// PID value for frames without checksum.
pub const PID_WITHOUT_CHECKSUM: u8 = 0;

/// Largest value a two-digit field can carry.
pub const MAX_FIELD_VALUE: u8 = 99;
