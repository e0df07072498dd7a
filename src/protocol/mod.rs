//! Protocol Module
//!
//! Defines the PiiGAB M-Bus ASCII frames for single-item reads.
//!
//! ## Protocol Format
//!
//! ### Request Format
//! ```text
//! ┌─────┬─────────┬─────────┬─────────┬──────────┬───────────┬─────┐
//! │ STX │ TID (2) │ PID (2) │ ADR (2) │ ITEM (n) │ [CRC (2)] │ ETX │
//! └─────┴─────────┴─────────┴─────────┴──────────┴───────────┴─────┘
//! ```
//!
//! ### Response Format
//! ```text
//! ┌─────────┬─────────┬─────────┬─────────┬─────────────┬───────────┬─────┐
//! │ ACK/NAK │ TID (2) │ PID (2) │ ADR (2) │ PAYLOAD (n) │ [CRC (2)] │ ETX │
//! └─────────┴─────────┴─────────┴─────────┴─────────────┴───────────┴─────┘
//! ```
//!
//! ### Fields
//! - TID, PID, ADR: two ASCII decimal digits each ("07" = `0x30 0x37`)
//! - PID 01: checksum present, PID 00: no checksum
//! - CRC: two uppercase ASCII hex digits of the byte sum mod 256
//!
//! ### Sentinels
//! - 0x02: STX
//! - 0x03: ETX
//! - 0x06: ACK
//! - 0x15: NAK

mod checksum;
mod codec;
mod constants;
mod digits;
mod error_code;
mod request;
mod response;

pub use checksum::{checksum_ascii, compute_checksum, verify_checksum};
pub use codec::{
    build_request, encode_request, encode_response, parse_request, parse_request_with,
    parse_response, parse_response_with,
};
pub use constants::*;
pub use digits::{checked_decode_digit_pair, decode_digit_pair, encode_digit_pair, field_value, Field};
pub use error_code::{ErrorCode, UNKNOWN_ERROR_DESCRIPTION};
pub use request::Request;
pub use response::{AckResult, NakResult, Response};
