//! Protocol codec
//!
//! Encoding and decoding functions for single-item frames.
//!
//! ## Wire Format
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
//! - ACK payload: the item value as ASCII text
//! - NAK payload: exactly one error code character
//! - CRC: only when PID = 01, covers TID through the last payload byte
//!
//! ### Decode Check Order
//! length → sentinel → terminator → digits → checksum length → checksum
//! value → payload. The first failing check ends decoding.

use bytes::BufMut;

use crate::config::DigitPolicy;
use crate::error::{MbusAsciiError, Result};
use super::checksum::{checksum_ascii, compute_checksum, verify_checksum};
use super::constants::*;
use super::digits::{decode_field, encode_digit_pair, field_value, Field};
use super::{AckResult, NakResult, Request, Response};

// =============================================================================
// Request Encoding/Decoding
// =============================================================================

/// Build a read request frame for one item
///
/// Format: STX + TID + PID + ADR + item + [CRC] + ETX
pub fn build_request(tid: u8, pid: u8, adr: u8, item: &str) -> Result<Vec<u8>> {
    let payload = ascii_payload("item", item.as_bytes())?;
    let frame = encode_frame(STX, tid, pid, adr, payload)?;

    tracing::trace!("Encoded request for item {:?}: {:02X?}", item, frame);
    Ok(frame)
}

/// Encode a request to bytes
pub fn encode_request(request: &Request) -> Result<Vec<u8>> {
    build_request(request.tid, request.pid, request.adr, &request.item)
}

/// Decode a request frame (gateway side) with strict digit checking
pub fn parse_request(bytes: &[u8]) -> Result<Request> {
    parse_request_with(bytes, DigitPolicy::Strict)
}

/// Decode a request frame using the given digit policy
pub fn parse_request_with(bytes: &[u8], policy: DigitPolicy) -> Result<Request> {
    let parts = split_frame(bytes, &[STX], policy)?;

    // Same rule as build_request, so a parsed request always re-encodes
    let item = ascii_payload("item", parts.payload)?
        .iter()
        .map(|&b| b as char)
        .collect();

    Ok(Request {
        tid: parts.tid,
        pid: parts.pid,
        adr: parts.adr,
        item,
    })
}

// =============================================================================
// Response Encoding/Decoding
// =============================================================================

/// Encode a response frame (gateway side)
///
/// Format: ACK + TID + PID + ADR + value + [CRC] + ETX,
/// or NAK + TID + PID + ADR + code + [CRC] + ETX
pub fn encode_response(response: &Response) -> Result<Vec<u8>> {
    match response {
        Response::Ack(ack) => {
            let value = ascii_payload("value", ack.value.as_bytes())?;
            encode_frame(ACK, ack.tid, ack.pid, ack.adr, value)
        }
        Response::Nak(nak) => {
            let code = ascii_payload("NAK code", std::slice::from_ref(&nak.code))?;
            encode_frame(NAK, nak.tid, nak.pid, nak.adr, code)
        }
    }
}

/// Decode a response frame with strict digit checking
pub fn parse_response(bytes: &[u8]) -> Result<Response> {
    parse_response_with(bytes, DigitPolicy::Strict)
}

/// Decode a response frame using the given digit policy
pub fn parse_response_with(bytes: &[u8], policy: DigitPolicy) -> Result<Response> {
    let parts = split_frame(bytes, &[ACK, NAK], policy)?;

    let response = if parts.sentinel == ACK {
        // One byte per character; values are ASCII in practice
        let value = parts.payload.iter().map(|&b| b as char).collect();
        Response::Ack(AckResult {
            tid: parts.tid,
            pid: parts.pid,
            adr: parts.adr,
            value,
        })
    } else {
        let code = match parts.payload {
            [code] => *code,
            other => return Err(MbusAsciiError::InvalidNakPayload(other.len())),
        };
        Response::Nak(NakResult::new(parts.tid, parts.pid, parts.adr, code))
    };

    tracing::trace!("Decoded response: {:?}", response);
    Ok(response)
}

// =============================================================================
// Shared Frame Helpers
// =============================================================================

/// Header fields and payload of a frame that passed all structural checks
struct FrameParts<'a> {
    sentinel: u8,
    tid: u8,
    pid: u8,
    adr: u8,
    payload: &'a [u8],
}

/// Assemble sentinel, digit fields, payload, optional checksum and ETX
fn encode_frame(sentinel: u8, tid: u8, pid: u8, adr: u8, payload: &[u8]) -> Result<Vec<u8>> {
    let tid = field_value(Field::Tid, tid as u32)?;
    let pid = field_value(Field::Pid, pid as u32)?;
    let adr = field_value(Field::Adr, adr as u32)?;
    let checksum_included = pid == PID_WITH_CHECKSUM;

    let capacity = MIN_FRAME_LEN - 1
        + payload.len()
        + if checksum_included { CHECKSUM_LEN } else { 0 };
    let mut frame = Vec::with_capacity(capacity);

    frame.put_u8(sentinel);
    frame.put_slice(&encode_digit_pair(tid));
    frame.put_slice(&encode_digit_pair(pid));
    frame.put_slice(&encode_digit_pair(adr));
    frame.put_slice(payload);

    if checksum_included {
        // Everything after the sentinel
        let sum = compute_checksum(&frame[TID_OFFSET..]);
        frame.put_slice(&checksum_ascii(sum));
    }

    frame.put_u8(ETX);
    Ok(frame)
}

/// Validate the frame structure and slice out its parts
fn split_frame<'a>(bytes: &'a [u8], sentinels: &[u8], policy: DigitPolicy) -> Result<FrameParts<'a>> {
    if bytes.len() < MIN_FRAME_LEN {
        tracing::debug!("Rejected frame of {} bytes", bytes.len());
        return Err(MbusAsciiError::TooShort {
            expected: MIN_FRAME_LEN,
            actual: bytes.len(),
        });
    }

    let sentinel = bytes[0];
    if !sentinels.contains(&sentinel) {
        tracing::debug!("Rejected frame with sentinel 0x{:02X}", sentinel);
        return Err(MbusAsciiError::UnknownSentinel(sentinel));
    }

    let last = bytes[bytes.len() - 1];
    if last != ETX {
        tracing::debug!("Rejected frame ending in 0x{:02X}", last);
        return Err(MbusAsciiError::MissingTerminator(last));
    }

    let tid = decode_field(Field::Tid, bytes[TID_OFFSET], bytes[TID_OFFSET + 1], policy)?;
    let pid = decode_field(Field::Pid, bytes[PID_OFFSET], bytes[PID_OFFSET + 1], policy)?;
    let adr = decode_field(Field::Adr, bytes[ADR_OFFSET], bytes[ADR_OFFSET + 1], policy)?;

    let payload_end = if pid == PID_WITH_CHECKSUM {
        if bytes.len() < MIN_FRAME_LEN_WITH_CHECKSUM {
            return Err(MbusAsciiError::TooShortForChecksum {
                expected: MIN_FRAME_LEN_WITH_CHECKSUM,
                actual: bytes.len(),
            });
        }

        let crc_start = bytes.len() - 1 - CHECKSUM_LEN;
        verify_checksum(
            &bytes[TID_OFFSET..crc_start],
            [bytes[crc_start], bytes[crc_start + 1]],
        )?;
        crc_start
    } else {
        bytes.len() - 1
    };

    Ok(FrameParts {
        sentinel,
        tid,
        pid,
        adr,
        payload: &bytes[PAYLOAD_OFFSET..payload_end],
    })
}

/// Check that a payload is non-empty ASCII
///
/// Applied when encoding any payload and when parsing a request item.
/// ACK values are decoded leniently instead (see `parse_response_with`).
fn ascii_payload<'a>(what: &str, payload: &'a [u8]) -> Result<&'a [u8]> {
    if payload.is_empty() {
        return Err(MbusAsciiError::Encoding(format!("{} is empty", what)));
    }

    if let Some(pos) = payload.iter().position(|b| !b.is_ascii()) {
        return Err(MbusAsciiError::Encoding(format!(
            "{} contains non-ASCII byte 0x{:02X} at position {}",
            what, payload[pos], pos
        )));
    }

    Ok(payload)
}
