//! Response definitions
//!
//! Represents gateway answers to a single-item request.

use super::constants::PID_WITH_CHECKSUM;
use super::error_code::ErrorCode;

/// Positive answer: the item's value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AckResult {
    pub tid: u8,
    pub pid: u8,
    pub adr: u8,

    /// Item value as sent by the gateway (e.g. "22.3")
    pub value: String,
}

/// Negative answer: a single error code character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NakResult {
    pub tid: u8,
    pub pid: u8,
    pub adr: u8,

    /// Raw error code byte (e.g. b'I')
    pub code: u8,

    /// Description from the error code table
    pub description: &'static str,
}

impl NakResult {
    /// Create a NAK result, looking the description up from the code
    pub fn new(tid: u8, pid: u8, adr: u8, code: u8) -> Self {
        Self {
            tid,
            pid,
            adr,
            code,
            description: ErrorCode::from(code).description(),
        }
    }

    /// Typed view of the error code
    pub fn error_code(&self) -> ErrorCode {
        ErrorCode::from(self.code)
    }
}

/// A decoded response frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Ack(AckResult),
    Nak(NakResult),
}

impl Response {
    /// Create an ACK response
    pub fn ack(tid: u8, pid: u8, adr: u8, value: impl Into<String>) -> Self {
        Response::Ack(AckResult {
            tid,
            pid,
            adr,
            value: value.into(),
        })
    }

    /// Create a NAK response
    pub fn nak(tid: u8, pid: u8, adr: u8, code: u8) -> Self {
        Response::Nak(NakResult::new(tid, pid, adr, code))
    }

    pub fn tid(&self) -> u8 {
        match self {
            Response::Ack(ack) => ack.tid,
            Response::Nak(nak) => nak.tid,
        }
    }

    pub fn pid(&self) -> u8 {
        match self {
            Response::Ack(ack) => ack.pid,
            Response::Nak(nak) => nak.pid,
        }
    }

    pub fn adr(&self) -> u8 {
        match self {
            Response::Ack(ack) => ack.adr,
            Response::Nak(nak) => nak.adr,
        }
    }

    pub fn is_ack(&self) -> bool {
        matches!(self, Response::Ack(_))
    }

    /// Whether the frame carries (or carried) a checksum
    pub fn checksum_included(&self) -> bool {
        self.pid() == PID_WITH_CHECKSUM
    }
}
