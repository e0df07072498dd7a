//! NAK error codes
//!
//! A negative response carries a single ASCII character naming the fault.

use std::fmt;

/// Error codes a gateway returns in a NAK frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// 'C'
    ChecksumFault,
    /// 'D'
    InvalidDataType,
    /// 'I'
    UnknownItem,
    /// 'M'
    MasterPortTimeout,
    /// 'O'
    TooManyReadItems,
    /// 'T'
    SlavePortTimeout,
    /// 'V'
    ValueOutOfRange,
    /// 'X'
    WrongMultiDropAddress,
    /// Any byte not in the table.
    ///
    /// `From<u8>` only produces this for unlisted bytes. Built by hand with a
    /// listed byte (e.g. `Unknown(b'I')`) it still compares unequal to the
    /// named variant; go through `ErrorCode::from(code.as_byte())` to
    /// normalize.
    Unknown(u8),
}

/// Description used for codes missing from the table.
pub const UNKNOWN_ERROR_DESCRIPTION: &str = "Unknown error code";

const ERROR_CODE_TABLE: [(u8, ErrorCode, &str); 8] = [
    (b'C', ErrorCode::ChecksumFault, "Checksum fault"),
    (b'D', ErrorCode::InvalidDataType, "Invalid data type; expected a string-typed value"),
    (b'I', ErrorCode::UnknownItem, "Unknown item ID"),
    (b'M', ErrorCode::MasterPortTimeout, "Timeout on the hub's master port"),
    (b'O', ErrorCode::TooManyReadItems, "Too many read items"),
    (b'T', ErrorCode::SlavePortTimeout, "Timeout on the hub's slave port"),
    (b'V', ErrorCode::ValueOutOfRange, "Validation: write value out of range"),
    (b'X', ErrorCode::WrongMultiDropAddress, "Internal: wrong multi-drop address"),
];

impl ErrorCode {
    /// Human-readable description of the code
    pub fn description(&self) -> &'static str {
        ERROR_CODE_TABLE
            .iter()
            .find(|(_, code, _)| code == self)
            .map(|(_, _, description)| *description)
            .unwrap_or(UNKNOWN_ERROR_DESCRIPTION)
    }

    /// The byte sent on the wire
    pub fn as_byte(&self) -> u8 {
        u8::from(*self)
    }
}

impl From<u8> for ErrorCode {
    fn from(byte: u8) -> Self {
        ERROR_CODE_TABLE
            .iter()
            .find(|(b, _, _)| *b == byte)
            .map(|(_, code, _)| *code)
            .unwrap_or(ErrorCode::Unknown(byte))
    }
}

impl From<ErrorCode> for u8 {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::Unknown(byte) => byte,
            known => ERROR_CODE_TABLE
                .iter()
                .find(|(_, c, _)| *c == known)
                .map(|(b, _, _)| *b)
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
