//! Request definitions
//!
//! A read request for one named item.

use super::constants::PID_WITH_CHECKSUM;

/// A single-item read request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Transaction id (0-99)
    pub tid: u8,

    /// Protocol id; 1 switches the checksum on
    pub pid: u8,

    /// Device address (0-99)
    pub adr: u8,

    /// Dotted item path, e.g. `Gateway.67002656_15701045T.Temperature`
    pub item: String,
}

impl Request {
    /// Create a request; field ranges are checked when it is encoded
    pub fn new(tid: u8, pid: u8, adr: u8, item: impl Into<String>) -> Self {
        Self {
            tid,
            pid,
            adr,
            item: item.into(),
        }
    }

    /// Whether the encoded frame carries a checksum
    pub fn checksum_included(&self) -> bool {
        self.pid == PID_WITH_CHECKSUM
    }
}
