//! # mbus-ascii
//!
//! Encoder and decoder for single-item frames of the PiiGAB M-Bus ASCII
//! protocol, the text-over-serial wrapper a PiiGAB gateway puts around
//! M-Bus meter reads:
//! - Read requests for one named item
//! - ACK (value) and NAK (error code) responses
//! - Optional sum-of-bytes checksum, switched on by PID = 01
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────┐        ┌──────────────────────────┐
//! │  mbus-ascii CLI (clap)   │        │   hex args / printing    │
//! └────────────┬─────────────┘        └────────────┬─────────────┘
//!              │                                   │
//! ┌────────────▼───────────────────────────────────▼─────────────┐
//! │                       Protocol Codec                         │
//! │   build_request / encode_*      parse_response / parse_*     │
//! └────────────┬───────────────────────────────────┬─────────────┘
//!              │                                   │
//!              ▼                                   ▼
//!      ┌──────────────┐                    ┌──────────────┐
//!      │  Digit pairs │                    │   Checksum   │
//!      │  (TID/PID/   │                    │  (sum mod    │
//!      │   ADR)       │                    │   256, hex)  │
//!      └──────────────┘                    └──────────────┘
//! ```
//!
//! The codec is stateless: every function works on one in-memory frame and
//! can be called from any number of threads.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod hex;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MbusAsciiError, Result};
pub use config::{Config, DigitPolicy};
pub use protocol::{build_request, parse_response, Request, Response};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of mbus-ascii
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
