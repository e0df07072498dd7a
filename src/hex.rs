//! Hex text helpers
//!
//! Turns command-line hex input into frame bytes and frame bytes back into
//! printable hex. Two input shapes are accepted:
//!
//! - one argument holding the whole package: `06303130303030322E3303`
//! - one argument per byte: `06 30 31 30 ...`; an argument longer than two
//!   characters contributes only its first two (`BEEF` reads as `BE`)

use ::hex::FromHexError;

use crate::config::Config;
use crate::error::{MbusAsciiError, Result};

/// Parse hex arguments into bytes
pub fn parse_hex_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<u8>> {
    match args {
        [] => Err(MbusAsciiError::EmptyInput),
        [single] => parse_hex_string(single.as_ref()),
        many => many
            .iter()
            .map(|arg| parse_hex_token(arg.as_ref()))
            .collect(),
    }
}

/// Parse a run of hex pairs such as `0230313030`
pub fn parse_hex_string(text: &str) -> Result<Vec<u8>> {
    if text.is_empty() {
        return Err(MbusAsciiError::EmptyInput);
    }

    ::hex::decode(text).map_err(|e| match e {
        FromHexError::OddLength => MbusAsciiError::OddHexLength(text.len()),
        _ => MbusAsciiError::InvalidHex(text.to_string()),
    })
}

/// Parse one byte argument, using at most its first two characters
fn parse_hex_token(arg: &str) -> Result<u8> {
    let token = arg.get(..2).unwrap_or(arg);

    // from_str_radix accepts a leading '+', hex input never has one
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(MbusAsciiError::InvalidHex(arg.to_string()));
    }

    u8::from_str_radix(token, 16).map_err(|_| MbusAsciiError::InvalidHex(arg.to_string()))
}

/// Render a frame using the configured byte prefix and suffix
pub fn format_frame(bytes: &[u8], config: &Config) -> String {
    format_bytes(bytes, &config.byte_prefix, &config.byte_suffix)
}

/// Render bytes as `{prefix}HH{suffix}` separated by single spaces
pub fn format_bytes(bytes: &[u8], prefix: &str, suffix: &str) -> String {
    bytes
        .iter()
        .map(|b| format!("{}{:02X}{}", prefix, b, suffix))
        .collect::<Vec<_>>()
        .join(" ")
}
